//! Body extraction and content composition
//!
//! Target files are stored as `<header line>\n<body>`. These helpers split
//! a file into that shape and put it back together; neither touches disk.

/// Everything after the first line of `content`.
///
/// The first line ends at the first `\n`, `\r\n` or `\r`. Exactly one line is
/// stripped whether or not it looks like a header. Line endings in the rest
/// are returned untouched, including a trailing terminator. Content without
/// any terminator is a lone header line and yields an empty body.
pub fn extract_body(content: &str) -> &str {
    let Some(idx) = content.find(['\n', '\r']) else {
        return "";
    };

    let rest = &content[idx..];
    if rest.starts_with("\r\n") {
        &rest[2..]
    } else {
        &rest[1..]
    }
}

/// Build the full file content for `header` followed by `body`.
///
/// A newline is appended to the header unless it already ends in one.
pub fn compose_content(header: &str, body: &str) -> String {
    let mut content = String::with_capacity(header.len() + body.len() + 1);
    content.push_str(header);
    if !header.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(body);
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("# AGENTS.md", "")]
    #[case("# AGENTS.md\n", "")]
    #[case("# AGENTS.md\nBody line.\n", "Body line.\n")]
    #[case("# AGENTS.md\nno trailing newline", "no trailing newline")]
    #[case("# AGENTS.md\r\nwindows\r\n", "windows\r\n")]
    #[case("# AGENTS.md\rold mac\r", "old mac\r")]
    #[case("\nstarts blank\n", "starts blank\n")]
    #[case("Not a header\nkept\n", "kept\n")]
    #[case("# H\n\n\nspaced\n\n", "\n\nspaced\n\n")]
    #[case("# H\x0cstill header\nbody\n", "body\n")]
    #[case("# H\u{2028}still header\nbody\n", "body\n")]
    #[case("# H\x0bstill header", "")]
    fn test_extract_body(#[case] content: &str, #[case] expected: &str) {
        assert_eq!(extract_body(content), expected);
    }

    #[rstest]
    #[case("# CLAUDE.md", "Body\n", "# CLAUDE.md\nBody\n")]
    #[case("# CLAUDE.md\n", "Body\n", "# CLAUDE.md\nBody\n")]
    #[case("# CLAUDE.md\n\n", "Body\n", "# CLAUDE.md\n\nBody\n")]
    #[case("# CLAUDE.md", "", "# CLAUDE.md\n")]
    fn test_compose_content(#[case] header: &str, #[case] body: &str, #[case] expected: &str) {
        assert_eq!(compose_content(header, body), expected);
    }
}
