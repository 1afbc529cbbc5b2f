use instsync_core::{compose_content, extract_body};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_body_survives_any_header(header in "[^\r\n]*", body in "\\PC*") {
        let content = compose_content(&header, &body);
        prop_assert_eq!(extract_body(&content), body.as_str());
    }

    #[test]
    fn test_composed_content_starts_with_header_line(header in "[^\r\n]*", body in "\\PC*") {
        let content = compose_content(&header, &body);
        let expected_prefix = format!("{}\n", header);
        prop_assert!(content.starts_with(&expected_prefix));
    }

    #[test]
    fn test_extract_never_grows(content in "\\PC*") {
        let body = extract_body(&content);
        prop_assert!(body.len() <= content.len());
        prop_assert!(content.ends_with(body));
    }
}
