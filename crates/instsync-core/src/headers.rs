//! Target file names and the header line each one must start with

use std::collections::HashSet;

use crate::{Error, Result};

/// File names synchronized when the caller does not supply any.
pub const DEFAULT_FILES: [&str; 3] = ["AGENTS.md", "CLAUDE.md", "GEMINI.md"];

/// Minimum number of file names accepted from user input.
pub const MIN_FILES: usize = 2;

/// Header line used for a file name: `# <name>`.
pub fn header_for(name: &str) -> String {
    format!("# {name}")
}

/// Mapping of logical file name to its required header line.
///
/// Iteration follows insertion order. The sync engine relies on that order
/// to pick between files with identical modification times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Header mapping `name -> "# name"` for each of `names`.
    ///
    /// A repeated name keeps its first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), header_for(name))
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, header)| header.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, header)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, header)| (name.as_str(), header.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Default for HeaderMap {
    /// `AGENTS.md`, `CLAUDE.md` and `GEMINI.md`, each headed `# <name>`.
    fn default() -> Self {
        Self::from_names(DEFAULT_FILES)
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    /// Collect pairs; for a repeated name the first pair wins.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, header) in iter {
            let name = name.into();
            if map.get(&name).is_none() {
                map.entries.push((name, header.into()));
            }
        }
        map
    }
}

/// Parse a comma-separated list of file names.
///
/// Parts are trimmed and empty parts dropped. The list must name at least
/// [`MIN_FILES`] distinct files.
pub fn parse_file_list(value: &str) -> Result<Vec<String>> {
    let files: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    let mut seen = HashSet::new();
    for name in &files {
        if !seen.insert(name.as_str()) {
            return Err(Error::DuplicateFile { name: name.clone() });
        }
    }

    if files.len() < MIN_FILES {
        return Err(Error::TooFewFiles {
            count: files.len(),
            min: MIN_FILES,
        });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_default_headers() {
        let headers = HeaderMap::default();
        let pairs: Vec<_> = headers.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("AGENTS.md", "# AGENTS.md"),
                ("CLAUDE.md", "# CLAUDE.md"),
                ("GEMINI.md", "# GEMINI.md"),
            ]
        );
    }

    #[rstest]
    #[case(&["ONE.md", "TWO.md"])]
    #[case(&["FILE_ONE.md", "FILE_TWO.md", "FILE_THREE.md"])]
    fn test_from_names_generates_expected_mapping(#[case] files: &[&str]) {
        let headers = HeaderMap::from_names(files);
        assert_eq!(headers.len(), files.len());
        for name in files {
            assert_eq!(headers.get(name), Some(format!("# {name}").as_str()));
        }
        assert_eq!(headers.names().collect::<Vec<_>>(), files.to_vec());
    }

    #[test]
    fn test_collect_keeps_first_duplicate() {
        let headers: HeaderMap = [("A.md", "first"), ("A.md", "second")].into_iter().collect();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("A.md"), Some("first"));
    }

    #[test]
    fn test_parse_file_list_trims_and_drops_empty_parts() {
        let files = parse_file_list(" AGENTS.md , ,CLAUDE.md,").unwrap();
        assert_eq!(files, vec!["AGENTS.md".to_string(), "CLAUDE.md".to_string()]);
    }

    #[rstest]
    #[case("ONLY.md")]
    #[case("")]
    #[case("SINGLE.md,")]
    #[case(",")]
    fn test_parse_file_list_rejects_too_few(#[case] value: &str) {
        let err = parse_file_list(value).unwrap_err();
        assert!(matches!(err, Error::TooFewFiles { .. }));
        assert!(err.is_usage());
    }

    #[test]
    fn test_parse_file_list_rejects_duplicates() {
        let err = parse_file_list("A.md,B.md,A.md").unwrap_err();
        assert!(matches!(err, Error::DuplicateFile { ref name } if name == "A.md"));
    }
}
