//! Line-oriented `key=value` parsing for properties-format resources.
//!
//! The accepted grammar is the common subset of the properties format:
//!
//! - one `key=value` (or `key: value`) pair per line, first separator wins;
//! - `#` and `!` start comment lines;
//! - blank lines are skipped;
//! - whitespace around keys and values is trimmed;
//! - a line with no separator is a key with an empty value.
//!
//! Parsing is pure text-in, pairs-out — file I/O lives in the store so this
//! stays trivially testable.

/// Parse properties-format `content` into key-value pairs, in file order.
///
/// Later occurrences of the same key are returned as separate pairs; the
/// caller's merge decides which one wins (the store overwrite-merges, so
/// the last occurrence does).
pub fn parse(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let (key, value) = match trimmed.find(['=', ':']) {
            Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
            None => (trimmed, ""),
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        pairs.push((key.to_string(), value.trim().to_string()));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(content: &str) -> Vec<(String, String)> {
        parse(content)
    }

    #[test]
    fn simple_pair() {
        assert_eq!(parsed("host=localhost"), vec![("host".into(), "localhost".into())]);
    }

    #[test]
    fn colon_separator() {
        assert_eq!(parsed("host: localhost"), vec![("host".into(), "localhost".into())]);
    }

    #[test]
    fn whitespace_trimmed() {
        assert_eq!(parsed("  port = 8080  "), vec![("port".into(), "8080".into())]);
    }

    #[test]
    fn hash_comment_skipped() {
        assert_eq!(parsed("# a comment\nport=1"), vec![("port".into(), "1".into())]);
    }

    #[test]
    fn bang_comment_skipped() {
        assert_eq!(parsed("! also a comment\nport=1"), vec![("port".into(), "1".into())]);
    }

    #[test]
    fn blank_lines_skipped() {
        assert_eq!(parsed("\n\nport=1\n\n"), vec![("port".into(), "1".into())]);
    }

    #[test]
    fn separatorless_line_is_empty_value() {
        assert_eq!(parsed("flag"), vec![("flag".into(), "".into())]);
    }

    #[test]
    fn value_may_contain_separator() {
        assert_eq!(
            parsed("url=https://example.com:8080/path?a=b"),
            vec![("url".into(), "https://example.com:8080/path?a=b".into())]
        );
    }

    #[test]
    fn first_separator_wins() {
        assert_eq!(parsed("a:b=c"), vec![("a".into(), "b=c".into())]);
    }

    #[test]
    fn empty_value_after_separator() {
        assert_eq!(parsed("empty="), vec![("empty".into(), "".into())]);
    }

    #[test]
    fn duplicate_keys_kept_in_order() {
        assert_eq!(
            parsed("k=1\nk=2"),
            vec![("k".into(), "1".into()), ("k".into(), "2".into())]
        );
    }

    #[test]
    fn separator_with_no_key_skipped() {
        assert_eq!(parsed("=value"), Vec::<(String, String)>::new());
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert!(parsed("").is_empty());
    }

    #[test]
    fn multiple_pairs_in_order() {
        assert_eq!(
            parsed("a=1\nb=2\nc=3"),
            vec![
                ("a".into(), "1".into()),
                ("b".into(), "2".into()),
                ("c".into(), "3".into()),
            ]
        );
    }
}
