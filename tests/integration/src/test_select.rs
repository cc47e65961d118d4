//! `$select` integration tests.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{error_message, parse_json};

    #[test]
    fn test_should_parse_top_level_select() {
        assert_eq!(
            parse_json("?$select=name,revenue"),
            json!({ "$select": ["name", "revenue"] })
        );
    }

    #[test]
    fn test_should_parse_select_beside_expand() {
        assert_eq!(
            parse_json("?$expand=Foo&$select=a"),
            json!({ "$select": ["a"], "$expand": { "Foo": { "$select": [] } } })
        );
    }

    #[test]
    fn test_should_reject_malformed_select() {
        assert_eq!(
            error_message("?$select=a,,b").as_deref(),
            Some("invalid select expression")
        );
    }
}
