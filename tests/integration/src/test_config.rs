//! Configuration-driven parsing tests.

#[cfg(test)]
mod tests {
    use rsodata_core::ODataConfig;
    use rsodata_parser::{ParserOptions, QueryParams, parse_query_with};

    fn parse_with_depth(query: &str, depth: Option<usize>) -> rsodata_model::ODataQuery {
        let config = ODataConfig {
            max_expand_depth: depth,
            ..ODataConfig::default()
        };
        parse_query_with(&QueryParams::parse(query), &ParserOptions::from(&config))
    }

    #[test]
    fn test_should_allow_unbounded_nesting_by_default() {
        let query = "?$expand=A($expand=B($expand=C($expand=D)))";
        assert!(parse_with_depth(query, None).error.is_none());
    }

    #[test]
    fn test_should_reject_nesting_beyond_limit() {
        let query = "?$expand=A($expand=B($expand=C($expand=D)))";
        assert!(parse_with_depth(query, Some(3)).error.is_none());
        assert_eq!(
            parse_with_depth(query, Some(2)).error.map(|e| e.message),
            Some("expand depth limit exceeded (2)".to_owned())
        );
    }
}
