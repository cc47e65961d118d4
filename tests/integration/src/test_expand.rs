//! `$expand` integration tests.

#[cfg(test)]
mod tests {
    use rsodata_model::ODataExpandQuery;
    use rsodata_parser::{QueryParams, apply_expand};
    use serde_json::json;

    use crate::{parse, parse_json};

    #[test]
    fn test_should_leave_expand_undefined_without_key() {
        for query in ["", "?", "?$select=a", "?$top=5&$filter=name eq 'x'", "?$Expand=Foo"] {
            let parsed = parse(query);
            assert!(parsed.expand.is_none(), "query: {query}");
            assert!(parsed.error.is_none(), "query: {query}");
        }
    }

    #[test]
    fn test_should_parse_bare_expand() {
        assert_eq!(
            parse_json("?$expand=Foo"),
            json!({ "$expand": { "Foo": { "$select": [] } } })
        );
    }

    #[test]
    fn test_should_parse_multiple_bare_expands() {
        assert_eq!(
            parse_json("?$expand=Foo,Bar"),
            json!({ "$expand": { "Foo": { "$select": [] }, "Bar": { "$select": [] } } })
        );
    }

    #[test]
    fn test_should_parse_expand_with_select() {
        assert_eq!(
            parse_json("?$expand=Foo($select=a,b)"),
            json!({ "$expand": { "Foo": { "$select": ["a", "b"] } } })
        );
    }

    #[test]
    fn test_should_parse_two_levels_of_expand() {
        assert_eq!(
            parse_json("?$expand=Foo($expand=Bar)"),
            json!({ "$expand": { "Foo": { "$expand": { "Bar": { "$select": [] } } } } })
        );
    }

    #[test]
    fn test_should_parse_item_after_sub_query() {
        assert_eq!(
            parse_json("?$expand=Foo($select=a),Bar"),
            json!({
                "$expand": {
                    "Foo": { "$select": ["a"] },
                    "Bar": { "$select": [] }
                }
            })
        );
    }

    #[test]
    fn test_should_parse_dataverse_style_query() {
        let value = parse_json(
            "?$select=name&$expand=primarycontactid($select=contactid,fullname;\
             $expand=parentcustomerid_account($select=name)),Account_Tasks($select=subject)",
        );
        assert_eq!(
            value,
            json!({
                "$select": ["name"],
                "$expand": {
                    "primarycontactid": {
                        "$select": ["contactid", "fullname"],
                        "$expand": {
                            "parentcustomerid_account": { "$select": ["name"] }
                        }
                    },
                    "Account_Tasks": { "$select": ["subject"] }
                }
            })
        );
    }

    #[test]
    fn test_should_parse_percent_encoded_query() {
        assert_eq!(
            parse_json("?%24expand=Foo%28%24select%3Da%2Cb%29"),
            json!({ "$expand": { "Foo": { "$select": ["a", "b"] } } })
        );
    }

    #[test]
    fn test_should_parse_same_input_identically() {
        let query = "?$expand=Foo($select=a;$expand=Bar($select=b)),Baz";
        assert_eq!(parse(query), parse(query));
    }

    #[test]
    fn test_should_parse_hundreds_of_items() {
        let items = (0..400).map(|i| format!("Nav_{i}")).collect::<Vec<_>>();
        let parsed = parse(&format!("?$expand={}", items.join(",")));
        assert!(parsed.error.is_none());
        let expand = parsed.expand.unwrap();
        assert_eq!(expand.len(), 400);
        for item in &items {
            assert_eq!(expand[item], ODataExpandQuery::bare());
        }
    }

    #[test]
    fn test_should_report_flag_from_entry_point() {
        let mut query = rsodata_model::ODataQuery::default();
        assert!(!apply_expand(&QueryParams::parse("?$expand=Foo"), &mut query));

        let mut query = rsodata_model::ODataQuery::default();
        assert!(apply_expand(&QueryParams::parse("?$expand=Foo,"), &mut query));
        assert!(query.error.is_some());
        assert!(query.expand.is_none());
    }
}
