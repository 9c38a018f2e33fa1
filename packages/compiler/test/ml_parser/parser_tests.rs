//! Tree Builder Tests

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tree_builder_tests {
    use super::utils::*;
    use stache_compiler::{parse, ParseError, ParseOptions};

    fn dom(rows: &[[&str; 3]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|part| part.to_string()).collect())
            .collect()
    }

    fn humanize(input: &str) -> Vec<Vec<String>> {
        parse_and_humanize_dom(input, &ParseOptions::default())
    }

    mod elements {
        use super::*;

        #[test]
        fn should_nest_elements_and_attributes() {
            assert_eq!(
                humanize("<div class=\"box\" hidden><p>hi {{name}}</p></div>"),
                dom(&[
                    ["Element", "div", "0"],
                    ["Attribute", "class=box", "1"],
                    ["Attribute", "hidden=", "1"],
                    ["Element", "p", "1"],
                    ["Text", "hi ", "2"],
                    ["Interpolation", "name", "2"],
                ])
            );
        }

        #[test]
        fn should_mark_void_and_self_closing_elements() {
            assert_eq!(
                humanize("<p>a<br>b<x-icon/></p>"),
                dom(&[
                    ["Element", "p", "0"],
                    ["Text", "a", "1"],
                    ["Element", "br#selfClosing", "1"],
                    ["Text", "b", "1"],
                    ["Element", "x-icon#selfClosing", "1"],
                ])
            );
        }

        #[test]
        fn should_keep_comments_and_doctype() {
            assert_eq!(
                humanize("<!doctype html><!--c--><p></p>"),
                dom(&[
                    ["DocType", "doctype html", "0"],
                    ["Comment", "c", "0"],
                    ["Element", "p", "0"],
                ])
            );
        }

        #[test]
        fn should_span_from_open_to_close_tag() {
            let source = "x<b>bold</b>y";
            let nodes = parse(source, &ParseOptions::default()).unwrap();
            assert_eq!(nodes[1].source_span().text(source), "<b>bold</b>");
        }
    }

    mod sections {
        use super::*;

        #[test]
        fn should_nest_sections() {
            assert_eq!(
                humanize("{{#each items}}<li>{{> item}}</li>{{/each}}{{^items}}none{{/items}}"),
                dom(&[
                    ["Section", "each items", "0"],
                    ["Element", "li", "1"],
                    ["Partial", "item", "2"],
                    ["InvertedSection", "items", "0"],
                    ["Text", "none", "1"],
                ])
            );
        }

        #[test]
        fn should_close_the_innermost_section_with_an_empty_closer() {
            assert_eq!(
                humanize("{{#a}}{{#b}}{{{raw}}}{{/}}{{/}}"),
                dom(&[
                    ["Section", "a", "0"],
                    ["Section", "b", "1"],
                    ["TripleInterpolation", "raw", "2"],
                ])
            );
        }

        #[test]
        fn should_drop_mustache_comments() {
            assert_eq!(
                humanize("<p>{{! hidden }}</p>"),
                dom(&[["Element", "p", "0"]])
            );
        }

        #[test]
        fn should_report_mismatched_closers() {
            let error = parse("{{#a}}{{/b}}", &ParseOptions::default()).unwrap_err();
            assert_eq!(humanize_error(&error), vec!["MismatchedSectionClose", "0:6"]);
            assert_eq!(
                error.to_string(),
                "Mismatched section close {{/b}} at 1:7: expected {{/a}}"
            );
        }

        #[test]
        fn should_report_unclosed_sections() {
            let error = parse("<p>{{#a}}</p>", &ParseOptions::default()).unwrap_err();
            assert_eq!(humanize_error(&error), vec!["UnclosedSection", "0:3"]);

            let error = parse("{{^a}}", &ParseOptions::default()).unwrap_err();
            assert!(matches!(error, ParseError::UnclosedSection { .. }));
        }

        #[test]
        fn should_surface_tokenizer_errors() {
            let error = parse("<p>", &ParseOptions::default()).unwrap_err();
            assert!(matches!(error, ParseError::UnterminatedTag { .. }));
        }
    }

    mod serializer {
        use super::*;

        #[test]
        fn should_round_trip_normalized_templates() {
            let source = "<ul class=\"list\">{{#items}}<li>{{name}} {{{html}}}</li>{{/items}}</ul><br />";
            let nodes = parse(source, &ParseOptions::default()).unwrap();
            assert_eq!(serialize_nodes(&nodes), source);
        }
    }
}
