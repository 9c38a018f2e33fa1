//! Tokenizer Tests
//!
//! Token streams for whole templates, checked through the humanize helpers

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tokenizer_tests {
    use super::utils::*;
    use stache_compiler::ParseOptions;

    fn rows(rows: &[[&str; 2]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|part| part.to_string()).collect())
            .collect()
    }

    fn parts(input: &str) -> Vec<Vec<String>> {
        tokenize_and_humanize_parts(input, &ParseOptions::default())
    }

    mod line_column_numbers {
        use super::*;

        #[test]
        fn should_work_without_newlines() {
            assert_eq!(
                tokenize_and_humanize_line_column("<t>a</t>", &ParseOptions::default()),
                rows(&[["TAG_OPEN", "0:0"], ["TEXT", "0:3"], ["TAG_CLOSE", "0:4"]])
            );
        }

        #[test]
        fn should_work_with_one_newline() {
            assert_eq!(
                tokenize_and_humanize_line_column("<t>\na</t>", &ParseOptions::default()),
                rows(&[["TAG_OPEN", "0:0"], ["TEXT", "0:3"], ["TAG_CLOSE", "1:1"]])
            );
        }

        #[test]
        fn should_work_with_newlines_inside_tags() {
            assert_eq!(
                tokenize_and_humanize_line_column(
                    "<t\n  a=\"1\"\n>{{x}}</t>",
                    &ParseOptions::default()
                ),
                rows(&[
                    ["TAG_OPEN", "0:0"],
                    ["INTERPOLATION", "2:1"],
                    ["TAG_CLOSE", "2:6"],
                ])
            );
        }

        #[test]
        fn should_count_columns_in_characters() {
            assert_eq!(
                tokenize_and_humanize_line_column("é{{x}}", &ParseOptions::default()),
                rows(&[["TEXT", "0:0"], ["INTERPOLATION", "0:1"]])
            );
        }
    }

    mod text {
        use super::*;

        #[test]
        fn should_read_plain_text_to_the_end() {
            assert_eq!(parts("plain text"), rows(&[["TEXT", "plain text"]]));
        }

        #[test]
        fn should_stop_text_at_a_mustache() {
            assert_eq!(
                parts("hello  world{{name}}"),
                rows(&[["TEXT", "hello world"], ["INTERPOLATION", "name"]])
            );
        }

        #[test]
        fn should_decode_entities() {
            assert_eq!(
                parts("&amp; &lt; &gt; &quot; &#65; &#x41; &notareal;"),
                rows(&[["TEXT", "& < > \" A A &notareal;"]])
            );
        }

        #[test]
        fn should_collapse_whitespace_runs() {
            assert_eq!(
                parts("<p>a \n\t b</p>"),
                rows(&[["TAG_OPEN", "p"], ["TEXT", "a b"], ["TAG_CLOSE", "p"]])
            );
        }

        #[test]
        fn should_preserve_whitespace_when_asked() {
            let options = ParseOptions::default().with_preserve_whitespace(true);
            assert_eq!(
                tokenize_and_humanize_parts("a \n\t b", &options),
                rows(&[["TEXT", "a \n\t b"]])
            );
        }

        #[test]
        fn should_report_source_spans_over_raw_text() {
            assert_eq!(
                tokenize_and_humanize_source_spans("a  &amp;{{b}}", &ParseOptions::default()),
                rows(&[["TEXT", "a  &amp;"], ["INTERPOLATION", "{{b}}"]])
            );
        }
    }

    mod mustaches {
        use super::*;

        #[test]
        fn should_classify_sigils() {
            assert_eq!(
                parts("{{#list}}{{^empty}}{{> row}}{{! c }}{{& raw}}{{/list}}"),
                rows(&[
                    ["SECTION_OPEN", "list"],
                    ["INVERTED_SECTION_OPEN", "empty"],
                    ["PARTIAL", "row"],
                    ["MUSTACHE_COMMENT", "c"],
                    ["TRIPLE_INTERPOLATION", "raw"],
                    ["SECTION_CLOSE", "list"],
                ])
            );
        }

        #[test]
        fn should_prefer_the_triple_form() {
            assert_eq!(
                parts("{{{html}}} {{text}}"),
                rows(&[
                    ["TRIPLE_INTERPOLATION", "html"],
                    ["TEXT", " "],
                    ["INTERPOLATION", "text"],
                ])
            );
        }

        #[test]
        fn should_keep_mustaches_inside_attribute_values() {
            assert_eq!(
                tokenize_and_humanize_source_spans(
                    "<a href=\"{{url}}\">{{label}}</a>",
                    &ParseOptions::default()
                ),
                rows(&[
                    ["TAG_OPEN", "<a href=\"{{url}}\">"],
                    ["INTERPOLATION", "{{label}}"],
                    ["TAG_CLOSE", "</a>"],
                ])
            );
        }

        #[test]
        fn should_use_custom_delimiters() {
            let options = ParseOptions::default()
                .with_delimiters("[[", "]]")
                .with_triple_delimiters("[[[", "]]]");
            assert_eq!(
                tokenize_and_humanize_parts("{{x}} [[y]] [[[z]]]", &options),
                rows(&[
                    ["TEXT", "{{x}} "],
                    ["INTERPOLATION", "y"],
                    ["TEXT", " "],
                    ["TRIPLE_INTERPOLATION", "z"],
                ])
            );
        }
    }

    mod tags {
        use super::*;

        #[test]
        fn should_tokenize_nested_elements() {
            assert_eq!(
                parts("<ul><li>a</li></ul>"),
                rows(&[
                    ["TAG_OPEN", "ul"],
                    ["TAG_OPEN", "li"],
                    ["TEXT", "a"],
                    ["TAG_CLOSE", "li"],
                    ["TAG_CLOSE", "ul"],
                ])
            );
        }

        #[test]
        fn should_not_expect_close_tags_for_void_or_self_closing_elements() {
            assert_eq!(
                parts("<p>a<br>b<img src=x.png><widget/></p>"),
                rows(&[
                    ["TAG_OPEN", "p"],
                    ["TEXT", "a"],
                    ["TAG_OPEN", "br"],
                    ["TEXT", "b"],
                    ["TAG_OPEN", "img"],
                    ["TAG_OPEN", "widget"],
                    ["TAG_CLOSE", "p"],
                ])
            );
        }

        #[test]
        fn should_tokenize_comments_and_doctype() {
            assert_eq!(
                parts("<!DOCTYPE html><!-- {{not}} -->x"),
                rows(&[
                    ["DOC_TYPE", "DOCTYPE html"],
                    ["COMMENT", " {{not}} "],
                    ["TEXT", "x"],
                ])
            );
        }

        #[test]
        fn should_strip_comments_when_asked() {
            let options = ParseOptions::default().with_strip_comments(true);
            assert_eq!(
                tokenize_and_humanize_parts("<p><!-- gone --></p>", &options),
                rows(&[["TAG_OPEN", "p"], ["TAG_CLOSE", "p"]])
            );
        }
    }

    mod raw_text {
        use super::*;

        #[test]
        fn should_read_script_contents_as_text() {
            assert_eq!(
                parts("<script>if (a < b) { x = \"{{y}}\"; }</script>"),
                rows(&[
                    ["TAG_OPEN", "script"],
                    ["TEXT", "if (a < b) { x = \"{{y}}\"; }"],
                    ["TAG_CLOSE", "script"],
                ])
            );
        }

        #[test]
        fn should_not_parse_tags_inside_style() {
            assert_eq!(
                parts("<style>a > b { }</style><p></p>"),
                rows(&[
                    ["TAG_OPEN", "style"],
                    ["TEXT", "a > b { }"],
                    ["TAG_CLOSE", "style"],
                    ["TAG_OPEN", "p"],
                    ["TAG_CLOSE", "p"],
                ])
            );
        }

        #[test]
        fn should_interpolate_in_style_when_enabled() {
            let options = ParseOptions::default().with_interpolation("style", true);
            assert_eq!(
                tokenize_and_humanize_parts("<style>p { color: {{c}} }</style>", &options),
                rows(&[
                    ["TAG_OPEN", "style"],
                    ["TEXT", "p { color: "],
                    ["INTERPOLATION", "c"],
                    ["TEXT", " }"],
                    ["TAG_CLOSE", "style"],
                ])
            );
        }

        #[test]
        fn should_treat_non_interpolated_tags_as_raw() {
            let options = ParseOptions::default().with_interpolation("pre", false);
            assert_eq!(
                tokenize_and_humanize_parts("<pre><b>{{x}}</b></pre>", &options),
                rows(&[
                    ["TAG_OPEN", "pre"],
                    ["TEXT", "<b>{{x}}</b>"],
                    ["TAG_CLOSE", "pre"],
                ])
            );
        }
    }

    mod errors {
        use super::*;

        fn error(input: &str) -> Vec<String> {
            tokenize_and_humanize_error(input, &ParseOptions::default())
        }

        #[test]
        fn should_report_unclosed_elements() {
            assert_eq!(error("<div>\n<p>x</p>"), vec!["UnterminatedTag", "0:0"]);
        }

        #[test]
        fn should_report_open_tags_without_end() {
            assert_eq!(error("a<b c=\"d\""), vec!["UnterminatedTag", "0:1"]);
        }

        #[test]
        fn should_report_mismatched_close_tags() {
            assert_eq!(error("<div></span>"), vec!["MismatchedCloseTag", "0:5"]);
            assert_eq!(error("</p>"), vec!["MismatchedCloseTag", "0:0"]);
        }

        #[test]
        fn should_report_near_miss_raw_closers() {
            assert_eq!(
                error("<script>x</scripts>"),
                vec!["MismatchedCloseTag", "0:9"]
            );
        }

        #[test]
        fn should_report_unterminated_mustaches_and_comments() {
            assert_eq!(error("a {{name"), vec!["UnterminatedMustache", "0:2"]);
            assert_eq!(error("<!-- x"), vec!["UnterminatedComment", "0:0"]);
        }

        #[test]
        fn should_report_a_stray_angle_bracket() {
            assert_eq!(error("1 < 2"), vec!["UnparseableResidue", "0:2"]);
        }

        #[test]
        fn should_reject_invalid_configuration() {
            let options = ParseOptions::default().with_delimiters("<%", "%>");
            assert_eq!(
                tokenize_and_humanize_error("x", &options),
                vec!["InvalidConfiguration", ""]
            );
        }

        #[test]
        fn should_show_context_in_messages() {
            let source = "<p>\n</div>";
            let error = stache_compiler::tokenize(source, &ParseOptions::default()).unwrap_err();
            assert_eq!(
                error.contextual_message(source),
                "Mismatched close tag </div> at 2:1: expected </p> (\"<p>\n[ERROR ->]</div>\")"
            );
        }

        #[test]
        fn should_show_context_against_a_different_source() {
            let error = stache_compiler::tokenize("é</p>", &ParseOptions::default()).unwrap_err();
            assert_eq!(error.offset(), Some(2));
            let message = error.contextual_message("\u{1F600}");
            assert!(message.ends_with("(\"[ERROR ->]\u{1F600}\")"));
        }
    }
}
