/// Escape text for interpolation into HTML content or quoted attributes.
///
/// `&` is replaced first so the entities introduced for the other characters
/// are not escaped a second time.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("a & b", "a &amp; b")]
    #[case("<script>", "&lt;script&gt;")]
    #[case(r#"say "hi""#, "say &quot;hi&quot;")]
    #[case("it's", "it&#039;s")]
    #[case("&lt;", "&amp;lt;")]
    #[case(r#"<a href="x">&'</a>"#, "&lt;a href=&quot;x&quot;&gt;&amp;&#039;&lt;/a&gt;")]
    fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
        check!(escape_html(input) == expected);
    }

    #[test]
    fn escaped_output_has_no_raw_specials() {
        let out = escape_html(r#"<>&"' mixed <b>"#);
        check!(!out.contains('<'));
        check!(!out.contains('>'));
        check!(!out.contains('"'));
        check!(!out.contains('\''));
        // every remaining ampersand starts an entity
        for (i, _) in out.match_indices('&') {
            let rest = &out[i..];
            check!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#039;")
            );
        }
    }
}
