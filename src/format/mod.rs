//! Output rendering for search results.
//!
//! Two interchangeable formats are produced from the same ranked hits: a JSON
//! payload for API clients and an HTML fragment for htmx-driven pages.

mod escape;
pub(crate) mod html;
pub(crate) mod json;

pub use escape::escape_html;
pub use html::{HtmlOptions, render_html, render_html_empty};
pub use json::{render_json, render_json_empty, render_json_error};

/// Header htmx sets on every request it issues.
pub const HX_REQUEST_HEADER: &str = "HX-Request";

/// Maximum number of matched headings shown per result.
pub const MAX_HEADINGS: usize = 3;

/// Response body format negotiated from request headers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Html,
}

impl OutputFormat {
    /// HTML when the request is an htmx request or accepts `text/html`,
    /// JSON otherwise.
    pub fn negotiate(hx_request: Option<&str>, accept: Option<&str>) -> Self {
        let is_htmx = hx_request == Some("true");
        let wants_html = accept.is_some_and(|a| a.contains("text/html"));
        if is_htmx || wants_html {
            Self::Html
        } else {
            Self::Json
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Html => "text/html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, OutputFormat::Json)]
    #[case(Some("true"), None, OutputFormat::Html)]
    #[case(Some("false"), None, OutputFormat::Json)]
    #[case(Some("TRUE"), None, OutputFormat::Json)]
    #[case(None, Some("text/html,application/xhtml+xml"), OutputFormat::Html)]
    #[case(None, Some("application/json"), OutputFormat::Json)]
    #[case(None, Some("*/*"), OutputFormat::Json)]
    #[case(Some("false"), Some("text/html"), OutputFormat::Html)]
    fn test_negotiate(
        #[case] hx_request: Option<&str>,
        #[case] accept: Option<&str>,
        #[case] expected: OutputFormat,
    ) {
        check!(OutputFormat::negotiate(hx_request, accept) == expected);
    }
}
