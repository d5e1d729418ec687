//! HTML fragment rendering for htmx clients.
//!
//! The fragment is a listbox of results. Every link carries a plain `href`
//! for full navigation and `hx-get`/`hx-target`/`hx-push-url` so htmx can swap
//! only the content region instead. All interpolated text goes through
//! [`escape_html`].

use super::{MAX_HEADINGS, escape_html};
use crate::search::SearchHit;
use std::fmt::{self, Write as _};

/// Default element swapped by result links.
pub const DEFAULT_HX_TARGET: &str = "#content";

/// Knobs for the HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// CSS selector of the region result links swap into
    pub hx_target: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            hx_target: DEFAULT_HX_TARGET.to_string(),
        }
    }
}

/// Placeholder shown before anything has been typed.
pub fn render_html_empty() -> String {
    String::from(r#"<div class="search-no-results">Enter a search term</div>"#)
}

/// Render ranked hits, or a "no results" message naming `query`.
pub fn render_html(hits: &[SearchHit<'_>], query: &str, options: &HtmlOptions) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = if hits.is_empty() {
        write_no_results(&mut output, query)
    } else {
        write_results(&mut output, hits, options)
    };
    output
}

fn write_no_results(output: &mut String, query: &str) -> fmt::Result {
    write!(
        output,
        r#"<div class="search-no-results">No results found for "{}"</div>"#,
        escape_html(query)
    )
}

fn write_results(
    output: &mut String,
    hits: &[SearchHit<'_>],
    options: &HtmlOptions,
) -> fmt::Result {
    let target = escape_html(&options.hx_target);

    writeln!(output, r#"<ul class="search-results-list" role="listbox">"#)?;
    for hit in hits {
        let document = hit.document;
        let path = escape_html(&document.path);

        writeln!(output, r#"  <li class="search-result-item" role="option">"#)?;
        write_link(output, "    ", &path, &target, "search-result-link")?;
        writeln!(
            output,
            r#"      <span class="search-result-title">{}</span>"#,
            escape_html(&document.title)
        )?;
        writeln!(output, "    </a>")?;

        if !hit.matches.headings.is_empty() {
            writeln!(output, r#"    <ul class="search-result-headings">"#)?;
            for heading in hit.matches.headings.iter().take(MAX_HEADINGS) {
                let anchor = document.anchor_for(heading).unwrap_or_default();
                let href = format!("{}{}", path, escape_html(anchor));

                writeln!(output, "      <li>")?;
                write_link(output, "        ", &href, &target, "search-result-heading")?;
                writeln!(output, "          {}", escape_html(heading))?;
                writeln!(output, "        </a>")?;
                writeln!(output, "      </li>")?;
            }
            writeln!(output, "    </ul>")?;
        }

        if let Some(excerpt) = &hit.excerpt {
            writeln!(
                output,
                r#"    <p class="search-result-excerpt">{}</p>"#,
                escape_html(excerpt)
            )?;
        }
        writeln!(output, "  </li>")?;
    }
    write!(output, "</ul>")
}

/// Opening `<a>` tag. `href` and `target` must already be escaped.
fn write_link(
    output: &mut String,
    indent: &str,
    href: &str,
    target: &str,
    class: &str,
) -> fmt::Result {
    writeln!(
        output,
        r#"{indent}<a href="{href}" hx-get="{href}" hx-target="{target}" hx-push-url="true" class="{class}">"#
    )
}
