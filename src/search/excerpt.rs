//! Context excerpts around the first body match.

use super::tokenize::FoldedText;

/// Characters kept before the match.
pub const EXCERPT_BEFORE: usize = 50;
/// Characters kept from the match onwards.
pub const EXCERPT_AFTER: usize = 100;

const ELLIPSIS: &str = "...";

/// Build an excerpt of `body` around the first occurrence of the first term,
/// in query order, that occurs in it.
///
/// The window spans `EXCERPT_BEFORE` characters before the match to
/// `EXCERPT_AFTER` characters after its start, clamped to the body, and is
/// taken from the original text. An ellipsis marks each side that was cut.
pub fn excerpt(body: &str, folded: &FoldedText, terms: &[String]) -> Option<String> {
    let pos = terms.iter().find_map(|term| folded.find_original(term))?;

    let len = body.chars().count();
    let start = pos.saturating_sub(EXCERPT_BEFORE);
    let end = (pos + EXCERPT_AFTER).min(len);

    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.extend(body.chars().skip(start).take(end - start));
    if end < len {
        out.push_str(ELLIPSIS);
    }
    Some(out)
}
