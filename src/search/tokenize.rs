//! Query normalization and case folding.

/// Split a raw query into lowercased terms.
///
/// Terms are separated by runs of whitespace; empty tokens never appear.
/// Duplicates are kept in query order.
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(fold_case).collect()
}

/// Lowercase `text`.
///
/// Every search comparison goes through this so that query terms and document
/// text fold identically.
pub fn fold_case(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    fold_each(text, |_, c| folded.push(c));
    folded
}

/// Feed every lowercased char of `text` to `emit` together with the index of
/// the original char it came from.
///
/// Capital sigma becomes `ς` at the end of a word and `σ` elsewhere, the same
/// as `str::to_lowercase`.
fn fold_each(text: &str, mut emit: impl FnMut(usize, char)) {
    let mut chars = text.chars().enumerate().peekable();
    let mut after_letter = false;
    while let Some((index, c)) = chars.next() {
        if c == 'Σ' {
            let before_letter = chars.peek().is_some_and(|(_, next)| next.is_alphabetic());
            emit(index, if after_letter && !before_letter { 'ς' } else { 'σ' });
        } else {
            for lower in c.to_lowercase() {
                emit(index, lower);
            }
        }
        after_letter = c.is_alphabetic();
    }
}

/// Lowercased text that remembers where each of its characters came from.
///
/// Lowercasing can change the number of characters (`İ` folds to two), so a
/// position found in the folded text is not a position in the original. The
/// origin table maps back.
#[derive(Debug, Clone)]
pub struct FoldedText {
    folded: String,
    /// For each char of `folded`, the char index in the original text
    origins: Vec<usize>,
}

impl FoldedText {
    pub fn new(original: &str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origins = Vec::with_capacity(original.len());
        fold_each(original, |index, c| {
            folded.push(c);
            origins.push(index);
        });
        Self { folded, origins }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn contains(&self, term: &str) -> bool {
        self.folded.contains(term)
    }

    /// Char index in the original text of the first occurrence of `term`.
    pub fn find_original(&self, term: &str) -> Option<usize> {
        let byte_pos = self.folded.find(term)?;
        let folded_index = self.folded[..byte_pos].chars().count();
        self.origins.get(folded_index).copied()
    }
}
