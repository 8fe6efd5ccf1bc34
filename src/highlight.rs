//! Word-novelty highlighting for the comparison view.
//!
//! Classifies each token of the optimized text as novel (absent from the
//! original) or carried over. Whitespace runs are kept as their own segments
//! so that concatenating all segment texts reconstructs the optimized string
//! exactly.

/// One display segment of the optimized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub is_novel: bool,
}

/// Split the optimized text into word and whitespace segments and mark each
/// word segment novel when its normalized form does not occur in the original.
///
/// Normalization lowercases and strips trailing commas and periods. If either
/// input is empty the whole optimized text comes back as a single non-novel
/// segment.
pub fn highlight(original: &str, optimized: &str) -> Vec<HighlightSegment> {
    if original.is_empty() || optimized.is_empty() {
        return vec![HighlightSegment {
            text: optimized.to_string(),
            is_novel: false,
        }];
    }

    let known: std::collections::HashSet<String> = original
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();

    split_preserving_whitespace(optimized)
        .into_iter()
        .map(|token| {
            let is_whitespace = token.chars().all(char::is_whitespace);
            let is_novel = if is_whitespace {
                false
            } else {
                let normalized = token.trim_end_matches([',', '.']).to_lowercase();
                !normalized.is_empty() && !known.contains(&normalized)
            };
            HighlightSegment {
                text: token.to_string(),
                is_novel,
            }
        })
        .collect()
}

/// Split into alternating word and whitespace runs, losing nothing.
fn split_preserving_whitespace(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let in_whitespace = rest.starts_with(|c: char| c.is_whitespace());
        let end = rest
            .find(|c: char| c.is_whitespace() != in_whitespace)
            .unwrap_or(rest.len());
        segments.push(&rest[..end]);
        rest = &rest[end..];
    }
    segments
}
