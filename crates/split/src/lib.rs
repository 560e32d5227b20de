//! TextRelay Splitter
//!
//! Deterministic, lossless partitioning of a document into ordered segments,
//! either at chapter markers (第X章 / Chương N) or under a character/word
//! budget. Pure text processing, no I/O.

mod marker;
mod size;
mod types;

pub use marker::{find_markers, split_by_marker, MarkerMatch};
pub use size::{split_by_chars, split_by_words};
pub use types::{Language, SplitConfig, SplitMethod, Unit, ZeroMarkerPolicy};

use textrelay_common::Result;

/// Split a document according to the given configuration.
///
/// Returns the ordered segment sequence. Marker mode with zero markers
/// either falls back to the whole document or fails, per the configured
/// [`ZeroMarkerPolicy`].
pub fn split(text: &str, config: &SplitConfig) -> Result<Vec<String>> {
    let segments = match config.method {
        SplitMethod::Marker => split_by_marker(text, config.zero_marker)?,
        SplitMethod::Count => match config.language.unit() {
            Unit::Word => split_by_words(text, config.budget),
            Unit::Character => split_by_chars(text, config.budget),
        },
    };

    tracing::debug!(
        "Split document ({} chars) into {} segments via {:?}",
        text.chars().count(),
        segments.len(),
        config.method
    );

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_config() -> SplitConfig {
        SplitConfig {
            method: SplitMethod::Marker,
            language: Language::Chinese,
            budget: 1000,
            zero_marker: ZeroMarkerPolicy::WholeDocument,
        }
    }

    #[test]
    fn test_end_to_end_marker_split() {
        let doc = "第1章 hello\n第2章 world";
        let segments = split(doc, &marker_config()).unwrap();
        assert_eq!(segments, vec!["第1章 hello", "第2章 world"]);
    }

    #[test]
    fn test_split_is_idempotent() {
        let doc = "第一章 开始\n正文。\n第二章 结束\n更多正文。";
        let config = marker_config();
        let first = split(doc, &config).unwrap();
        let second = split(doc, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_language_selects_unit() {
        let config = SplitConfig {
            method: SplitMethod::Count,
            language: Language::English,
            budget: 3,
            zero_marker: ZeroMarkerPolicy::Error,
        };
        // Word budget: sentences stay whole
        let segments = split("One two. Three four.", &config).unwrap();
        assert_eq!(segments, vec!["One two.", "Three four."]);

        let config = SplitConfig {
            language: Language::Vietnamese,
            ..config
        };
        // Character budget: lines accumulate
        let segments = split("ab\ncd", &config).unwrap();
        assert_eq!(segments, vec!["ab", "cd"]);
    }
}
