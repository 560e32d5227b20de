//! Chapter-marker detection and splitting.
//!
//! Two marker patterns are recognized:
//! - CJK headings of the form 第X章: literal `第`, one or more word
//!   characters, terminated at the first following `章`.
//! - Latin headings of the form `Chương N`: the literal word, optional
//!   whitespace, one or more decimal digits.
//!
//! Detection is an explicit two-pattern scan; the match lists are merged
//! by start offset (stable, CJK hits first on ties).

use crate::types::ZeroMarkerPolicy;
use textrelay_common::{Result, TextRelayError};

const CJK_LEAD: char = '第';
const CJK_TRAIL: char = '章';
const LATIN_WORD: &str = "Chương";

/// One marker occurrence in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Byte offset of the marker's first character
    pub start: usize,

    /// Byte offset one past the marker's last character
    pub end: usize,
}

/// Word character in the marker sense: alphanumeric or underscore
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scan for CJK chapter headings (第X章).
///
/// Lazy match: the heading ends at the first `章` after at least one word
/// character. Matches do not overlap; scanning resumes past each match.
fn scan_cjk(text: &str) -> Vec<MarkerMatch> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut matches = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].1 != CJK_LEAD {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        let mut word_seen = false;
        let mut end = None;

        while j < chars.len() {
            let c = chars[j].1;
            if c == CJK_TRAIL && word_seen {
                end = Some(chars[j].0 + c.len_utf8());
                break;
            }
            if !is_word_char(c) {
                break;
            }
            word_seen = true;
            j += 1;
        }

        match end {
            Some(end) => {
                matches.push(MarkerMatch {
                    start: chars[i].0,
                    end,
                });
                i = j + 1;
            }
            None => i += 1,
        }
    }

    matches
}

/// Scan for Latin chapter headings (Chương N).
///
/// Optional whitespace between the word and the digits; the digit run is
/// maximal.
fn scan_latin(text: &str) -> Vec<MarkerMatch> {
    let mut matches = Vec::new();

    for (start, _) in text.match_indices(LATIN_WORD) {
        let rest = &text[start + LATIN_WORD.len()..];

        let mut offset = 0;
        for c in rest.chars() {
            if c.is_whitespace() {
                offset += c.len_utf8();
            } else {
                break;
            }
        }

        let digits: usize = rest[offset..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .count();
        if digits == 0 {
            continue;
        }

        matches.push(MarkerMatch {
            start,
            end: start + LATIN_WORD.len() + offset + digits,
        });
    }

    matches
}

/// Locate every chapter marker, both patterns merged and sorted by start
/// offset. The sort is stable, so CJK matches precede Latin matches at
/// equal offsets.
pub fn find_markers(text: &str) -> Vec<MarkerMatch> {
    let mut markers = scan_cjk(text);
    markers.extend(scan_latin(text));
    markers.sort_by_key(|m| m.start);
    markers
}

/// Split the document at chapter markers.
///
/// Each segment runs from one marker's start to the next marker's start,
/// the last to end-of-document; segments are trimmed. Zero markers either
/// fall back to the whole trimmed document or fail, per `policy`.
pub fn split_by_marker(text: &str, policy: ZeroMarkerPolicy) -> Result<Vec<String>> {
    let markers = find_markers(text);

    if markers.is_empty() {
        return match policy {
            ZeroMarkerPolicy::WholeDocument => Ok(vec![text.trim().to_string()]),
            ZeroMarkerPolicy::Error => Err(TextRelayError::NoMarkersFound),
        };
    }

    let mut segments = Vec::with_capacity(markers.len());
    for (i, marker) in markers.iter().enumerate() {
        let end = markers
            .get(i + 1)
            .map(|next| next.start)
            .unwrap_or(text.len());
        segments.push(text[marker.start..end].trim().to_string());
    }

    Ok(segments)
}
