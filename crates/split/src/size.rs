//! Budget-bound splitting.
//!
//! Character mode accumulates whole lines under a character budget;
//! word mode accumulates whole sentences under a word budget. Oversized
//! units (a single line or sentence exceeding the budget on its own) are
//! sliced and emitted standalone so no chunk silently exceeds the budget.

/// Split the document under a character budget, line by line.
///
/// Lines accumulate greedily into the current chunk (joined with `\n`);
/// the chunk is flushed before a line that would push it over budget.
/// Length accounting adds 1 per line for the implicit newline. A line
/// longer than the budget on its own is emitted standalone in
/// budget-sized character slices, raw slicing with no word awareness.
pub fn split_by_chars(text: &str, budget: usize) -> Vec<String> {
    let budget = budget.max(1);
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for line in text.split('\n') {
        let line_len = line.chars().count();

        if line_len > budget {
            // Oversized line: flush the pending chunk, then slice
            if !current.is_empty() {
                chunks.push(current.join("\n"));
                current.clear();
                current_len = 0;
            }
            let chars: Vec<char> = line.chars().collect();
            for slice in chars.chunks(budget) {
                chunks.push(slice.iter().collect());
            }
            continue;
        }

        if current_len + line_len > budget && !current.is_empty() {
            chunks.push(current.join("\n"));
            current.clear();
            current_len = 0;
        }

        current.push(line);
        current_len += line_len + 1; // +1 for the implicit newline
    }

    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks
}

/// Split the document under a word budget without breaking sentences.
///
/// Whole sentences accumulate into the current chunk (joined with a
/// single space) while the running word count stays within budget. A
/// sentence whose own word count exceeds the budget is sliced into
/// budget-sized word groups; each group becomes its own chunk, with any
/// pending chunk flushed first, never merged with surrounding text.
pub fn split_by_words(text: &str, budget: usize) -> Vec<String> {
    let budget = budget.max(1);
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_words = 0usize;

    for sentence in split_sentences(text) {
        let words: Vec<&str> = sentence.split_whitespace().collect();

        if words.len() > budget {
            // Oversized sentence: flush, then emit word groups standalone
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current).trim().to_string());
                current_words = 0;
            }
            for group in words.chunks(budget) {
                chunks.push(group.join(" "));
            }
        } else if current_words + words.len() <= budget {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(sentence);
            current_words += words.len();
        } else {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current).trim().to_string());
            }
            current.push_str(sentence);
            current_words = words.len();
        }
    }

    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by one-or-more whitespace;
/// the punctuation stays with the preceding sentence and the whitespace
/// run is consumed as the delimiter.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(boundary, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }

        sentences.push(&text[start..boundary]);

        // Consume the whitespace run
        start = boundary;
        while let Some(&(i, w)) = chars.peek() {
            if !w.is_whitespace() {
                break;
            }
            start = i + w.len_utf8();
            chars.next();
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_boundaries() {
        let sentences = split_sentences("First one. Second one! Third one? Done.");
        assert_eq!(
            sentences,
            vec!["First one.", "Second one!", "Third one?", "Done."]
        );
    }

    #[test]
    fn test_punctuation_without_trailing_whitespace_does_not_split() {
        assert_eq!(split_sentences("version 2.5 is out"), vec!["version 2.5 is out"]);
    }

    #[test]
    fn test_whitespace_run_is_consumed() {
        assert_eq!(split_sentences("A.   B."), vec!["A.", "B."]);
        assert_eq!(split_sentences("A.\nB."), vec!["A.", "B."]);
    }

    #[test]
    fn test_char_budget_accumulates_lines() {
        let doc = "aaaa\nbbbb\ncccc";
        // 4+1 per line; two lines fit in 10, the third does not
        let chunks = split_by_chars(doc, 10);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_char_budget_is_lossless_over_lines() {
        let doc = "line one\n\nline three\nline four\nline five";
        let chunks = split_by_chars(doc, 12);
        let rejoined = chunks.join("\n");
        assert_eq!(rejoined, doc);
    }

    #[test]
    fn test_char_budget_never_exceeded() {
        let doc = "short\nmedium line\na much longer line than the budget allows\nend";
        for chunk in split_by_chars(doc, 10) {
            assert!(chunk.chars().count() <= 10, "over budget: {:?}", chunk);
        }
    }

    #[test]
    fn test_oversized_line_sliced_standalone() {
        let doc = "ab\nabcdefghij\ncd";
        let chunks = split_by_chars(doc, 4);
        assert_eq!(chunks, vec!["ab", "abcd", "efgh", "ij", "cd"]);
    }

    #[test]
    fn test_char_budget_counts_chars_not_bytes() {
        // Four CJK characters, twelve bytes
        let chunks = split_by_chars("一二三四", 4);
        assert_eq!(chunks, vec!["一二三四"]);
    }

    #[test]
    fn test_word_budget_one_sentence_per_chunk() {
        let chunks = split_by_words("A. B. C.", 1);
        assert_eq!(chunks, vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_word_budget_accumulates_sentences() {
        let chunks = split_by_words("One two three. Four five. Six seven eight nine.", 5);
        assert_eq!(chunks, vec!["One two three. Four five.", "Six seven eight nine."]);
    }

    #[test]
    fn test_oversized_sentence_sliced_into_word_groups() {
        let words: Vec<String> = (1..=25).map(|n| n.to_string()).collect();
        let sentence = format!("{}.", words.join(" "));
        let chunks = split_by_words(&sentence, 10);

        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert!(chunk.split_whitespace().count() <= 10);
        }

        // Word sequence preserved across slices
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.split_whitespace())
            .collect();
        let original: Vec<&str> = sentence.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_oversized_sentence_flushes_pending_chunk_first() {
        let chunks = split_by_words("Short one. a b c d e f.", 4);
        // The six-word sentence exceeds the budget: the pending chunk is
        // flushed and the slices start fresh
        assert_eq!(chunks, vec!["Short one.", "a b c d", "e f."]);
    }

    #[test]
    fn test_word_budget_sentence_starting_new_chunk() {
        let chunks = split_by_words("One two three. Four five six.", 3);
        assert_eq!(chunks, vec!["One two three.", "Four five six."]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_by_words("", 10).is_empty());
        let chunks = split_by_chars("", 10);
        // A single empty line accumulates into one empty chunk
        assert_eq!(chunks, vec![""]);
    }

    #[test]
    fn test_zero_budget_is_clamped() {
        // Degenerate budget never panics or loops
        assert_eq!(split_by_chars("ab", 0), vec!["a", "b"]);
        assert!(!split_by_words("One two.", 0).is_empty());
    }
}
