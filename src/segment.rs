//! Sentence segmentation.
//!
//! Splits text into sentences on terminal punctuation followed by whitespace.
//!
//! ## The Rule
//!
//! A boundary sits after a terminal mark (`.`, `!`, `?`) that is immediately
//! followed by whitespace. The mark stays with the sentence before it and the
//! whitespace run is dropped:
//!
//! ```text
//! "Wow!! Such calm. Why?"
//!       ^          ^
//!  ["Wow!!", "Such calm.", "Why?"]
//! ```
//!
//! Runs of marks (`?!`, `...`) are not special: only the mark directly before
//! the whitespace matters. A mark with no whitespace after it (`3.14`,
//! `D.C.` at the very end, `"Да."` before a quote) is not a boundary.
//!
//! ## Not UAX #29
//!
//! Unicode sentence segmentation knows more about abbreviations, but its
//! boundaries differ from the rule above (line breaks, closing quotes).
//! Every emitted sentence must be findable verbatim in its source, so the
//! plain rule is used.
//!
//! Text without any boundary is a single sentence.

use crate::sentence::Sentence;

/// Whether `c` ends a sentence when followed by whitespace.
#[must_use]
pub fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Byte spans of the trimmed, non-empty sentences in `text`.
fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut raw = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let Some(&(_, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }

        raw.push((start, i + c.len_utf8()));
        while chars.peek().is_some_and(|&(_, ws)| ws.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |&(j, _)| j);
    }
    raw.push((start, text.len()));

    raw.into_iter()
        .filter_map(|(start, end)| {
            let fragment = &text[start..end];
            let leading_ws = fragment.len() - fragment.trim_start().len();
            let trailing_ws = fragment.len() - fragment.trim_end().len();
            let (start, end) = (start + leading_ws, end - trailing_ws);
            (start < end).then_some((start, end))
        })
        .collect()
}

/// Split text into sentence slices.
///
/// Empty or whitespace-only input yields no sentences. Anything else yields
/// at least one.
///
/// ```rust
/// use lathe::split_sentences;
///
/// let sentences = split_sentences("Закат над морем. Волны шепчут! Слышишь?");
/// assert_eq!(sentences, ["Закат над морем.", "Волны шепчут!", "Слышишь?"]);
///
/// // No terminal marks: the whole text is one sentence
/// assert_eq!(split_sentences("закат над морем"), ["закат над морем"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return vec![];
    }

    let sentences: Vec<&str> = sentence_spans(text)
        .into_iter()
        .map(|(start, end)| &text[start..end])
        .collect();

    if sentences.is_empty() {
        return vec![trimmed];
    }
    sentences
}

/// Split text into [`Sentence`]s with offsets and word counts.
///
/// Offsets are relative to `text`.
///
/// ```rust
/// use lathe::segment;
///
/// let text = "Тихо. Море спит.";
/// let sentences = segment(text);
///
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(&text[sentences[1].span()], "Море спит.");
/// assert_eq!(sentences[1].words, 2);
/// ```
pub fn segment(text: &str) -> Vec<Sentence> {
    let sentences: Vec<Sentence> = sentence_spans(text)
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| Sentence::new(&text[start..end], start, end, index))
        .collect();

    if sentences.is_empty() && !text.trim().is_empty() {
        let leading_ws = text.len() - text.trim_start().len();
        let trimmed = text.trim();
        return vec![Sentence::new(
            trimmed,
            leading_ws,
            leading_ws + trimmed.len(),
            0,
        )];
    }
    sentences
}
