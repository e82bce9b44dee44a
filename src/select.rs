//! Budgeted sentence selection.
//!
//! Takes the longest prefix of sentences whose total word count stays within
//! a budget. Sentences are never split, so the one exception is a first
//! sentence that is already over budget on its own: it is taken whole.
//!
//! ```text
//! max = 50
//! words:   [10, 10, 10, 10, 10, 30]
//! running:  10  20  30  40  50  80 > 50, stop
//! selected: first five (exactly 50)
//!
//! words:   [64, 5]
//! selected: [64]   (first sentence alone, over budget but whole)
//! ```

use tracing::trace;

use crate::sentence::Sentence;

/// Select the longest prefix of `sentences` that fits in `max` words.
///
/// If nothing has been counted yet and the next sentence alone exceeds
/// `max`, the selection is exactly that sentence. The result therefore
/// holds at most `max` words, or is a single sentence longer than `max`.
///
/// ```rust
/// use lathe::{segment, select_within};
///
/// let sentences = segment("Раз два. Три четыре пять. Шесть.");
/// let selected = select_within(&sentences, 5);
///
/// assert_eq!(selected.len(), 2);
/// assert_eq!(selected[1].text, "Три четыре пять.");
/// ```
pub fn select_within(sentences: &[Sentence], max: usize) -> &[Sentence] {
    let mut total = 0usize;

    for (i, sentence) in sentences.iter().enumerate() {
        if total == 0 && sentence.words > max {
            trace!(
                index = sentence.index,
                words = sentence.words,
                max,
                "over-long sentence selected alone"
            );
            return std::slice::from_ref(sentence);
        }
        if total + sentence.words > max {
            trace!(selected = i, total, max, "word budget reached");
            return &sentences[..i];
        }
        total += sentence.words;
    }

    sentences
}
