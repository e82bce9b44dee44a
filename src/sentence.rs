//! The Sentence type: one whole sentence with its position and word count.

use crate::words::count_words;

/// A whole sentence cut from a larger text.
///
/// Sentences are the unit of selection: they are taken or dropped whole,
/// never split. The word count is computed once at construction so that
/// selection does not have to recount.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the text the sentence was cut
/// from, matching Rust's string slicing:
///
/// ```rust
/// use lathe::Sentence;
///
/// let text = "Тихо. Море спит.";
/// let sentence = Sentence::new("Море спит.", 10, 28, 1);
///
/// assert_eq!(&text[sentence.span()], "Море спит.");
/// assert_eq!(sentence.words, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The sentence text, trimmed.
    pub text: String,
    /// Byte offset where this sentence starts in the source text.
    pub start: usize,
    /// Byte offset where this sentence ends (exclusive) in the source text.
    pub end: usize,
    /// Zero-based index of this sentence in the sequence.
    pub index: usize,
    /// Number of words in the sentence.
    pub words: usize,
}

impl Sentence {
    /// Create a new sentence, counting its words.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        let text = text.into();
        let words = count_words(text.as_str());
        Self {
            text,
            start,
            end,
            index,
            words,
        }
    }

    /// The length of this sentence in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this sentence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this sentence in the source text.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sentence {{ index: {}, span: {}..{}, words: {} }}",
            self.index, self.start, self.end, self.words
        )
    }
}

/// Join sentences with single spaces.
pub fn join_sentences(sentences: &[Sentence]) -> String {
    let mut out = String::new();
    for sentence in sentences {
        let text = sentence.text.trim();
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(text);
    }
    out
}
