//! Filler padding.
//!
//! When the selected text is shorter than the window minimum, whole
//! pre-written sentences are appended from a catalog until it is long enough.
//!
//! ```text
//! min = 40, catalog = [F1 (7), F2 (6), F3 (7), F4 (6), F5 (10)]
//!
//! "закат над морем"          3 words
//! + F1                      10
//! + F2                      16
//! ...
//! + F5                      39
//! + F1 (wraps around)       46 >= 40, done
//! ```
//!
//! The catalog is cycled from its first entry on every call. Padding stops
//! after at most [`MAX_FILLER_SENTENCES`] appends whatever the catalog holds,
//! so a catalog of zero-word sentences cannot loop forever.

use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::words::count_words;

/// Default cap on the number of filler sentences appended in one call.
pub const MAX_FILLER_SENTENCES: usize = 10;

/// The built-in filler sentences, in cycling order.
pub static DEFAULT_FILLERS: &[&str] = &[
    "Это придаёт сцене тёплую и уютную атмосферу.",
    "Вижу лёгкую ностальгию в этих деталях.",
    "Сцена вызывает мягкое ощущение спокойствия и уюта.",
    "Каждая деталь будто хранит свою историю.",
    "Смотреть на это хочется ещё и ещё, ощущая тепло момента.",
];

/// An ordered, non-empty list of complete sentences used for padding.
///
/// ```rust
/// use lathe::FillerCatalog;
///
/// let catalog = FillerCatalog::new(["Тепло.", "Тихо и светло."]).unwrap();
/// let padded = catalog.pad("Утро.", 1, 5);
///
/// assert_eq!(padded.text, "Утро. Тепло. Тихо и светло.");
/// assert_eq!(padded.words, 5);
/// assert_eq!(padded.appended, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerCatalog {
    sentences: Vec<String>,
    max_fillers: usize,
}

/// Text after padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padded {
    /// The padded text.
    pub text: String,
    /// Word count of `text`.
    pub words: usize,
    /// Number of filler sentences appended.
    pub appended: usize,
}

impl FillerCatalog {
    /// Create a catalog from sentences.
    ///
    /// Entries are trimmed; blank entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] if no non-blank sentence remains.
    pub fn new<I, S>(sentences: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sentences: Vec<String> = sentences
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self {
            sentences,
            max_fillers: MAX_FILLER_SENTENCES,
        })
    }

    /// Set the cap on appended sentences per call.
    #[must_use]
    pub fn with_max_fillers(mut self, max_fillers: usize) -> Self {
        self.max_fillers = max_fillers;
        self
    }

    /// The catalog sentences, in cycling order.
    #[must_use]
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// The cap on appended sentences per call.
    #[must_use]
    pub fn max_fillers(&self) -> usize {
        self.max_fillers
    }

    /// Append catalog sentences to `text` until it has at least `min` words.
    ///
    /// `words` is the current word count of `text`. Sentences are taken from
    /// the start of the catalog, wrapping around, and joined with a single
    /// space. At most [`Self::max_fillers`] sentences are appended, so the
    /// result may still be short of `min` if the catalog is mostly
    /// punctuation.
    pub fn pad(&self, text: &str, words: usize, min: usize) -> Padded {
        let mut text = text.to_string();
        let mut words = words;
        let mut appended = 0;

        for filler in self.sentences.iter().cycle() {
            if words >= min || appended >= self.max_fillers {
                break;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(filler);
            words = count_words(text.as_str());
            appended += 1;
            trace!(appended, words, min, "filler appended");
        }

        if words < min {
            warn!(
                words,
                min,
                appended,
                "filler cap reached before the minimum word count"
            );
        }

        Padded {
            text,
            words,
            appended,
        }
    }
}

impl Default for FillerCatalog {
    fn default() -> Self {
        Self {
            sentences: DEFAULT_FILLERS.iter().map(|s| (*s).to_string()).collect(),
            max_fillers: MAX_FILLER_SENTENCES,
        }
    }
}

impl TryFrom<Vec<String>> for FillerCatalog {
    type Error = Error;

    fn try_from(sentences: Vec<String>) -> Result<Self> {
        Self::new(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = FillerCatalog::default();
        assert_eq!(catalog.sentences().len(), 5);
        assert_eq!(
            catalog.sentences()[0],
            "Это придаёт сцене тёплую и уютную атмосферу."
        );
        assert_eq!(catalog.max_fillers(), MAX_FILLER_SENTENCES);
    }

    #[test]
    fn test_default_filler_word_counts() {
        let counts: Vec<usize> = DEFAULT_FILLERS.iter().map(|s| count_words(*s)).collect();
        assert_eq!(counts, [7, 6, 7, 6, 10]);
    }

    #[test]
    fn test_pad_from_empty_has_no_leading_space() {
        let catalog = FillerCatalog::default();
        let padded = catalog.pad("", 0, 1);
        assert_eq!(padded.text, DEFAULT_FILLERS[0]);
        assert_eq!(padded.appended, 1);
    }

    #[test]
    fn test_pad_wraps_around() {
        let catalog = FillerCatalog::new(["Один два.", "Три."]).unwrap();
        let padded = catalog.pad("", 0, 6);
        assert_eq!(padded.text, "Один два. Три. Один два. Три.");
        assert_eq!(padded.words, 6);
        assert_eq!(padded.appended, 4);
    }

    #[test]
    fn test_no_padding_when_long_enough() {
        let catalog = FillerCatalog::default();
        let padded = catalog.pad("a b c", 3, 3);
        assert_eq!(padded.text, "a b c");
        assert_eq!(padded.appended, 0);
    }

    #[test]
    fn test_cap_bounds_appends() {
        // Zero-word fillers never reach the minimum
        let catalog = FillerCatalog::new(["...", "!"]).unwrap();
        let padded = catalog.pad("", 0, 40);
        assert_eq!(padded.appended, MAX_FILLER_SENTENCES);
        assert_eq!(padded.words, 0);
    }

    #[test]
    fn test_custom_cap() {
        let catalog = FillerCatalog::new(["Да."]).unwrap().with_max_fillers(3);
        let padded = catalog.pad("", 0, 100);
        assert_eq!(padded.text, "Да. Да. Да.");
        assert_eq!(padded.appended, 3);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            FillerCatalog::new(Vec::<String>::new()),
            Err(Error::EmptyCatalog)
        ));
        assert!(matches!(
            FillerCatalog::new(["  ", ""]),
            Err(Error::EmptyCatalog)
        ));
    }
}
