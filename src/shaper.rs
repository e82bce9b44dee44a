//! The shaper: generated text in, whole-sentence description out.
//!
//! ## Pipeline
//!
//! ```text
//! generated ──normalize──> empty? ──> seed ──> empty? ──> placeholder
//!                              │            │
//!                              └────────────┴──> base text
//!
//! base text ──segment──> sentences ──select(max)──> joined text
//!                                                       │
//!                         words == 0? re-derive from seed once
//!                                                       │
//!                             pad(min) with fillers ──normalize──> output
//! ```
//!
//! Every step is total. Degraded input (no generated text, blank seed, pure
//! punctuation) degrades to filler-heavy output, never to an error.

use std::sync::LazyLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::filler::FillerCatalog;
use crate::normalize::normalize_whitespace;
use crate::segment::segment;
use crate::select::select_within;
use crate::sentence::{join_sentences, Sentence};
use crate::window::WordWindow;
use crate::words::count_words;

/// Base text used when both the generated text and the seed are blank.
pub const DEFAULT_PLACEHOLDER: &str = "Изображение.";

static DEFAULT_SHAPER: LazyLock<Shaper> = LazyLock::new(Shaper::default);

/// Shape generated text with the default window and filler catalog.
///
/// `seed` is the short source description; it is only used when
/// `generated` is absent or blank, or when the selected text has no words.
///
/// ```rust
/// use lathe::{count_words, shape};
///
/// let out = shape("закат над морем", None);
/// assert!(out.starts_with("закат над морем Это придаёт сцене"));
/// assert!(count_words(out.as_str()) >= 40);
/// ```
pub fn shape(seed: &str, generated: Option<&str>) -> String {
    DEFAULT_SHAPER.shape(seed, generated)
}

/// Which text the selection was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// The generated text.
    Generated,
    /// The seed description, because the generated text was blank.
    Seed,
    /// The placeholder sentence, because both inputs were blank.
    Placeholder,
}

/// The result of shaping, with a record of how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shaped {
    /// The final description.
    pub text: String,
    /// Word count of `text`.
    pub words: usize,
    /// The text the first selection was drawn from.
    pub base: Base,
    /// Whether the selection was re-derived from the seed after counting zero words.
    pub recovered: bool,
    /// Number of filler sentences appended.
    pub fillers: usize,
    /// The sentences kept from the base (or seed, if recovered).
    pub selected: Vec<Sentence>,
}

/// Shapes free-form text into whole sentences within a word window.
///
/// A `Shaper` is immutable once built and can be shared across threads.
///
/// ```rust
/// use lathe::{FillerCatalog, Shaper, WordWindow};
///
/// let shaper = Shaper::new()
///     .with_window(WordWindow::new(6, 8).unwrap())
///     .with_catalog(FillerCatalog::new(["Тепло и тихо."]).unwrap());
///
/// let shaped = shaper.shape_detailed("", Some("Море. Чайки кричат над волнами. Ветер стих и стало жарко."));
/// assert_eq!(shaped.text, "Море. Чайки кричат над волнами. Тепло и тихо.");
/// assert_eq!(shaped.words, 8);
/// assert_eq!(shaped.fillers, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shaper {
    window: WordWindow,
    catalog: FillerCatalog,
    placeholder: String,
}

impl Shaper {
    /// Create a shaper with the default window, catalog and placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different word window.
    #[must_use]
    pub fn with_window(mut self, window: WordWindow) -> Self {
        self.window = window;
        self
    }

    /// Use a different filler catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: FillerCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use a different placeholder sentence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPlaceholder`] if the placeholder is blank.
    pub fn with_placeholder(mut self, placeholder: &str) -> Result<Self> {
        let placeholder = normalize_whitespace(placeholder);
        if placeholder.is_empty() {
            return Err(Error::EmptyPlaceholder);
        }
        self.placeholder = placeholder;
        Ok(self)
    }

    /// The word window.
    #[must_use]
    pub fn window(&self) -> WordWindow {
        self.window
    }

    /// The filler catalog.
    #[must_use]
    pub fn catalog(&self) -> &FillerCatalog {
        &self.catalog
    }

    /// The placeholder sentence.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Shape `generated` (falling back to `seed`) into a description.
    pub fn shape(&self, seed: &str, generated: Option<&str>) -> String {
        self.shape_detailed(seed, generated).text
    }

    /// Like [`Self::shape`], also reporting which fallbacks were taken.
    pub fn shape_detailed(&self, seed: &str, generated: Option<&str>) -> Shaped {
        let generated = normalize_whitespace(generated);
        let seed = normalize_whitespace(seed);

        let (base, base_text) = if !generated.is_empty() {
            (Base::Generated, generated.as_str())
        } else if !seed.is_empty() {
            (Base::Seed, seed.as_str())
        } else {
            (Base::Placeholder, self.placeholder.as_str())
        };
        if base != Base::Generated {
            debug!(?base, "generated text is blank, falling back");
        }

        let (mut selected, mut text, mut words) = self.select(base_text);

        let mut recovered = false;
        if words == 0 && !seed.is_empty() {
            debug!("selection has no words, re-deriving from seed");
            (selected, text, words) = self.select(&seed);
            recovered = true;
        }

        let padded = self.catalog.pad(&text, words, self.window.min());
        let text = normalize_whitespace(padded.text.as_str());

        debug!(
            ?base,
            recovered,
            selected = selected.len(),
            fillers = padded.appended,
            words = padded.words,
            "shaped description"
        );

        Shaped {
            text,
            words: padded.words,
            base,
            recovered,
            fillers: padded.appended,
            selected,
        }
    }

    /// Segment `base`, select within the window max, and join.
    fn select(&self, base: &str) -> (Vec<Sentence>, String, usize) {
        let sentences = segment(base);
        let selected = select_within(&sentences, self.window.max());
        let text = join_sentences(selected);
        let words = count_words(text.as_str());
        (selected.to_vec(), text, words)
    }
}

impl Default for Shaper {
    fn default() -> Self {
        Self {
            window: WordWindow::default(),
            catalog: FillerCatalog::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filler::DEFAULT_FILLERS;
    use crate::window::{MAX_WORDS, MIN_WORDS};

    fn words_of(n: usize) -> String {
        format!("{}.", vec!["волна"; n].join(" "))
    }

    #[test]
    fn test_seed_fallback_pads_in_catalog_order() {
        let shaped = Shaper::new().shape_detailed("закат над морем", None);

        assert_eq!(shaped.base, Base::Seed);
        assert!(!shaped.recovered);
        assert_eq!(shaped.fillers, 6);
        let expected = format!(
            "закат над морем {} {}",
            DEFAULT_FILLERS.join(" "),
            DEFAULT_FILLERS[0]
        );
        assert_eq!(shaped.text, expected);
        assert_eq!(shaped.words, 46);
    }

    #[test]
    fn test_empty_string_generated_same_as_none() {
        let shaper = Shaper::new();
        assert_eq!(
            shaper.shape("закат", Some("  \n ")),
            shaper.shape("закат", None)
        );
    }

    #[test]
    fn test_placeholder_when_both_blank() {
        let shaped = Shaper::new().shape_detailed("   ", None);
        assert_eq!(shaped.base, Base::Placeholder);
        assert!(!shaped.recovered);
        assert!(shaped.text.starts_with("Изображение. Это придаёт"));
        assert!(shaped.words >= MIN_WORDS);
    }

    #[test]
    fn test_generated_within_window_untouched() {
        let generated = words_of(45);
        let shaped = Shaper::new().shape_detailed("seed", Some(&generated));
        assert_eq!(shaped.base, Base::Generated);
        assert_eq!(shaped.text, generated);
        assert_eq!(shaped.fillers, 0);
    }

    #[test]
    fn test_over_long_first_sentence_kept_whole() {
        let generated = format!("{} {}", words_of(64), words_of(3));
        let shaped = Shaper::new().shape_detailed("seed", Some(&generated));
        assert_eq!(shaped.text, words_of(64));
        assert_eq!(shaped.words, 64);
        assert!(shaped.words > MAX_WORDS);
    }

    #[test]
    fn test_punctuation_only_recovers_from_seed() {
        let shaped = Shaper::new().shape_detailed("тихий лес", Some("... !!!"));
        assert_eq!(shaped.base, Base::Generated);
        assert!(shaped.recovered);
        assert!(shaped.text.starts_with("тихий лес Это придаёт"));
    }

    #[test]
    fn test_punctuation_only_with_blank_seed_keeps_text() {
        let shaped = Shaper::new().shape_detailed("", Some("..."));
        assert!(!shaped.recovered);
        assert!(shaped.text.starts_with("... Это придаёт"));
        assert!(shaped.words >= MIN_WORDS);
    }

    #[test]
    fn test_custom_placeholder() {
        let shaper = Shaper::new().with_placeholder("  Картина. ").unwrap();
        assert_eq!(shaper.placeholder(), "Картина.");
        assert!(shaper.shape("", None).starts_with("Картина. "));
        assert!(matches!(
            Shaper::new().with_placeholder(" \t"),
            Err(Error::EmptyPlaceholder)
        ));
    }

    #[test]
    fn test_free_function_matches_default_shaper() {
        let generated = "Свет. Тень. Ветер.";
        assert_eq!(
            shape("seed", Some(generated)),
            Shaper::default().shape("seed", Some(generated))
        );
    }
}
