//! # lathe
//!
//! Fit free-form generated prose into a word-count window without ever
//! cutting a sentence in half.
//!
//! ## The Problem
//!
//! Ask a language model for "an emotional description of at least 40 words"
//! and you get anything from an empty string to three paragraphs that stop
//! mid-clause when the token limit hits. Downstream consumers want something
//! predictable:
//!
//! - At least N words
//! - Not much more than M words
//! - Only whole sentences, no dangling fragment at the end
//! - No failures: a usable string for every input
//!
//! Truncating at M words breaks the last sentence. Rejecting short output
//! and re-asking the model is slow and may never converge.
//!
//! ## The Approach
//!
//! Work at sentence granularity and fill gaps with pre-written sentences:
//!
//! ```text
//! generated:  "Солнце тонет в волнах. Небо горит. ... (120 words, cut off mid-"
//!
//! 1. normalize   collapse whitespace
//! 2. segment     ["Солнце тонет в волнах.", "Небо горит.", ..., "cut off mid-"]
//! 3. select      longest prefix with <= 50 words
//! 4. pad         append filler sentences until >= 40 words
//! 5. normalize   final cleanup
//! ```
//!
//! If the model returned nothing, the short seed description is used as the
//! base instead, and if that is blank too, a placeholder sentence.
//!
//! ## Quick Start
//!
//! ```rust
//! use lathe::{count_words, shape};
//!
//! let generated = "Закат заливает море золотом. Волны тихо шепчут у берега.";
//! let description = shape("закат над морем", Some(generated));
//!
//! assert!(description.starts_with(generated));
//! assert!(count_words(description.as_str()) >= 40);
//! ```
//!
//! ## Custom Windows
//!
//! ```rust
//! use lathe::{FillerCatalog, Shaper, WordWindow};
//!
//! let shaper = Shaper::new()
//!     .with_window(WordWindow::new(10, 20).unwrap())
//!     .with_catalog(FillerCatalog::new(["Воздух пахнет солью и летом."]).unwrap());
//!
//! let shaped = shaper.shape_detailed("", Some("Чайка кричит."));
//! assert_eq!(shaped.words, 12);
//! assert_eq!(shaped.fillers, 2);
//! ```
//!
//! ## Around the Core
//!
//! The [`generate`] module holds the prompt builder and the
//! [`generate::TextGenerator`] seam for plugging in a model; [`batch`] runs
//! generator and shaper over a list of descriptions and writes JSON records;
//! [`Config`] loads window and filler settings from TOML.

mod config;
mod error;
mod filler;
mod normalize;
mod segment;
mod select;
mod sentence;
mod shaper;
mod window;
mod words;

pub mod batch;
pub mod generate;

pub use config::{Config, PaddingConfig, WindowConfig};
pub use error::{Error, Result};
pub use filler::{FillerCatalog, Padded, DEFAULT_FILLERS, MAX_FILLER_SENTENCES};
pub use normalize::normalize_whitespace;
pub use segment::{is_terminal, segment, split_sentences};
pub use select::select_within;
pub use sentence::{join_sentences, Sentence};
pub use shaper::{shape, Base, Shaped, Shaper, DEFAULT_PLACEHOLDER};
pub use window::{WindowError, WordWindow, MAX_WORDS, MIN_WORDS};
pub use words::{count_words, is_joiner, is_word_char, words, Words};
