//! Word-count window configuration.
//!
//! ## The Problem
//!
//! A shaped description has two pulls on it:
//!
//! - Too short: the passage reads as a caption, not a description
//! - Too long: the passage rambles, and the model tends to trail off
//!
//! But a hard cut at N words breaks the last sentence in half.
//!
//! ```text
//! Window: 40..=50 words
//! Text:   [12 words]. [18 words]. [15 words]. [9 words].
//!
//! Selected: [12]. [18].         = 30 words  (adding 15 would reach 45, fits)
//! Selected: [12]. [18]. [15].   = 45 words  (adding 9 would reach 54, stop)
//! ```
//!
//! ## The Solution: Min vs Max
//!
//! `WordWindow` separates the two bounds:
//!
//! - `max`: sentences are taken while the running total stays within it.
//! - `min`: if the selection falls short, whole filler sentences are appended.
//!
//! The max is a selection budget, not a guarantee: a single first sentence
//! longer than `max` is kept whole rather than cut.

use std::cmp::Ordering;

/// Default lower bound on the word count of a shaped description.
pub const MIN_WORDS: usize = 40;

/// Default upper bound used when selecting sentences.
pub const MAX_WORDS: usize = 50;

/// Lower and upper word bounds for shaped text.
///
/// # Examples
///
/// ```rust
/// use lathe::WordWindow;
///
/// let window = WordWindow::default();
/// assert_eq!(window.min(), 40);
/// assert_eq!(window.max(), 50);
///
/// // Explicit bounds
/// let window = WordWindow::new(20, 30).unwrap();
/// assert_eq!(window.min(), 20);
///
/// // Range syntax
/// let window = WordWindow::try_from(40..=60).unwrap();
/// assert_eq!(window.max(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWindow {
    min: usize,
    max: usize,
}

impl WordWindow {
    /// Create a window from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `max == 0` or `max < min`.
    pub const fn new(min: usize, max: usize) -> Result<Self, WindowError> {
        if max == 0 {
            Err(WindowError::ZeroMax)
        } else if max < min {
            Err(WindowError::MaxLessThanMin { min, max })
        } else {
            Ok(Self { min, max })
        }
    }

    /// The lower bound that padding aims for.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// The selection budget.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Where a word count falls relative to the window.
    ///
    /// Returns:
    /// - `Ordering::Less`: below `min`, padding needed
    /// - `Ordering::Equal`: inside `min..=max`
    /// - `Ordering::Greater`: above `max` (only reachable via an over-long first sentence)
    #[must_use]
    pub fn fits(&self, words: usize) -> Ordering {
        if words < self.min {
            Ordering::Less
        } else if words > self.max {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Check if adding `additional` words to `current` would pass the max.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max
    }
}

impl Default for WordWindow {
    fn default() -> Self {
        Self {
            min: MIN_WORDS,
            max: MAX_WORDS,
        }
    }
}

impl TryFrom<std::ops::RangeInclusive<usize>> for WordWindow {
    type Error = WindowError;

    fn try_from(range: std::ops::RangeInclusive<usize>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

/// Error when configuring a word window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Max must be >= min.
    #[error("max ({max}) must be >= min ({min})")]
    MaxLessThanMin {
        /// The requested lower bound.
        min: usize,
        /// The max that was too small.
        max: usize,
    },

    /// A zero max would select nothing but over-long sentences.
    #[error("max must be > 0")]
    ZeroMax,
}
