//! Text generation seam.
//!
//! The shaper does not run a model. A generator implementing
//! [`TextGenerator`] turns a prompt into free-form text; the shaper then
//! fits that text to the word window. This lets the model backend (a local
//! transformer, an HTTP API, a fixture) be swapped without touching shaping.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::window::MIN_WORDS;

/// Build the instruction prompt for a short description.
///
/// `min_words` is the length the model is asked for; pass the shaper's
/// window minimum.
///
/// # Errors
///
/// Returns [`Error::EmptySeed`] if `seed` is blank.
///
/// ```rust
/// use lathe::generate::build_prompt;
///
/// let prompt = build_prompt("закат над морем", 40).unwrap();
/// assert!(prompt.contains("'закат над морем'"));
/// assert!(prompt.contains("не короче 40 слов"));
/// assert!(build_prompt("  ", 40).is_err());
/// ```
pub fn build_prompt(seed: &str, min_words: usize) -> Result<String> {
    let seed = seed.trim();
    if seed.is_empty() {
        return Err(Error::EmptySeed);
    }

    Ok(format!(
        "Дано краткое описание изображения: '{seed}'.\n\
         Задача: напиши развёрнутое эмоциональное описание изображения на русском языке.\n\
         - Используй цельные, полные предложения (с точками, вопросительными или восклицательными знаками).\n\
         - Описание должно быть эмоциональным (передать настроение сцены через слова и фразы),\n\
         - Длина: **не короче {min_words} слов** (можно больше), при этом не обрывай предложения.\n\
         - Не добавляй меток типа 'EMOTION' или служебного текста — просто тело описания.\n"
    ))
}

/// Sampling parameters passed to a model backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Upper bound on generated tokens.
    pub max_new_tokens: usize,
    /// Sample instead of greedy decoding.
    pub do_sample: bool,
    /// Softmax temperature.
    pub temperature: f32,
    /// Nucleus sampling mass.
    pub top_p: f32,
    /// Penalty for repeated tokens.
    pub repetition_penalty: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 400,
            do_sample: true,
            temperature: 0.7,
            top_p: 0.9,
            repetition_penalty: 1.2,
        }
    }
}

/// A backend that produces free-form text for a prompt.
///
/// `seed` is the short description the prompt was built from, for backends
/// that key on it (fixtures, caches). Implementations may return empty text;
/// the shaper falls back to the seed.
pub trait TextGenerator: Send + Sync {
    /// Generate raw text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] (or an I/O error) if the backend fails.
    fn generate(&self, seed: &str, prompt: &str, params: &GenerationParams) -> Result<String>;
}

/// A generator that always returns empty text.
///
/// Every description is then built from the seed plus fillers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

impl TextGenerator for NullGenerator {
    fn generate(&self, _seed: &str, _prompt: &str, _params: &GenerationParams) -> Result<String> {
        Ok(String::new())
    }
}

/// Text generated ahead of time, keyed by short description.
///
/// Missing keys produce empty text.
///
/// ```rust
/// use lathe::generate::{GenerationParams, Pregenerated, TextGenerator};
///
/// let generator = Pregenerated::from_json_str(r#"{"кот": "Кот спит на окне."}"#).unwrap();
/// let params = GenerationParams::default();
///
/// assert_eq!(generator.generate("кот", "", &params).unwrap(), "Кот спит на окне.");
/// assert_eq!(generator.generate("пёс", "", &params).unwrap(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pregenerated {
    texts: HashMap<String, String>,
}

impl Pregenerated {
    /// Create from a map of short description to generated text.
    #[must_use]
    pub fn new(texts: HashMap<String, String>) -> Self {
        let texts = texts
            .into_iter()
            .map(|(seed, text)| (seed.trim().to_string(), text))
            .collect();
        Self { texts }
    }

    /// Parse a JSON object mapping short descriptions to generated text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the input is not a string-to-string object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Read a JSON object file mapping short descriptions to generated text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Json`].
    pub fn load(path: &Path) -> Result<Self> {
        let generator = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), entries = generator.len(), "loaded pregenerated texts");
        Ok(generator)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl TextGenerator for Pregenerated {
    fn generate(&self, seed: &str, _prompt: &str, _params: &GenerationParams) -> Result<String> {
        Ok(self.texts.get(seed.trim()).cloned().unwrap_or_default())
    }
}

/// Prompt for `seed` with the default minimum word count.
///
/// # Errors
///
/// Returns [`Error::EmptySeed`] if `seed` is blank.
pub fn default_prompt(seed: &str) -> Result<String> {
    build_prompt(seed, MIN_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_seed_and_length() {
        let prompt = default_prompt("  кот на окне ").unwrap();
        assert!(prompt.starts_with("Дано краткое описание изображения: 'кот на окне'."));
        assert!(prompt.contains("не короче 40 слов"));
        assert!(prompt.ends_with("просто тело описания.\n"));
    }

    #[test]
    fn test_prompt_rejects_blank_seed() {
        assert!(matches!(build_prompt("", 40), Err(Error::EmptySeed)));
        assert!(matches!(build_prompt("\n\t", 40), Err(Error::EmptySeed)));
    }

    #[test]
    fn test_default_params() {
        let params = GenerationParams::default();
        assert_eq!(params.max_new_tokens, 400);
        assert!(params.do_sample);
        assert!((params.temperature - 0.7).abs() < f32::EPSILON);
        assert!((params.top_p - 0.9).abs() < f32::EPSILON);
        assert!((params.repetition_penalty - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_null_generator() {
        let text = NullGenerator
            .generate("кот", "prompt", &GenerationParams::default())
            .unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_pregenerated_trims_keys() {
        let generator = Pregenerated::from_json_str(r#"{" кот ": "Текст."}"#).unwrap();
        let params = GenerationParams::default();
        assert_eq!(generator.generate("кот", "", &params).unwrap(), "Текст.");
        assert_eq!(generator.len(), 1);
    }

    #[test]
    fn test_pregenerated_rejects_non_object() {
        assert!(matches!(
            Pregenerated::from_json_str("[1, 2]"),
            Err(Error::Json(_))
        ));
    }
}
