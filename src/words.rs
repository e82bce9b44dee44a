//! Word counting.
//!
//! A word is a run of word characters, optionally followed by one joiner
//! (`-` or `'`) and a second run:
//!
//! ```text
//! "Это тест-пример!"   -> ["Это", "тест-пример"]          = 2
//! "rock'n'roll"        -> ["rock'n", "roll"]             = 2
//! "— 42 ... ok"        -> ["42", "ok"]                   = 2
//! ```
//!
//! Word characters are ASCII letters and digits plus the Russian Cyrillic
//! alphabet (`а-я`, `А-Я`, `ё`, `Ё`). Anything else separates words and is
//! never counted on its own. Only a single joiner is absorbed per word, so
//! `a-b-c` counts as two words, not one.

/// Whether `c` can be part of a word.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// Whether `c` can join two runs of word characters into one word.
#[must_use]
pub fn is_joiner(c: char) -> bool {
    matches!(c, '-' | '\'')
}

/// Iterator over the words of a string, as slices of the input.
///
/// ```rust
/// use lathe::words;
///
/// let found: Vec<&str> = words("Смотреть на это — ещё и ещё!").collect();
/// assert_eq!(found, ["Смотреть", "на", "это", "ещё", "и", "ещё"]);
/// ```
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

/// Iterate over the words of `text`.
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

impl Words<'_> {
    /// Byte offset just past the run of word characters starting at `from`.
    fn run_end(&self, from: usize) -> usize {
        self.text[from..]
            .char_indices()
            .find(|&(_, c)| !is_word_char(c))
            .map_or(self.text.len(), |(i, _)| from + i)
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let (offset, _) = rest.char_indices().find(|&(_, c)| is_word_char(c))?;

        let start = self.pos + offset;
        let mut end = self.run_end(start);

        // One joiner, and only when a word character follows it
        let mut tail = self.text[end..].chars();
        if let (Some(joiner), Some(next)) = (tail.next(), tail.next()) {
            if is_joiner(joiner) && is_word_char(next) {
                end = self.run_end(end + joiner.len_utf8());
            }
        }

        self.pos = end;
        Some(&self.text[start..end])
    }
}

impl std::iter::FusedIterator for Words<'_> {}

/// Count the words in `text`.
///
/// Accepts `&str` or `Option<&str>`; empty input and `None` count as zero.
///
/// ```rust
/// use lathe::count_words;
///
/// assert_eq!(count_words("Это тест-пример!"), 2);
/// assert_eq!(count_words(""), 0);
/// assert_eq!(count_words(None), 0);
/// ```
pub fn count_words<'a>(text: impl Into<Option<&'a str>>) -> usize {
    text.into().map_or(0, |text| words(text).count())
}
