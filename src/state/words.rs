//! Word source and shuffling.
//!
//! A [`WordSource`] is the immutable list of candidate words a session draws
//! from. Construction checks the preconditions the selection and shuffle loops
//! rely on, so a bad list is rejected up front instead of spinning forever.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

/// Immutable ordered list of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Build a source from a list of words.
    ///
    /// Every word must be free of whitespace and have at least one permutation
    /// that differs from itself.
    pub fn new<I, S>(words: I) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            return Err(WordSourceError::Empty);
        }

        for word in &words {
            if word.chars().any(char::is_whitespace) {
                return Err(WordSourceError::ContainsWhitespace(word.clone()));
            }
            if !has_distinct_permutation(word) {
                return Err(WordSourceError::NotShufflable(word.clone()));
            }
        }

        Ok(Self { words })
    }

    /// Parse a newline or whitespace separated word list.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self, WordSourceError> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .flat_map(str::split_whitespace);
        Self::new(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words (duplicates in the list count once).
    pub fn distinct_len(&self) -> usize {
        self.words.iter().collect::<HashSet<_>>().len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Check the source can fill a game of `max_words` rounds without repeats.
    pub fn ensure_capacity(&self, max_words: usize) -> Result<(), WordSourceError> {
        let available = self.distinct_len();
        if available < max_words {
            return Err(WordSourceError::TooFewWords {
                needed: max_words,
                available,
            });
        }
        Ok(())
    }

    /// Draw a word uniformly at random.
    pub(crate) fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

/// True if some ordering of `word`'s characters differs from `word`.
pub fn has_distinct_permutation(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

/// Shuffle the characters of `word` until the result differs from it.
///
/// `word` must satisfy [`has_distinct_permutation`], otherwise this never
/// returns. [`WordSource::new`] guarantees that for every word it holds.
pub fn shuffle_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    loop {
        chars.shuffle(rng);
        let shuffled: String = chars.iter().collect();
        if shuffled != word {
            return shuffled;
        }
    }
}

/// Word source errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    Empty,
    ContainsWhitespace(String),
    NotShufflable(String),
    TooFewWords { needed: usize, available: usize },
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word source is empty"),
            Self::ContainsWhitespace(word) => {
                write!(f, "Word '{}' contains whitespace", word)
            }
            Self::NotShufflable(word) => {
                write!(f, "Word '{}' has no distinct permutation", word)
            }
            Self::TooFewWords { needed, available } => write!(
                f,
                "Word source has {} distinct words, need at least {}",
                available, needed
            ),
        }
    }
}

impl std::error::Error for WordSourceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_source_new() {
        let source = WordSource::new(["animal", "banana", "cactus"]).unwrap();
        assert_eq!(source.len(), 3);
        assert!(!source.is_empty());
        assert_eq!(source.get(1), Some("banana"));
        assert_eq!(source.get(3), None);
    }

    #[test]
    fn test_source_rejects_bad_words() {
        assert_eq!(
            WordSource::new(Vec::<String>::new()),
            Err(WordSourceError::Empty)
        );
        assert_eq!(
            WordSource::new(["ice cream"]),
            Err(WordSourceError::ContainsWhitespace("ice cream".to_string()))
        );
        assert_eq!(
            WordSource::new(["apple", "a"]),
            Err(WordSourceError::NotShufflable("a".to_string()))
        );
        assert_eq!(
            WordSource::new(["zzz"]),
            Err(WordSourceError::NotShufflable("zzz".to_string()))
        );
        assert_eq!(
            WordSource::new([""]),
            Err(WordSourceError::NotShufflable(String::new()))
        );
    }

    #[test]
    fn test_source_parse() {
        let text = "# animals\nrabbit\n\n  turtle  \nzebra lion\n";
        let source = WordSource::parse(text).unwrap();
        let words: Vec<&str> = source.iter().collect();
        assert_eq!(words, vec!["rabbit", "turtle", "zebra", "lion"]);
    }

    #[test]
    fn test_capacity() {
        let source = WordSource::new(["ab", "cd", "ab"]).unwrap();
        assert_eq!(source.distinct_len(), 2);
        assert!(source.ensure_capacity(2).is_ok());
        assert_eq!(
            source.ensure_capacity(3),
            Err(WordSourceError::TooFewWords {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_distinct_permutation() {
        assert!(has_distinct_permutation("ab"));
        assert!(has_distinct_permutation("aab"));
        assert!(!has_distinct_permutation("aaa"));
        assert!(!has_distinct_permutation("x"));
        assert!(!has_distinct_permutation(""));
    }

    #[test]
    fn test_shuffle_differs_and_permutes() {
        let mut rng = StdRng::seed_from_u64(7);
        for word in ["ab", "aab", "letter", "balloon", "crane"] {
            for _ in 0..50 {
                let shuffled = shuffle_word(word, &mut rng);
                assert_ne!(shuffled, word);
                assert_eq!(sorted(&shuffled), sorted(word));
            }
        }
    }

    #[test]
    fn test_two_letter_shuffle_is_swap() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(shuffle_word("ab", &mut rng), "ba");
    }

    #[test]
    fn test_pick_in_source() {
        let source = WordSource::new(["one", "two", "six"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let word = source.pick(&mut rng);
            assert!(source.iter().any(|w| w == word));
        }
    }

    #[test]
    fn test_error_display() {
        let err = WordSourceError::TooFewWords {
            needed: 10,
            available: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Word source has 4 distinct words, need at least 10"
        );
    }
}
