use std::collections::HashSet;
use std::io::BufRead;
use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;

use super::words::{EXTRA_GUESSES, TARGET_WORDS};
use super::WORD_LENGTH;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("{0:?} is not a five letter word")]
    InvalidWord(String),
    #[error("dictionary has no target words")]
    NoTargets,
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Closed vocabulary for target selection and guess validation.
#[derive(Clone, Debug)]
pub struct Dictionary {
    targets: Vec<String>,
    accepted: HashSet<String>,
}

impl Dictionary {
    /// The embedded word lists, built on first use.
    pub fn builtin() -> &'static Dictionary {
        static BUILTIN: OnceLock<Dictionary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let targets: Vec<String> = TARGET_WORDS.iter().map(|word| word.to_string()).collect();
            let mut accepted: HashSet<String> = targets.iter().cloned().collect();
            accepted.extend(EXTRA_GUESSES.iter().map(|word| word.to_string()));
            Dictionary { targets, accepted }
        })
    }

    /// Builds a dictionary from caller supplied words. Words are uppercased;
    /// every target is also an accepted guess.
    pub fn from_words<T, G>(targets: T, extra_guesses: G) -> Result<Self, DictionaryError>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut target_list = Vec::new();
        for word in targets {
            let word = checked_word(word.as_ref())?;
            if seen.insert(word.clone()) {
                target_list.push(word);
            }
        }

        if target_list.is_empty() {
            return Err(DictionaryError::NoTargets);
        }

        let mut accepted = seen;
        for word in extra_guesses {
            accepted.insert(checked_word(word.as_ref())?);
        }

        Ok(Self { targets: target_list, accepted })
    }

    /// Reads one target per line. Blank lines and `#` comments are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.push(word.to_string());
        }
        Self::from_words(words, std::iter::empty::<&str>())
    }

    pub fn random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `from_words` and the embedded list both guarantee at least one target.
        self.targets.choose(rng).map(String::as_str).unwrap_or(TARGET_WORDS[0])
    }

    pub fn is_valid_guess(&self, word: &str) -> bool {
        is_shaped_like_word(word) && self.accepted.contains(word)
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn accepted_len(&self) -> usize {
        self.accepted.len()
    }
}

fn is_shaped_like_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|byte| byte.is_ascii_uppercase())
}

fn checked_word(word: &str) -> Result<String, DictionaryError> {
    let upper = word.trim().to_ascii_uppercase();
    if !is_shaped_like_word(&upper) {
        return Err(DictionaryError::InvalidWord(word.to_string()));
    }
    Ok(upper)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn builtin_lists_are_well_formed() {
        for word in TARGET_WORDS.iter().chain(EXTRA_GUESSES) {
            assert!(is_shaped_like_word(word), "bad entry {word:?}");
        }
        let dictionary = Dictionary::builtin();
        assert!(dictionary.accepted_len() > dictionary.targets().len());
        for target in dictionary.targets() {
            assert!(dictionary.is_valid_guess(target));
        }
    }

    #[test]
    fn guesses_must_be_uppercase_five_letter_words() {
        let dictionary = Dictionary::builtin();
        assert!(dictionary.is_valid_guess("CRANE"));
        assert!(dictionary.is_valid_guess("ERASE"));
        assert!(!dictionary.is_valid_guess("crane"));
        assert!(!dictionary.is_valid_guess("CRANES"));
        assert!(!dictionary.is_valid_guess("QXZVW"));
        assert!(!dictionary.is_valid_guess(""));
    }

    #[test]
    fn random_target_comes_from_targets() {
        let dictionary = Dictionary::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let target = dictionary.random_target(&mut rng);
            assert!(dictionary.targets().iter().any(|word| word == target));
        }
    }

    #[test]
    fn custom_words_are_normalized() {
        let dictionary = Dictionary::from_words(["crane", " Slate "], ["erase"]).unwrap();
        assert_eq!(dictionary.targets(), &["CRANE".to_string(), "SLATE".to_string()]);
        assert!(dictionary.is_valid_guess("ERASE"));
        assert!(dictionary.is_valid_guess("SLATE"));
        assert_eq!(dictionary.accepted_len(), 3);
    }

    #[test]
    fn invalid_custom_words_are_rejected() {
        let err = Dictionary::from_words(["CRANE", "NO"], Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidWord(word) if word == "NO"));
        let err = Dictionary::from_words(Vec::<&str>::new(), ["CRANE"]).unwrap_err();
        assert!(matches!(err, DictionaryError::NoTargets));
    }

    #[test]
    fn reader_skips_comments_and_blanks() {
        let input = "# targets\ncrane\n\n  plant \n";
        let dictionary = Dictionary::from_reader(input.as_bytes()).unwrap();
        assert_eq!(dictionary.targets().len(), 2);
        assert!(dictionary.is_valid_guess("PLANT"));
    }
}
