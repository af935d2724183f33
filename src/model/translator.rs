use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing translation key `{0}`")]
    MissingKey(String),
}

/// Word lookups for rendering digits. Built once from a key/word mapping and
/// read-only afterwards.
#[derive(Debug)]
pub struct Translator {
    ones: Vec<String>,
    tens: Vec<String>,
    teens: Vec<String>,
    exponents: HashMap<u32, String>,
}

impl Translator {
    /// Build the lookup tables from keys named `one.#`, `ten.#`, `teen.#`,
    /// and `exponent.#`.
    ///
    /// `one.[1-9]` are the single digit words, `ten.[2-9]` the multiples of
    /// ten, `teen.[0-9]` the words for 10-19 keyed by their ones digit, and
    /// `exponent.#` the names of the thousands, millions, etc. positions.
    /// Only exponents 3, 6, 9, and 12 are supported. Any absent key fails
    /// construction.
    pub fn from_config(config: &HashMap<String, String>) -> Result<Translator, ConfigError> {
        let mut ones = Vec::with_capacity(9);
        for digit in 1..=9 {
            ones.push(required(config, &format!("one.{digit}"))?);
        }
        let mut tens = Vec::with_capacity(8);
        for digit in 2..=9 {
            tens.push(required(config, &format!("ten.{digit}"))?);
        }
        let mut teens = Vec::with_capacity(10);
        for digit in 0..=9 {
            teens.push(required(config, &format!("teen.{digit}"))?);
        }
        let mut exponents = HashMap::new();
        for exponent in [3u32, 6, 9, 12] {
            exponents.insert(exponent, required(config, &format!("exponent.{exponent}"))?);
        }

        Ok(Translator {
            ones,
            tens,
            teens,
            exponents,
        })
    }

    /// Word for a single digit in 1-9.
    pub fn one(&self, digit: u8) -> &str {
        &self.ones[digit as usize - 1]
    }

    /// Word for a tens digit in 2-9 (twenty through ninety).
    pub fn ten(&self, digit: u8) -> &str {
        &self.tens[digit as usize - 2]
    }

    /// Word for the value 10 + `digit` (ten through nineteen).
    pub fn teen(&self, digit: u8) -> &str {
        &self.teens[digit as usize]
    }

    /// Name for a power of ten, or `None` when that position has no name
    /// (the ones position, exponent 0, never does).
    pub fn exponent(&self, exponent: u32) -> Option<&str> {
        self.exponents.get(&exponent).map(String::as_str)
    }
}

fn required(config: &HashMap<String, String>, key: &str) -> Result<String, ConfigError> {
    config
        .get(key)
        .cloned()
        .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    fn english() -> HashMap<String, String> {
        [
            ("one.1", "one"),
            ("one.2", "two"),
            ("one.3", "three"),
            ("one.4", "four"),
            ("one.5", "five"),
            ("one.6", "six"),
            ("one.7", "seven"),
            ("one.8", "eight"),
            ("one.9", "nine"),
            ("ten.2", "twenty"),
            ("ten.3", "thirty"),
            ("ten.4", "forty"),
            ("ten.5", "fifty"),
            ("ten.6", "sixty"),
            ("ten.7", "seventy"),
            ("ten.8", "eighty"),
            ("ten.9", "ninety"),
            ("teen.0", "ten"),
            ("teen.1", "eleven"),
            ("teen.2", "twelve"),
            ("teen.3", "thirteen"),
            ("teen.4", "fourteen"),
            ("teen.5", "fifteen"),
            ("teen.6", "sixteen"),
            ("teen.7", "seventeen"),
            ("teen.8", "eighteen"),
            ("teen.9", "nineteen"),
            ("exponent.3", "thousand"),
            ("exponent.6", "million"),
            ("exponent.9", "billion"),
            ("exponent.12", "trillion"),
        ]
        .into_iter()
        .map(|(key, word)| (key.to_string(), word.to_string()))
        .collect()
    }

    #[test]
    fn test_lookups_from_complete_config() {
        let translator = Translator::from_config(&english()).unwrap();

        assert_eq!("one", translator.one(1));
        assert_eq!("nine", translator.one(9));
        assert_eq!("twenty", translator.ten(2));
        assert_eq!("ninety", translator.ten(9));
        assert_eq!("ten", translator.teen(0));
        assert_eq!("nineteen", translator.teen(9));
        assert_eq!(Some("thousand"), translator.exponent(3));
        assert_eq!(Some("trillion"), translator.exponent(12));
    }

    #[test]
    fn test_unnamed_exponents_have_no_word() {
        let translator = Translator::from_config(&english()).unwrap();

        assert_eq!(None, translator.exponent(0));
        assert_eq!(None, translator.exponent(15));
    }

    #[test]
    fn test_any_missing_key_fails_construction() {
        for key in ["one.1", "one.9", "ten.2", "teen.0", "exponent.12"] {
            let mut config = english();
            config.remove(key);

            let err = Translator::from_config(&config).unwrap_err();
            assert_eq!(ConfigError::MissingKey(key.to_string()), err);
        }
    }
}
