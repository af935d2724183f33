use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::model::translator::{ConfigError, Translator};

const DEFAULT_TRANSLATIONS: &str = include_str!("../../translations/en.yaml");

/// Flat `key: word` mapping as it appears in the translation file.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    fn to_model(&self) -> Result<Translator, ConfigError> {
        Translator::from_config(&self.0)
    }
}

pub fn load_translations(path: &Path) -> anyhow::Result<Translator> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read translation table {}", path.display()))?;
    parse_translations(&contents)
        .with_context(|| format!("invalid translation table {}", path.display()))
}

/// The English table shipped with the binary.
pub fn default_translations() -> anyhow::Result<Translator> {
    parse_translations(DEFAULT_TRANSLATIONS).context("invalid embedded translation table")
}

fn parse_translations(contents: &str) -> anyhow::Result<Translator> {
    let table: TranslationTable = serde_yaml::from_str(contents)?;
    Ok(table.to_model()?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_embedded_table_builds() {
        let translator = default_translations().unwrap();

        assert_eq!("one", translator.one(1));
        assert_eq!("ninety", translator.ten(9));
        assert_eq!("twelve", translator.teen(2));
        assert_eq!(Some("trillion"), translator.exponent(12));
    }

    #[test]
    fn test_incomplete_table_is_rejected() {
        let err = parse_translations("one.1: one\n").unwrap_err();

        assert_eq!(
            "missing translation key `one.2`",
            err.root_cause().to_string()
        );
    }

    #[test]
    fn test_unparsable_table_is_rejected() {
        assert!(parse_translations("one.1: [not, a, word]").is_err());
    }
}
