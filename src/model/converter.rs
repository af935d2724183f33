use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

use super::translator::Translator;

/// Smallest unsupported dollar amount. Naming the exponents past trillion
/// would need more table entries, so everything from one quadrillion up is
/// rejected.
const DOLLAR_LIMIT: u64 = 1_000_000_000_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("amount must be a non-negative value")]
    Negative,
    #[error("amounts of one quadrillion dollars or more are not supported")]
    TooLarge,
}

/// Renders a dollars-and-cents amount as English words, e.g. `123.04` as
/// "one hundred twenty-three and 04/100 dollars".
pub struct AmountToWords<'a> {
    translator: &'a Translator,
}

impl<'a> AmountToWords<'a> {
    pub fn new(translator: &'a Translator) -> AmountToWords<'a> {
        AmountToWords { translator }
    }

    /// Convert `amount`, assumed to be a dollar value with 1-cent precision,
    /// to its word representation. Any fraction below 1 cent is silently
    /// dropped, not rounded.
    pub fn convert(&self, amount: Decimal) -> Result<String, ConvertError> {
        if amount < Decimal::ZERO {
            return Err(ConvertError::Negative);
        }
        let dollars = match amount.trunc().to_u64() {
            Some(dollars) if dollars < DOLLAR_LIMIT => dollars,
            _ => return Err(ConvertError::TooLarge),
        };
        let cents = (amount.fract() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u32()
            .unwrap_or(0);

        Ok(format!(
            "{} and {cents:02}/100 dollars",
            self.dollars_to_words(dollars)
        ))
    }

    /// Render the dollar amount as base-1000 groups, most significant first.
    /// Zero groups contribute nothing, neither words nor their exponent name.
    fn dollars_to_words(&self, dollars: u64) -> String {
        if dollars == 0 {
            return "zero".to_string();
        }

        let mut phrases: Vec<String> = Vec::new();
        let mut rest = dollars;
        let mut exponent = 0;
        while rest > 0 {
            let group = (rest % 1000) as u16;
            if group != 0 {
                phrases.push(self.group_to_words(group, exponent));
            }
            rest /= 1000;
            exponent += 3;
        }

        phrases.reverse();
        phrases.join(" ")
    }

    fn group_to_words(&self, group: u16, exponent: u32) -> String {
        let hundreds = (group / 100) as u8;
        let tens = ((group / 10) % 10) as u8;
        let ones = (group % 10) as u8;

        let mut words: Vec<String> = Vec::new();
        if hundreds != 0 {
            words.push(format!("{} hundred", self.translator.one(hundreds)));
        }
        if tens == 1 {
            // The teen word already covers both digits.
            words.push(self.translator.teen(ones).to_string());
        } else if tens != 0 {
            if ones != 0 {
                words.push(format!(
                    "{}-{}",
                    self.translator.ten(tens),
                    self.translator.one(ones)
                ));
            } else {
                words.push(self.translator.ten(tens).to_string());
            }
        } else if ones != 0 {
            words.push(self.translator.one(ones).to_string());
        }

        if let Some(name) = self.translator.exponent(exponent) {
            words.push(name.to_string());
        }

        words.join(" ")
    }
}
