//! Parsed slash command options.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::models::CurrencyAmount;

/// A single option value as delivered by Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
}

/// Options of one command invocation, by name.
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    values: HashMap<String, ArgValue>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    #[cfg(test)]
    pub fn with_str(mut self, name: &str, value: &str) -> Self {
        self.insert(name, ArgValue::Str(value.to_string()));
        self
    }

    #[cfg(test)]
    pub fn with_int(mut self, name: &str, value: i64) -> Self {
        self.insert(name, ArgValue::Int(value));
        self
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ArgValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// A string option Discord marks as required.
    pub fn required_str(&self, name: &str) -> Result<&str, AppError> {
        self.get_str(name)
            .ok_or_else(|| AppError::Validation(format!("Missing required option `{}`.", name)))
    }

    /// A positive integer option, falling back to `default` when omitted or not positive.
    pub fn positive_int_or(&self, name: &str, default: i64) -> i64 {
        self.get_int(name).filter(|v| *v > 0).unwrap_or(default)
    }

    /// The four currency options; omitted ones count as zero.
    pub fn currency_amount(&self) -> Result<CurrencyAmount, AppError> {
        let read = |name: &str| -> Result<u64, AppError> {
            match self.get_int(name) {
                None => Ok(0),
                Some(value) => u64::try_from(value).map_err(|_| {
                    AppError::Validation("Currency amounts cannot be negative.".to_string())
                }),
            }
        };

        let amount = CurrencyAmount {
            platinum: read("platinum")?,
            gold: read("gold")?,
            silver: read("silver")?,
            copper: read("copper")?,
        };

        if amount.is_zero() {
            return Err(AppError::Validation(
                "You must specify at least one currency amount.".to_string(),
            ));
        }

        Ok(amount)
    }
}
