use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The comparison operator of a column filter.
///
/// The display string is the canonical representation in every persistence
/// format; reverse lookup is an exact, case-sensitive match.
#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Serialize, Deserialize, Clone, Copy, EnumIter)]
pub enum ComparisonType {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = "!=")]
    NotEqual,
    Substring,
    #[serde(rename = "Regular expression")]
    Regex,
}

impl ComparisonType {
    pub fn display_str(&self) -> &'static str {
        match self {
            ComparisonType::Equal => "=",
            ComparisonType::GreaterThan => ">",
            ComparisonType::GreaterThanOrEqual => ">=",
            ComparisonType::LessThan => "<",
            ComparisonType::LessThanOrEqual => "<=",
            ComparisonType::NotEqual => "!=",
            ComparisonType::Substring => "Substring",
            ComparisonType::Regex => "Regular expression",
        }
    }

    /// Resolves a stored operator string back to its variant.
    /// Unknown strings yield `None`; the match is case-sensitive.
    pub fn from_display(text: &str) -> Option<ComparisonType> {
        ComparisonType::iter().find(|candidate| candidate.display_str() == text)
    }

    /// Every operator string, in the order operator choice lists present them.
    pub fn all_operators() -> [&'static str; 8] {
        [
            ComparisonType::Equal.display_str(),
            ComparisonType::NotEqual.display_str(),
            ComparisonType::GreaterThan.display_str(),
            ComparisonType::GreaterThanOrEqual.display_str(),
            ComparisonType::LessThan.display_str(),
            ComparisonType::LessThanOrEqual.display_str(),
            ComparisonType::Substring.display_str(),
            ComparisonType::Regex.display_str(),
        ]
    }

    /// Operators applicable to string-typed fields.
    pub fn string_operators() -> [&'static str; 2] {
        [
            ComparisonType::Substring.display_str(),
            ComparisonType::Regex.display_str(),
        ]
    }

    /// Operators applicable to numeric and date fields.
    pub fn numeric_operators() -> [&'static str; 6] {
        [
            ComparisonType::Equal.display_str(),
            ComparisonType::NotEqual.display_str(),
            ComparisonType::GreaterThan.display_str(),
            ComparisonType::GreaterThanOrEqual.display_str(),
            ComparisonType::LessThan.display_str(),
            ComparisonType::LessThanOrEqual.display_str(),
        ]
    }
}

impl Display for ComparisonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_str())
    }
}
