use serde::Serialize;
use std::fmt;

use super::violation::{self, Violation};
use crate::error::{BioError, Result};

/// Sex of a biographical record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    /// Parse an already uppercased sex code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "F" => Some(Sex::Female),
            "M" => Some(Sex::Male),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "Female"),
            Sex::Male => write!(f, "Male"),
        }
    }
}

/// One admitted biographical entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Canonical name, also the store key
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    /// Height in inches
    pub height: f64,
    /// Weight in pounds
    pub weight: f64,
}

impl Record {
    /// Store key for this record
    pub fn key(&self) -> &str {
        &self.name
    }
}

/// Raw command-line input, canonicalized and coerced but not yet validated
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub sex: String,
    pub age: Option<i64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl Candidate {
    /// Build a candidate from raw strings. Never fails; see [`Candidate::validate`].
    pub fn new(name: &str, sex: &str, age: &str, height: &str, weight: &str) -> Self {
        Self {
            name: canonical_name(name),
            sex: sex.trim().to_uppercase(),
            age: age.trim().parse::<i64>().ok(),
            height: parse_finite(height),
            weight: parse_finite(weight),
        }
    }

    /// All violations of this candidate, in field order
    pub fn validate(&self) -> Vec<Violation> {
        violation::check(self)
    }

    /// Admit the candidate as a record, or report every violation at once
    pub fn into_record(self) -> Result<Record> {
        let violations = self.validate();
        if !violations.is_empty() {
            return Err(BioError::Validation(violations));
        }

        match (
            Sex::from_code(&self.sex),
            self.age.and_then(|a| u32::try_from(a).ok()),
            self.height,
            self.weight,
        ) {
            (Some(sex), Some(age), Some(height), Some(weight)) => Ok(Record {
                name: self.name,
                sex,
                age,
                height,
                weight,
            }),
            _ => Err(BioError::Validation(self.validate())),
        }
    }
}

/// Capitalize a name: first character uppercase, the rest lowercase
///
/// A first character whose uppercase form is several characters ("ß" to
/// "SS") is kept as is, so applying this twice gives the same key.
pub fn canonical_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut name = String::with_capacity(raw.len());
    name.push(head);
    name.push_str(&chars.as_str().to_lowercase());
    name
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
