use std::fmt;

use super::record::{Candidate, Sex};

/// Minimum admissible age
pub const MIN_AGE: i64 = 18;

/// A single failed field check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    EmptyName,
    IncorrectSex,
    AgeNotNumber,
    AgeUnderaged,
    HeightNotNumber,
    WeightNotNumber,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Violation::EmptyName => "Name is empty",
            Violation::IncorrectSex => "Incorrect sex",
            Violation::AgeNotNumber => "Age is not a number",
            Violation::AgeUnderaged => "Age is underaged",
            Violation::HeightNotNumber => "Height is not a number",
            Violation::WeightNotNumber => "Weight is not a number",
        };
        write!(f, "{}", message)
    }
}

/// Check every field of a candidate; no check stops the others
pub fn check(candidate: &Candidate) -> Vec<Violation> {
    let mut violations = Vec::new();

    if candidate.name.is_empty() {
        violations.push(Violation::EmptyName);
    }

    if Sex::from_code(&candidate.sex).is_none() {
        violations.push(Violation::IncorrectSex);
    }

    match candidate.age {
        None => violations.push(Violation::AgeNotNumber),
        // u32 bounds the stored age
        Some(age) if age > i64::from(u32::MAX) => violations.push(Violation::AgeNotNumber),
        Some(age) if age < MIN_AGE => violations.push(Violation::AgeUnderaged),
        Some(_) => {}
    }

    if candidate.height.is_none() {
        violations.push(Violation::HeightNotNumber);
    }

    if candidate.weight.is_none() {
        violations.push(Violation::WeightNotNumber);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candidate_has_no_violations() {
        let candidate = Candidate::new("alice", "m", "18", "70.5", "180");
        assert!(check(&candidate).is_empty());
    }

    #[test]
    fn test_all_fields_are_checked() {
        let candidate = Candidate::new("", "X", "abc", "", "heavy");
        assert_eq!(
            check(&candidate),
            vec![
                Violation::EmptyName,
                Violation::IncorrectSex,
                Violation::AgeNotNumber,
                Violation::HeightNotNumber,
                Violation::WeightNotNumber,
            ]
        );
    }

    #[test]
    fn test_bad_sex_and_underage_both_reported() {
        let candidate = Candidate::new("alice", "X", "17", "65", "130");
        assert_eq!(
            check(&candidate),
            vec![Violation::IncorrectSex, Violation::AgeUnderaged]
        );
    }

    #[test]
    fn test_sex_must_be_single_letter() {
        let candidate = Candidate::new("alice", "female", "30", "65", "130");
        assert_eq!(check(&candidate), vec![Violation::IncorrectSex]);
    }

    #[test]
    fn test_fractional_age_is_not_a_number() {
        let candidate = Candidate::new("alice", "f", "30.5", "65", "130");
        assert_eq!(check(&candidate), vec![Violation::AgeNotNumber]);
    }

    #[test]
    fn test_negative_height_is_accepted() {
        let candidate = Candidate::new("alice", "f", "30", "-1", "0");
        assert!(check(&candidate).is_empty());
    }
}
