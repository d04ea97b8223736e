use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("{0:?} is not a year")]
    NotAYear(String),

    #[error("birth year {birth_year} is after {current_year}")]
    FutureBirthYear { birth_year: i32, current_year: i32 },

    #[error("birth year {birth_year} is more than {max} years before {current_year}", max = MAX_AGE)]
    TooLongAgo { birth_year: i32, current_year: i32 },
}

/// Oldest age a profile accepts.
pub const MAX_AGE: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStage {
    Child,
    Teenager,
    Adult,
}

impl LifeStage {
    pub fn from_age(age: i32) -> Self {
        match age {
            0..=12 => LifeStage::Child,
            13..=19 => LifeStage::Teenager,
            _ => LifeStage::Adult,
        }
    }
}

impl Display for LifeStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LifeStage::Child => "Child",
            LifeStage::Teenager => "Teenager",
            LifeStage::Adult => "Adult",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: i32,
    pub stage: LifeStage,
    pub hobbies: Vec<String>,
}

impl Profile {
    /// Builds a profile, deriving the age from the birth year.
    pub fn new(name: &str, birth_year: i32, current_year: i32, hobbies: Vec<String>) -> Self {
        let age = current_year.saturating_sub(birth_year);
        Profile {
            name: name.to_string(),
            age,
            stage: LifeStage::from_age(age),
            hobbies,
        }
    }
}

/// Parses a birth year, refusing future years and ages above [`MAX_AGE`].
pub fn parse_birth_year(input: &str, current_year: i32) -> Result<i32, ProfileError> {
    let input = input.trim();
    let birth_year: i32 = input.parse().map_err(|_| ProfileError::NotAYear(input.to_string()))?;

    if birth_year > current_year {
        return Err(ProfileError::FutureBirthYear {
            birth_year,
            current_year,
        });
    }

    if current_year.checked_sub(birth_year).map_or(true, |age| age > MAX_AGE) {
        return Err(ProfileError::TooLongAgo {
            birth_year,
            current_year,
        });
    }

    Ok(birth_year)
}

/// `stop` in any letter case ends hobby entry.
pub fn is_stop_sentinel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("stop")
}
