use serde::{Deserialize, Serialize};

use crate::error::{DurationField, ValidationError};

pub const DEFAULT_STUDY_MINUTES: u64 = 25;
pub const DEFAULT_BREAK_MINUTES: u64 = 5;

/// Study and break lengths, in minutes. Both are always positive.
///
/// Deserialization goes through [`Durations::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDurations")]
pub struct Durations {
    study_min: u64,
    break_min: u64,
}

#[derive(Deserialize)]
struct RawDurations {
    study_min: u64,
    break_min: u64,
}

impl TryFrom<RawDurations> for Durations {
    type Error = ValidationError;

    fn try_from(raw: RawDurations) -> Result<Self, Self::Error> {
        Durations::new(raw.study_min, raw.break_min)
    }
}

impl Durations {
    /// # Errors
    ///
    /// [`ValidationError::InvalidDuration`] naming the first zero field.
    pub fn new(study_min: u64, break_min: u64) -> Result<Self, ValidationError> {
        check_positive(DurationField::Study, study_min, &study_min.to_string())?;
        check_positive(DurationField::Break, break_min, &break_min.to_string())?;
        Ok(Self {
            study_min,
            break_min,
        })
    }

    /// Parse the two minute fields as typed by the user.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidDuration`] naming the first invalid field.
    pub fn parse(study: &str, break_: &str) -> Result<Self, ValidationError> {
        let study_min = parse_minutes(DurationField::Study, study)?;
        let break_min = parse_minutes(DurationField::Break, break_)?;
        Ok(Self {
            study_min,
            break_min,
        })
    }

    pub fn study_min(&self) -> u64 {
        self.study_min
    }

    pub fn break_min(&self) -> u64 {
        self.break_min
    }

    /// Saturates instead of overflowing on absurd minute counts.
    pub fn study_secs(&self) -> u64 {
        self.study_min.saturating_mul(60)
    }

    pub fn break_secs(&self) -> u64 {
        self.break_min.saturating_mul(60)
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            study_min: DEFAULT_STUDY_MINUTES,
            break_min: DEFAULT_BREAK_MINUTES,
        }
    }
}

fn parse_minutes(field: DurationField, input: &str) -> Result<u64, ValidationError> {
    let value = input
        .trim()
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidDuration {
            field,
            input: input.to_string(),
        })?;
    check_positive(field, value, input)?;
    Ok(value)
}

fn check_positive(field: DurationField, value: u64, input: &str) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::InvalidDuration {
            field,
            input: input.to_string(),
        });
    }
    Ok(())
}
