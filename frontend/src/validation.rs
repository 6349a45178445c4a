use crate::errors::ValidationError;

/// Returns the trimmed value, or `Required` when nothing is left.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}

/// Parses a required, finite floating point field.
pub fn number(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let raw = required(field, value)?;
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}

/// A review rating, always within `[Rating::MIN, Rating::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Converts the raw text of the rating input.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let raw = required("Rating", value)?;
        match raw.parse::<i64>() {
            Ok(n) => Self::new(n),
            Err(_) if raw.parse::<f64>().is_ok() => Err(ValidationError::RatingNotInteger),
            Err(_) => Err(ValidationError::NotANumber { field: "Rating" }),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}
