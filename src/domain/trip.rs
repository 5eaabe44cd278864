//! Trip request domain model.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Notice shown when the destination city is left blank.
pub const EMPTY_CITY_NOTICE: &str = "Preencha o nome da cidade!";

/// Title of the validation notice.
pub const NOTICE_TITLE: &str = "Atenção";

/// Length of stay in days, bounded to `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripDays(u32);

impl TripDays {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 7;
    pub const DEFAULT: TripDays = TripDays(3);

    pub fn new(days: u32) -> Result<Self, AppError> {
        if (Self::MIN..=Self::MAX).contains(&days) {
            Ok(Self(days))
        } else {
            Err(AppError::InvalidDays(days))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Every accepted value in ascending order.
    pub fn all() -> impl Iterator<Item = TripDays> {
        (Self::MIN..=Self::MAX).map(TripDays)
    }
}

impl Default for TripDays {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TripDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TripDays {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s.trim().parse::<u32>().map_err(|_| {
            AppError::Validation(format!("Invalid day count '{}': expected a whole number", s))
        })?;
        Self::new(days)
    }
}

/// A destination and stay length ready to be turned into a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    city: String,
    days: TripDays,
}

impl TripRequest {
    /// Build a request from raw user input.
    ///
    /// The city is trimmed of surrounding whitespace but otherwise kept verbatim.
    /// Blank input yields [`AppError::Validation`] carrying [`EMPTY_CITY_NOTICE`].
    pub fn new(city: &str, days: TripDays) -> Result<Self, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::Validation(EMPTY_CITY_NOTICE.to_string()));
        }
        Ok(Self { city: city.to_string(), days })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn days(&self) -> TripDays {
        self.days
    }
}
