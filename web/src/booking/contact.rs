use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Dialling codes offered by the booking form's phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountryCode {
    #[default]
    India,
    UnitedStates,
    UnitedKingdom,
}

impl CountryCode {
    pub const ALL: [CountryCode; 3] = [
        CountryCode::India,
        CountryCode::UnitedStates,
        CountryCode::UnitedKingdom,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            CountryCode::India => "+91",
            CountryCode::UnitedStates => "+1",
            CountryCode::UnitedKingdom => "+44",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown dialling code: {0}")]
pub struct ParseCountryCodeError(String);

impl FromStr for CountryCode {
    type Err = ParseCountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+91" => Ok(CountryCode::India),
            "+1" => Ok(CountryCode::UnitedStates),
            "+44" => Ok(CountryCode::UnitedKingdom),
            other => Err(ParseCountryCodeError(other.to_string())),
        }
    }
}

/// Contact fields from the booking form. Held only while the dialog is
/// open; never validated, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country_code: CountryCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialling_codes_round_trip() {
        for code in CountryCode::ALL {
            assert_eq!(code.prefix().parse::<CountryCode>(), Ok(code));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("+49".parse::<CountryCode>().is_err());
        assert!("".parse::<CountryCode>().is_err());
    }

    #[test]
    fn default_code_matches_the_listing_market() {
        assert_eq!(CountryCode::default().prefix(), "+91");
    }
}
