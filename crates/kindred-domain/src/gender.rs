//! Gender module - the two biological parent roles

use std::fmt;

/// Gender of a person
///
/// Mothers must be `Female` and fathers `Male`. Labeling treats a missing
/// gender (`None`) as unknown and falls back to neutral wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,
}

impl Gender {
    /// Get the gender tag as used in input files
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    /// Parse a gender tag, ignoring case (`MALE`, `female`, `M`, `f`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!(Gender::parse("MALE"), Some(Gender::Male));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse(" F "), Some(Gender::Female));
        assert_eq!(Gender::parse("m"), Some(Gender::Male));
        assert_eq!(Gender::parse("other"), None);
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "MALE");
        assert_eq!(Gender::Female.to_string(), "FEMALE");
    }
}
