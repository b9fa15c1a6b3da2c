use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::config::DEFAULT_COLOR_COUNT;
use crate::error::ColorCountError;

/// Requested palette size `K`, always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorCount(NonZeroUsize);

impl ColorCount {
    pub fn new(count: usize) -> Result<Self, ColorCountError> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(ColorCountError::Zero)
    }

    /// Reads an optional form-style field, falling back to the default when
    /// it is absent or blank.
    pub fn from_field(field: Option<&str>) -> Result<Self, ColorCountError> {
        match field.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ColorCount {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_COLOR_COUNT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl FromStr for ColorCount {
    type Err = ColorCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s
            .trim()
            .parse::<usize>()
            .map_err(|_| ColorCountError::NotANumber(s.to_string()))?;
        Self::new(count)
    }
}

impl std::fmt::Display for ColorCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_field_uses_default() {
        assert_eq!(ColorCount::from_field(None).unwrap().get(), 9);
        assert_eq!(ColorCount::from_field(Some("  ")).unwrap().get(), 9);
    }

    #[test]
    fn parses_numeric_field() {
        assert_eq!(ColorCount::from_field(Some("5")).unwrap().get(), 5);
        assert_eq!("12".parse::<ColorCount>().unwrap().get(), 12);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(ColorCount::new(0), Err(ColorCountError::Zero));
        assert_eq!(ColorCount::from_field(Some("0")), Err(ColorCountError::Zero));
    }

    #[test]
    fn rejects_non_numeric_and_negative() {
        assert_eq!(
            "many".parse::<ColorCount>(),
            Err(ColorCountError::NotANumber("many".to_string()))
        );
        assert!(matches!(
            "-3".parse::<ColorCount>(),
            Err(ColorCountError::NotANumber(_))
        ));
    }
}
