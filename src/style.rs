//! Style length types.

use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
};

use crate::{
    style::error::{LengthUnitError, StyleLengthError},
    utils::extract_suffix,
};

/// Every character occurring in a length unit term.
const UNIT_CHARS: &str = "acehimnprtvwx%";

/// A CSS length unit term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Cm,
    Mm,
    In,
    Px,
    Pt,
    Pc,
    Em,
    Ex,
    Ch,
    Rem,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Percent,
}

impl LengthUnit {
    /// Whether this is one of the absolute units (`cm mm in px pt pc`).
    pub fn is_absolute(&self) -> bool {
        matches!(
            self,
            Self::Cm | Self::Mm | Self::In | Self::Px | Self::Pt | Self::Pc
        )
    }

    /// Whether this is one of the relative units (`em ex ch rem vw vh vmin
    /// vmax %`).
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Px => "px",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Ch => "ch",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Percent => "%",
        }
    }
}

impl TryFrom<&str> for LengthUnit {
    type Error = LengthUnitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(match value {
            "cm" => Self::Cm,
            "mm" => Self::Mm,
            "in" => Self::In,
            "px" => Self::Px,
            "pt" => Self::Pt,
            "pc" => Self::Pc,
            "em" => Self::Em,
            "ex" => Self::Ex,
            "ch" => Self::Ch,
            "rem" => Self::Rem,
            "vw" => Self::Vw,
            "vh" => Self::Vh,
            "vmin" => Self::Vmin,
            "vmax" => Self::Vmax,
            "%" => Self::Percent,
            _ => {
                return Err(LengthUnitError::Unknown {
                    got: value.to_owned(),
                })
            }
        })
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A length in CSS terms, e.g., `1.5rem` or `100%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleLength {
    pub value: f64,
    pub unit: LengthUnit,
}

impl TryFrom<&str> for StyleLength {
    type Error = StyleLengthError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let unit = extract_suffix(value, UNIT_CHARS);

        if unit.is_empty() {
            return Err(StyleLengthError::MissingUnit);
        }

        let number = &value[..value.len() - unit.len()];
        let parsed = number
            .parse::<f64>()
            .map_err(|_| StyleLengthError::InvalidNumber {
                got: number.to_owned(),
            })?;

        Ok(Self {
            value: parsed,
            unit: LengthUnit::try_from(unit)?,
        })
    }
}

impl Display for StyleLength {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Defaults a bare number to pixels.
///
/// Returns `value` unchanged unless it parses as a number, in which case
/// `px` is appended.
pub fn unitized(value: &str) -> Cow<'_, str> {
    if value.chars().any(|c| c.is_ascii_digit()) {
        if let Ok(number) = value.parse::<f64>() {
            return Cow::Owned(format!("{number}px"));
        }
    }

    Cow::Borrowed(value)
}

/// Error-related types.
pub mod error {
    use thiserror::Error;

    #[derive(Clone, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
    pub enum LengthUnitError {
        #[error("Unknown length unit {got:?}")]
        Unknown { got: String },
    }

    #[derive(Clone, Debug, Error, PartialEq)]
    pub enum StyleLengthError {
        #[error("Missing length unit")]
        MissingUnit,
        #[error("Invalid number {got:?}")]
        InvalidNumber { got: String },
        #[error(transparent)]
        Unit(#[from] LengthUnitError),
    }
}
