use std::str::FromStr;

use crate::error::ParseError;

/// Number formatting convention used when rendering or parsing coordinates.
///
/// Passed explicitly instead of read from ambient locale state. The default
/// is the invariant convention (`.` decimal separator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_separator: char,
}

impl NumberFormat {
    /// The culture-invariant convention.
    #[must_use]
    pub const fn invariant() -> Self {
        Self {
            decimal_separator: '.',
        }
    }

    /// A convention with a custom decimal separator (e.g. `,` for most of Europe).
    #[must_use]
    pub const fn with_decimal_separator(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    #[must_use]
    pub fn decimal_separator(self) -> char {
        self.decimal_separator
    }

    /// Returns the separator placed between coordinates.
    ///
    /// Switches to `;` when `,` is the decimal separator so the two never collide.
    #[must_use]
    pub fn list_separator(self) -> char {
        if self.decimal_separator == ',' {
            ';'
        } else {
            ','
        }
    }

    /// Renders a single number under this convention.
    ///
    /// Precisions above [`MAX_PRECISION`] are clamped to it.
    #[must_use]
    pub fn format_number(self, value: f64, format: NumericFormat) -> String {
        let out = match format {
            NumericFormat::RoundTrip => format!("{value}"),
            NumericFormat::Fixed(precision) => {
                let precision = precision.min(MAX_PRECISION);
                format!("{value:.precision$}")
            }
            NumericFormat::Exponential(precision) => {
                let precision = precision.min(MAX_PRECISION);
                format!("{value:.precision$e}")
            }
        };
        if self.decimal_separator == '.' {
            out
        } else {
            out.replace('.', &self.decimal_separator.to_string())
        }
    }

    /// Parses a single number written under this convention.
    ///
    /// Returns `None` if the token is not a number.
    #[must_use]
    pub fn parse_number(self, token: &str) -> Option<f64> {
        let token = token.trim();
        if self.decimal_separator == '.' {
            return token.parse().ok();
        }
        if token.contains('.') {
            return None;
        }
        token
            .replace(self.decimal_separator, ".")
            .parse()
            .ok()
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

/// Numeric format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericFormat {
    /// Shortest representation that parses back to the same value.
    /// Never uses exponent notation.
    #[default]
    RoundTrip,
    /// Fixed-point with the given number of fractional digits.
    Fixed(usize),
    /// Scientific notation with the given number of fractional digits.
    Exponential(usize),
}

const DEFAULT_PRECISION: usize = 6;

/// Largest number of fractional digits a [`NumericFormat`] renders.
pub const MAX_PRECISION: usize = 99;

impl FromStr for NumericFormat {
    type Err = ParseError;

    /// Accepts `R`, `F<n>` and `E<n>` (case-insensitive, `n <= MAX_PRECISION`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let Some(kind) = chars.next() else {
            return Err(ParseError::Empty);
        };
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            DEFAULT_PRECISION
        } else {
            digits
                .parse::<usize>()
                .ok()
                .filter(|&p| p <= MAX_PRECISION)
                .ok_or_else(|| ParseError::InvalidNumber {
                    input: s.to_owned(),
                    token: digits.to_owned(),
                })?
        };
        match kind.to_ascii_uppercase() {
            'R' if digits.is_empty() => Ok(Self::RoundTrip),
            'F' => Ok(Self::Fixed(precision)),
            'E' => Ok(Self::Exponential(precision)),
            _ => Err(ParseError::InvalidNumber {
                input: s.to_owned(),
                token: kind.to_string(),
            }),
        }
    }
}
