use tracing::debug;

use crate::error::{ParseError, Result};

use super::NumberFormat;

/// Parses exactly two numbers from a coordinate list such as `"(1.5, 2)"` or `"1.5,2"`.
///
/// The list separator and decimal separator come from `format`; with a `,`
/// decimal separator the coordinates are separated by `;` (`"(1,5; 2)"`).
/// Surrounding parentheses are optional but must be balanced.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text does not hold exactly two numbers.
pub fn parse_two(text: &str, format: NumberFormat) -> Result<(f64, f64)> {
    parse_two_inner(text, format).map_err(|err| {
        debug!(input = text, error = %err, "rejected coordinate text");
        err.into()
    })
}

fn parse_two_inner(
    text: &str,
    format: NumberFormat,
) -> std::result::Result<(f64, f64), ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let body = match (trimmed.strip_prefix('('), trimmed.ends_with(')')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        _ => return Err(ParseError::UnbalancedParenthesis(text.to_owned())),
    };
    if body.contains(['(', ')']) {
        return Err(ParseError::UnbalancedParenthesis(text.to_owned()));
    }

    let tokens: Vec<&str> = body.split(format.list_separator()).map(str::trim).collect();
    if tokens.len() != 2 || tokens.iter().any(|t| t.is_empty()) {
        let found = tokens.iter().filter(|t| !t.is_empty()).count();
        return Err(ParseError::CoordinateCount {
            input: text.to_owned(),
            found,
        });
    }

    let number = |token: &str| {
        format
            .parse_number(token)
            .ok_or_else(|| ParseError::InvalidNumber {
                input: text.to_owned(),
                token: token.to_owned(),
            })
    };
    Ok((number(tokens[0])?, number(tokens[1])?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanarError;

    fn invariant(text: &str) -> Result<(f64, f64)> {
        parse_two(text, NumberFormat::invariant())
    }

    fn parse_error(result: Result<(f64, f64)>) -> ParseError {
        match result {
            Err(PlanarError::Parse(err)) => err,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parenthesized() {
        assert_eq!(invariant("(1.5, -2)").unwrap(), (1.5, -2.0));
    }

    #[test]
    fn bare_comma_list() {
        assert_eq!(invariant("3,4").unwrap(), (3.0, 4.0));
        assert_eq!(invariant("  3 ,\t4  ").unwrap(), (3.0, 4.0));
    }

    #[test]
    fn comma_decimal_uses_semicolon() {
        let nf = NumberFormat::with_decimal_separator(',');
        assert_eq!(parse_two("(1,5; -2,25)", nf).unwrap(), (1.5, -2.25));
    }

    #[test]
    fn special_values() {
        let (x, y) = invariant("(inf, NaN)").unwrap();
        assert!(x.is_infinite() && x > 0.0);
        assert!(y.is_nan());
    }

    #[test]
    fn empty_text() {
        assert_eq!(parse_error(invariant("   ")), ParseError::Empty);
    }

    #[test]
    fn unbalanced_parenthesis() {
        assert!(matches!(
            parse_error(invariant("(1, 2")),
            ParseError::UnbalancedParenthesis(_)
        ));
        assert!(matches!(
            parse_error(invariant("1, 2)")),
            ParseError::UnbalancedParenthesis(_)
        ));
        assert!(matches!(
            parse_error(invariant("((1, 2))")),
            ParseError::UnbalancedParenthesis(_)
        ));
    }

    #[test]
    fn wrong_coordinate_count() {
        assert!(matches!(
            parse_error(invariant("(1, 2, 3)")),
            ParseError::CoordinateCount { found: 3, .. }
        ));
        assert!(matches!(
            parse_error(invariant("(1)")),
            ParseError::CoordinateCount { found: 1, .. }
        ));
        assert!(matches!(
            parse_error(invariant("1,")),
            ParseError::CoordinateCount { found: 1, .. }
        ));
    }

    #[test]
    fn invalid_number() {
        let err = parse_error(invariant("(1, two)"));
        assert!(matches!(err, ParseError::InvalidNumber { ref token, .. } if token == "two"));
    }

    #[test]
    fn invariant_rejects_comma_decimal_with_semicolon() {
        assert!(invariant("(1,5; 2)").is_err());
    }
}
