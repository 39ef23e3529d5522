//! A parser, validator and algebraic rewriter for [SPDX license expressions][spdx-spec].
//!
//! This crate does not interpret license text, fetch licenses, or compute compatibility between
//! them — it only understands the *expression grammar* SPDX uses to combine license and exception
//! identifiers (`MIT OR Apache-2.0`, `GPL-2.0-or-later WITH Classpath-exception-2.0`, and so on),
//! and the pure, total operations the SPDX spec defines over it.
//!
//! ```
//! use spdx_expression::{parse, Strictness};
//!
//! let expr = parse("MIT OR Apache-2.0", Strictness::AllowCurrent).unwrap();
//! assert_eq!(expr.render(), "MIT OR Apache-2.0");
//! ```
//!
//! [spdx-spec]: https://spdx.github.io/spdx-spec/

mod catalog;
mod decompose;
mod dnf;
/// Error types returned by [`parse`] and the other fallible operations in this crate
pub mod error;
mod expr;
/// Auto-generated lists of SPDX license identifiers and exception identifiers
mod identifiers;
/// Tokenizes a license expression for [`parser`]
mod lexer;
mod normalize;
mod parser;
mod validate;

pub use catalog::{Catalog, Exception, License, license_list_version};
pub use decompose::{Operands, decompose};
pub use dnf::dnf;
pub use error::ExpressionError;
pub use expr::{CompoundExpr, Expr, LicenseId, LicenseRef, Operator, WithException, license_with};
pub use normalize::normalize;
pub use validate::{Strictness, validate};

use std::str::FromStr;

/// Parses `text` as an SPDX license expression and validates every identifier in it against the
/// built-in [`Catalog`] under `strictness`.
///
/// This is the entry point most callers want; [`Expr::render`], [`normalize`], [`decompose`] and
/// [`dnf`] all operate on the tree it returns.
///
/// # Errors
///
/// Returns [`ExpressionError::Syntax`] if `text` is not a well-formed expression, or
/// [`ExpressionError::Validation`] if it's well-formed but an identifier in it is rejected by
/// `strictness`.
///
/// ```
/// use spdx_expression::{parse, ExpressionError, Strictness};
///
/// assert!(parse("MIT AND Apache-2.0", Strictness::AllowCurrent).is_ok());
///
/// match parse("GPL-2.0", Strictness::AllowCurrent).unwrap_err() {
///     ExpressionError::Validation(e) => assert_eq!(e.id, "GPL-2.0"),
///     ExpressionError::Syntax(_) => panic!("expected a validation error"),
/// }
/// ```
pub fn parse(text: &str, strictness: Strictness) -> Result<Expr, ExpressionError> {
    let expr = parser::Parser::new(text)?.parse()?;
    validate::validate(&expr, &Catalog, strictness)?;
    Ok(expr)
}

impl FromStr for Expr {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, Strictness::AllowAny)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_rejects_deprecated_under_allow_current() {
        let err = parse("GPL-2.0", Strictness::AllowCurrent).unwrap_err();
        assert!(matches!(err, ExpressionError::Validation(_)));
    }

    #[test]
    fn parse_accepts_deprecated_under_allow_deprecated() {
        assert!(parse("GPL-2.0", Strictness::AllowDeprecated).is_ok());
    }

    #[test]
    fn round_trips_through_from_str_and_display() {
        let expr: Expr = "MIT OR Apache-2.0".parse().unwrap();
        assert_eq!(expr.to_string(), "MIT OR Apache-2.0");
    }

    #[test]
    fn end_to_end_normalize_then_render() {
        let expr = parse("GPL-2.0-with-classpath-exception", Strictness::AllowDeprecated).unwrap();
        let normalized = normalize(&expr, &Catalog);
        assert_eq!(
            normalized.render(),
            "GPL-2.0-only WITH Classpath-exception-2.0"
        );
    }
}
