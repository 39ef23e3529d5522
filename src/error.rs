//! Error types returned by [`crate::parse`] and the other fallible operations in this crate.

use crate::Strictness;
use std::{error::Error as StdError, fmt, ops::Range};

/// Malformed input: a bad character, unbalanced parens, a misplaced operator, an empty
/// expression, or `WITH` applied to something other than a bare license identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// The full text that was being parsed
    pub original: String,
    /// The byte range of the offending lexeme
    pub span: Range<usize>,
    /// Why the lexeme was rejected
    pub reason: Reason,
}

/// The specific reason a [`SyntaxError`] was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// A character outside the identifier/operator/paren character class was found
    InvalidCharacters,
    /// An opening parens was unmatched with a closing parens
    UnclosedParens,
    /// A closing parens was unmatched with an opening parens
    UnopenedParens,
    /// The expression does not contain any valid terms
    Empty,
    /// Found an unexpected term, which wasn't one of the expected terms listed
    Unexpected(&'static [&'static str]),
    /// A `+` was found after whitespace, which is not allowed by the SPDX spec
    SeparatedPlus,
    /// `WITH`'s left operand was a compound expression or a `LicenseRef` instead of a bare
    /// license id
    WithRequiresLicenseId,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacters => f.write_str("invalid character(s)"),
            Self::UnclosedParens => f.write_str("unclosed parens"),
            Self::UnopenedParens => f.write_str("unopened parens"),
            Self::Empty => f.write_str("empty expression"),
            Self::Unexpected(expected) => {
                if expected.len() > 1 {
                    f.write_str("expected one of ")?;

                    for (i, exp) in expected.iter().enumerate() {
                        write!(f, "{}`{exp}`", if i > 0 { ", " } else { "" })?;
                    }
                    f.write_str(" here")
                } else if !expected.is_empty() {
                    write!(f, "expected a `{}` here", expected[0])
                } else {
                    f.write_str("the term was not expected here")
                }
            }
            Self::SeparatedPlus => f.write_str("`+` must not follow whitespace"),
            Self::WithRequiresLicenseId => f.write_str("`WITH` requires a single license identifier"),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)?;
        f.write_str("\n")?;

        for _ in 0..self.span.start {
            f.write_str(" ")?;
        }

        match &self.reason {
            Reason::UnclosedParens => write!(f, "- {}", Reason::UnclosedParens),
            Reason::UnopenedParens => write!(f, "^ {}", Reason::UnopenedParens),
            other => {
                for _ in self.span.start..self.span.end.max(self.span.start + 1) {
                    f.write_str("^")?;
                }

                write!(f, " {other}")
            }
        }
    }
}

impl StdError for SyntaxError {}

/// Well-formed syntax, but an identifier violated the active [`Strictness`] policy.
///
/// Unlike [`SyntaxError`], this carries no byte span: the tree [`crate::validate::validate`]
/// walks may have been built directly (not parsed from text), or rewritten by [`crate::normalize`]
/// or [`crate::dnf`], so there is no single original source string a position could point into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The identifier (license or exception) that was rejected
    pub id: String,
    /// The policy that rejected it
    pub strictness: Strictness,
    /// Why the policy rejected it
    pub reason: ValidationReason,
}

/// The specific reason a [`ValidationError`] was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// The identifier is not present in the catalog at all
    Unknown,
    /// The identifier is present in the catalog, but marked deprecated
    Deprecated,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown identifier"),
            Self::Deprecated => f.write_str("deprecated identifier"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` rejected by {:?}: {}",
            self.id, self.strictness, self.reason
        )
    }
}

impl StdError for ValidationError {}

/// The union of everything [`crate::parse`] can fail with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// The text could not be lexed/parsed into a well-formed tree
    Syntax(SyntaxError),
    /// The tree was well-formed but failed catalog validation
    Validation(ValidationError),
}

impl From<SyntaxError> for ExpressionError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<ValidationError> for ExpressionError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => e.fmt(f),
            Self::Validation(e) => e.fmt(f),
        }
    }
}

impl StdError for ExpressionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Validation(e) => Some(e),
        }
    }
}
