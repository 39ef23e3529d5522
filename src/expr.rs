//! The expression tree and its canonical printer.
//!
//! This is a plain tagged AST rather than a flat evaluation-oriented form: the engine here never
//! evaluates an expression against a license set, it only parses, validates, rewrites and
//! re-prints one, so a tree that mirrors the grammar directly is the simpler fit.

use std::fmt;

/// A bare SPDX license identifier, optionally suffixed with `+` ("or later")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseId {
    /// The canonical-cased identifier, e.g. `"Apache-2.0"`
    pub id: String,
    /// Whether the identifier carried a trailing `+`
    pub or_later: bool,
}

impl fmt::Display for LicenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)?;
        if self.or_later {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// A `LicenseRef-*` or `DocumentRef-*:LicenseRef-*` identifier naming a license outside the SPDX
/// catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseRef {
    /// The `DocumentRef-*` component, if the reference points into another SPDX document
    pub doc_ref: Option<String>,
    /// The `LicenseRef-*` component
    pub lic_ref: String,
}

impl fmt::Display for LicenseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(doc_ref) = &self.doc_ref {
            write!(f, "DocumentRef-{doc_ref}:")?;
        }
        write!(f, "LicenseRef-{}", self.lic_ref)
    }
}

/// A license combined with an exception via `WITH`.
///
/// The left operand is a bare [`LicenseId`], never a [`LicenseRef`] or a compound expression —
/// this is a grammar invariant, enforced by construction: the only way to build one is
/// [`license_with`], which takes a `LicenseId` by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WithException {
    /// The license side of the `WITH`
    pub license: LicenseId,
    /// The exception identifier
    pub exception_id: String,
}

/// Builds a `WITH` node combining `id` and `exception_id`.
///
/// This is the only way to construct a [`WithException`], so the grammar invariant that `WITH`'s
/// left operand is a bare license id (never a `LicenseRef` or a compound expression) holds by
/// construction rather than by a runtime check.
pub fn license_with(id: LicenseId, exception_id: impl Into<String>) -> WithException {
    WithException {
        license: id,
        exception_id: exception_id.into(),
    }
}

/// The boolean operator joining the two sides of a [`Expr::Compound`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::And => "AND",
            Self::Or => "OR",
        })
    }
}

/// A boolean combination of two subexpressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundExpr {
    /// The operator joining `left` and `right`
    pub op: Operator,
    /// The left operand
    pub left: Box<Expr>,
    /// The right operand
    pub right: Box<Expr>,
}

/// An SPDX license expression tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A bare SPDX license identifier
    License(LicenseId),
    /// A `LicenseRef-*` identifier
    Ref(LicenseRef),
    /// A license combined with an exception
    With(WithException),
    /// A boolean `AND`/`OR` combination of two subexpressions
    Compound(CompoundExpr),
}

impl Expr {
    /// Builds a bare license node
    pub fn license(id: impl Into<String>, or_later: bool) -> Self {
        Self::License(LicenseId {
            id: id.into(),
            or_later,
        })
    }

    /// Builds a `LicenseRef` node
    pub fn license_ref(doc_ref: Option<impl Into<String>>, lic_ref: impl Into<String>) -> Self {
        Self::Ref(LicenseRef {
            doc_ref: doc_ref.map(Into::into),
            lic_ref: lic_ref.into(),
        })
    }

    /// Builds an `AND`/`OR` node joining `self` and `rhs`
    pub fn compound(self, op: Operator, rhs: Expr) -> Self {
        Self::Compound(CompoundExpr {
            op,
            left: Box::new(self),
            right: Box::new(rhs),
        })
    }

    /// Renders the expression to its canonical SPDX string form.
    ///
    /// Parentheses are only emitted where the grammar requires them to preserve meaning: around
    /// an `OR` subtree nested inside an `AND`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_into(self, &mut out, None);
        out
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Renders `expr` into `out`, parenthesizing it if it's a `Compound` whose operator binds looser
/// than `parent_op` (i.e. an `OR` directly under an `AND`).
fn render_into(expr: &Expr, out: &mut String, parent_op: Option<Operator>) {
    match expr {
        Expr::License(lic) => out.push_str(&lic.to_string()),
        Expr::Ref(r) => out.push_str(&r.to_string()),
        Expr::With(w) => {
            out.push_str(&w.license.to_string());
            out.push_str(" WITH ");
            out.push_str(&w.exception_id);
        }
        Expr::Compound(c) => {
            let needs_parens = matches!(
                (parent_op, c.op),
                (Some(Operator::And), Operator::Or)
            );

            if needs_parens {
                out.push('(');
            }

            render_chain(expr, c.op, out);

            if needs_parens {
                out.push(')');
            }
        }
    }
}

/// Renders a maximal chain of same-operator `Compound` nodes flat, e.g. `A AND (B AND C)` as
/// `A AND B AND C` rather than re-parenthesizing the associative regrouping.
fn render_chain(expr: &Expr, chain_op: Operator, out: &mut String) {
    match expr {
        Expr::Compound(c) if c.op == chain_op => {
            render_chain(&c.left, chain_op, out);
            out.push_str(" ");
            out.push_str(&chain_op.to_string());
            out.push_str(" ");
            render_chain(&c.right, chain_op, out);
        }
        other => render_into(other, out, Some(chain_op)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lic(id: &str) -> Expr {
        Expr::license(id, false)
    }

    fn with_exc(id: &str, exception_id: &str) -> Expr {
        Expr::With(license_with(
            LicenseId {
                id: id.to_owned(),
                or_later: false,
            },
            exception_id,
        ))
    }

    #[test]
    fn renders_bare_license() {
        assert_eq!(lic("MIT").render(), "MIT");
    }

    #[test]
    fn renders_or_later() {
        assert_eq!(Expr::license("GPL-2.0-only", true).render(), "GPL-2.0-only+");
    }

    #[test]
    fn renders_with_exception() {
        let e = with_exc("GPL-2.0-or-later", "Classpath-exception-2.0");
        assert_eq!(e.render(), "GPL-2.0-or-later WITH Classpath-exception-2.0");
    }

    #[test]
    fn flattens_associative_chains_regardless_of_source_grouping() {
        let left_leaning = lic("license1")
            .compound(Operator::And, lic("license2"))
            .compound(Operator::And, lic("license3"));

        let right_leaning = lic("license1").compound(
            Operator::And,
            lic("license2").compound(Operator::And, lic("license3")),
        );

        assert_eq!(left_leaning.render(), "license1 AND license2 AND license3");
        assert_eq!(right_leaning.render(), "license1 AND license2 AND license3");
    }

    #[test]
    fn parenthesizes_or_nested_in_and_but_not_the_reverse() {
        let or_in_and = lic("license1").compound(
            Operator::And,
            lic("license2").compound(Operator::Or, lic("license3")),
        );
        assert_eq!(or_in_and.render(), "license1 AND (license2 OR license3)");

        let and_in_or = lic("license1").compound(
            Operator::Or,
            lic("license2").compound(Operator::And, lic("license3")),
        );
        assert_eq!(and_in_or.render(), "license1 OR license2 AND license3");
    }

    #[test]
    fn reproduces_worked_example() {
        // (license1 AND (license2 AND license3) AND (license4 OR (license5 WITH exception)))
        let expr = lic("license1")
            .compound(Operator::And, lic("license2").compound(Operator::And, lic("license3")))
            .compound(
                Operator::And,
                lic("license4").compound(Operator::Or, with_exc("license5", "exception")),
            );

        assert_eq!(
            expr.render(),
            "license1 AND license2 AND license3 AND (license4 OR license5 WITH exception)"
        );
    }
}
