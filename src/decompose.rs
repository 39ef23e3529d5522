//! Splits an expression into its top-level `AND`/`OR` operands.

use crate::expr::{Expr, Operator};
use smallvec::SmallVec;

/// Most expressions decompose into a handful of operands, so the result is a `SmallVec` to avoid
/// heap allocation in the common case.
pub type Operands = SmallVec<[Expr; 4]>;

/// Splits `expr` into the flat list of subexpressions joined by `AND`/`OR` at any nesting depth,
/// never splitting across a `WITH`. Duplicate subexpressions (compared by their rendered form)
/// are removed, keeping the first occurrence; a leaf with no `AND`/`OR` at all is returned as a
/// single-element vector.
pub fn decompose(expr: &Expr) -> Operands {
    let mut out = Operands::new();
    let mut seen = std::collections::HashSet::new();
    collect(expr, &mut out, &mut seen);
    out
}

fn collect(expr: &Expr, out: &mut Operands, seen: &mut std::collections::HashSet<String>) {
    match expr {
        Expr::Compound(c) if matches!(c.op, Operator::And | Operator::Or) => {
            collect(&c.left, out, seen);
            collect(&c.right, out, seen);
        }
        other => {
            let rendered = other.render();
            if seen.insert(rendered) {
                out.push(other.clone());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::{LicenseId, license_with};

    fn render_all(exprs: &[Expr]) -> Vec<String> {
        exprs.iter().map(Expr::render).collect()
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
    fn splits_on_and() {
        let expr = Expr::license("MIT", false).compound(Operator::And, Expr::license("Apache-2.0", false));
        assert_eq!(render_all(&decompose(&expr)), vec!["MIT", "Apache-2.0"]);
    }

    #[test]
    fn splits_on_or_and_nested_mixes() {
        let expr = Expr::license("MIT", false)
            .compound(Operator::Or, Expr::license("Apache-2.0", false))
            .compound(Operator::And, Expr::license("0BSD", false));

        assert_eq!(render_all(&decompose(&expr)), vec!["MIT", "Apache-2.0", "0BSD"]);
    }

    #[test]
    fn does_not_split_across_with() {
        let expr = with_exc("GPL-2.0-or-later", "Classpath-exception-2.0");
        assert_eq!(
            render_all(&decompose(&expr)),
            vec!["GPL-2.0-or-later WITH Classpath-exception-2.0"]
        );
    }

    #[test]
    fn deduplicates_by_rendered_form_keeping_first() {
        let expr = Expr::license("MIT", false)
            .compound(Operator::Or, Expr::license("MIT", false))
            .compound(Operator::And, Expr::license("Apache-2.0", false));

        assert_eq!(render_all(&decompose(&expr)), vec!["MIT", "Apache-2.0"]);
    }

    #[test]
    fn single_leaf_returns_one_element() {
        let expr = Expr::license("MIT", false);
        assert_eq!(render_all(&decompose(&expr)), vec!["MIT"]);
    }
}
