//! Rewrites an expression into disjunctive normal form by distributing `AND` over `OR`.

use crate::expr::{CompoundExpr, Expr, Operator};

/// Rewrites `expr` so that no `AND` node has an `OR` anywhere beneath it — equivalently, the
/// result is an `OR` of `AND`-clauses (or a single clause/leaf). `WITH` nodes are treated as
/// opaque leaves: the exception never participates in the distribution.
pub fn dnf(expr: &Expr) -> Expr {
    match expr {
        Expr::License(_) | Expr::Ref(_) | Expr::With(_) => expr.clone(),
        Expr::Compound(c) => match c.op {
            Operator::Or => or_combine(dnf(&c.left), dnf(&c.right)),
            Operator::And => distribute_and(dnf(&c.left), dnf(&c.right)),
        },
    }
}

fn or_combine(l: Expr, r: Expr) -> Expr {
    l.compound(Operator::Or, r)
}

fn and_combine(l: Expr, r: Expr) -> Expr {
    l.compound(Operator::And, r)
}

/// Distributes `AND` over whichever of `l`/`r` is (still) an `OR`, checking `l` first. Both
/// arguments are assumed to already be in DNF themselves (no `AND`-over-`OR` left inside them),
/// which `dnf` guarantees by recursing before calling this.
fn distribute_and(l: Expr, r: Expr) -> Expr {
    if let Expr::Compound(CompoundExpr {
        op: Operator::Or,
        left,
        right,
    }) = l
    {
        return or_combine(distribute_and(*left, r.clone()), distribute_and(*right, r));
    }

    if let Expr::Compound(CompoundExpr {
        op: Operator::Or,
        left,
        right,
    }) = r
    {
        return or_combine(distribute_and(l.clone(), *left), distribute_and(l, *right));
    }

    and_combine(l, r)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::{LicenseId, license_with};

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
    fn distributes_and_over_left_or() {
        // (a OR b) AND c -> (a AND c) OR (b AND c)
        let expr = lic("a").compound(Operator::Or, lic("b")).compound(Operator::And, lic("c"));
        assert_eq!(dnf(&expr).render(), "a AND c OR b AND c");
    }

    #[test]
    fn distributes_and_over_right_or() {
        // a AND (b OR c) -> (a AND b) OR (a AND c)
        let expr = lic("a").compound(Operator::And, lic("b").compound(Operator::Or, lic("c")));
        assert_eq!(dnf(&expr).render(), "a AND b OR a AND c");
    }

    #[test]
    fn distributes_and_over_both_sides() {
        // (a OR b) AND (c OR d) -> ((a AND c) OR (a AND d)) OR ((b AND c) OR (b AND d))
        let expr = lic("a")
            .compound(Operator::Or, lic("b"))
            .compound(
                Operator::And,
                lic("c").compound(Operator::Or, lic("d")),
            );

        assert_eq!(
            dnf(&expr).render(),
            "a AND c OR a AND d OR b AND c OR b AND d"
        );
    }

    #[test]
    fn leaves_pure_and_or_or_unchanged() {
        let and_only = lic("a").compound(Operator::And, lic("b"));
        assert_eq!(dnf(&and_only).render(), "a AND b");

        let or_only = lic("a").compound(Operator::Or, lic("b"));
        assert_eq!(dnf(&or_only).render(), "a OR b");
    }

    #[test]
    fn treats_with_node_as_opaque_leaf() {
        let expr = with_exc("a", "exc")
            .compound(Operator::And, lic("b").compound(Operator::Or, lic("c")));
        assert_eq!(dnf(&expr).render(), "a WITH exc AND b OR a WITH exc AND c");
    }
}
