//! Rewrites deprecated identifiers to their current-catalog successors.
//!
//! `normalize` never fails and never changes the logical shape of the tree beyond a single
//! license leaf occasionally expanding into a `WITH` node (the combined-identifier case) — it
//! never reorders or drops operands.

use crate::catalog::Catalog;
use crate::expr::{CompoundExpr, Expr, LicenseId, WithException, license_with};

/// Rewrites every deprecated license/exception identifier in `expr` to its current successor.
/// Identifiers with no known successor, and `LicenseRef-*` identifiers, pass through unchanged.
pub fn normalize(expr: &Expr, catalog: &Catalog) -> Expr {
    match expr {
        Expr::License(lic) => normalize_license(lic, catalog),
        Expr::Ref(r) => Expr::Ref(r.clone()),
        Expr::With(w) => normalize_with(w, catalog),
        Expr::Compound(c) => Expr::Compound(CompoundExpr {
            op: c.op,
            left: Box::new(normalize(&c.left, catalog)),
            right: Box::new(normalize(&c.right, catalog)),
        }),
    }
}

/// Resolves `lic`'s successor without considering the combined `<license>-with-<exception>`
/// identifiers, since their successor is a `WITH` node, not another bare license — not a shape a
/// `WithException`'s own license field (or the recursive call from [`normalize_license`] after
/// that expansion) could ever need to produce again.
fn normalize_license_id(lic: &LicenseId, catalog: &Catalog) -> LicenseId {
    match catalog.license(&lic.id) {
        Some(entry) if entry.deprecated => {
            match catalog.license_successor(&lic.id, lic.or_later) {
                Some((id, or_later)) => LicenseId { id, or_later },
                // Known-deprecated but no mechanical or tabled successor (e.g. `eCos-2.0`): at
                // least correct the casing, since that's still unambiguous.
                None => LicenseId {
                    id: entry.id.to_owned(),
                    or_later: lic.or_later,
                },
            }
        }
        Some(entry) => LicenseId {
            id: entry.id.to_owned(),
            or_later: lic.or_later,
        },
        None => lic.clone(),
    }
}

fn normalize_license(lic: &LicenseId, catalog: &Catalog) -> Expr {
    // The combined `<license>-with-<exception>` identifiers predate the split into separate
    // license/exception lists; their successor is a `WITH` node, not another bare license.
    if let Some((lic_id, exc_id)) = catalog.combined_successor(&lic.id) {
        let id = LicenseId {
            id: lic_id.to_owned(),
            or_later: false,
        };
        return Expr::With(license_with(id, exc_id));
    }

    Expr::License(normalize_license_id(lic, catalog))
}

fn normalize_with(w: &WithException, catalog: &Catalog) -> Expr {
    let license = normalize_license_id(&w.license, catalog);

    let exception_id = match catalog.exception(&w.exception_id) {
        Some(entry) if entry.deprecated => catalog
            .exception_successor(&w.exception_id)
            .map(str::to_owned)
            .unwrap_or_else(|| entry.id.to_owned()),
        Some(entry) => entry.id.to_owned(),
        None => w.exception_id.clone(),
    };

    Expr::With(license_with(license, exception_id))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::Operator;

    #[test]
    fn corrects_case() {
        let cat = Catalog;
        let expr = Expr::license("mit", false);
        assert_eq!(normalize(&expr, &cat).render(), "MIT");
    }

    #[test]
    fn rewrites_gnu_family_bare_deprecated() {
        let cat = Catalog;
        assert_eq!(normalize(&Expr::license("GPL-2.0", false), &cat).render(), "GPL-2.0-only");
        assert_eq!(normalize(&Expr::license("GPL-2.0", true), &cat).render(), "GPL-2.0-or-later");
    }

    #[test]
    fn rewrites_combined_identifier_into_with_node() {
        let cat = Catalog;
        let expr = Expr::license("GPL-2.0-with-classpath-exception", false);
        assert_eq!(
            normalize(&expr, &cat).render(),
            "GPL-2.0-only WITH Classpath-exception-2.0"
        );
    }

    #[test]
    fn rewrites_deprecated_exception_in_with_node() {
        let cat = Catalog;
        let lic = LicenseId {
            id: "LGPL-2.1-only".to_owned(),
            or_later: false,
        };
        let expr = Expr::With(license_with(lic, "Nokia-Qt-exception-1.1"));
        assert_eq!(
            normalize(&expr, &cat).render(),
            "LGPL-2.1-only WITH Qt-LGPL-exception-1.1"
        );
    }

    #[test]
    fn leaves_unknown_successor_identifiers_alone_besides_casing() {
        let cat = Catalog;
        let expr = Expr::license("eCos-2.0", false);
        assert_eq!(normalize(&expr, &cat).render(), "eCos-2.0");
    }

    #[test]
    fn recurses_through_compound_nodes() {
        let cat = Catalog;
        let expr = Expr::license("gpl-2.0", false).compound(Operator::Or, Expr::license("mit", false));
        assert_eq!(normalize(&expr, &cat).render(), "GPL-2.0-only OR MIT");
    }

    #[test]
    fn license_refs_pass_through() {
        let cat = Catalog;
        let expr = Expr::license_ref(None::<String>, "Anything");
        assert_eq!(normalize(&expr, &cat).render(), "LicenseRef-Anything");
    }
}
