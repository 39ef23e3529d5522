//! Catalog validation against a configurable [`Strictness`] policy.

use crate::catalog::Catalog;
use crate::error::{ValidationError, ValidationReason};
use crate::expr::Expr;

/// How strictly [`crate::parse`] checks license/exception identifiers against the catalog.
///
/// `LicenseRef-*`/`DocumentRef-*:LicenseRef-*` identifiers are always accepted regardless of
/// strictness, since by definition they name licenses outside the SPDX catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Accept any syntactically valid identifier, known to the catalog or not
    AllowAny,
    /// Accept any identifier known to the catalog, including deprecated ones
    AllowDeprecated,
    /// Accept only identifiers known to the catalog that are not deprecated
    AllowCurrent,
}

/// Walks every `LicenseId` and `WithException::exception_id` leaf in `expr`, checking each
/// against `catalog` under `strictness`. Returns the first violation found, walking left-to-right,
/// depth-first.
pub fn validate(expr: &Expr, catalog: &Catalog, strictness: Strictness) -> Result<(), ValidationError> {
    match expr {
        Expr::License(lic) => check_license(&lic.id, catalog, strictness),
        Expr::Ref(_) => Ok(()),
        Expr::With(w) => {
            check_license(&w.license.id, catalog, strictness)?;
            check_exception(&w.exception_id, catalog, strictness)
        }
        Expr::Compound(c) => {
            validate(&c.left, catalog, strictness)?;
            validate(&c.right, catalog, strictness)
        }
    }
}

fn check_license(id: &str, catalog: &Catalog, strictness: Strictness) -> Result<(), ValidationError> {
    if strictness == Strictness::AllowAny {
        return Ok(());
    }

    match catalog.license(id) {
        None => Err(ValidationError {
            id: id.to_owned(),
            strictness,
            reason: ValidationReason::Unknown,
        }),
        Some(lic) if lic.deprecated && strictness == Strictness::AllowCurrent => {
            Err(ValidationError {
                id: id.to_owned(),
                strictness,
                reason: ValidationReason::Deprecated,
            })
        }
        Some(_) => Ok(()),
    }
}

fn check_exception(id: &str, catalog: &Catalog, strictness: Strictness) -> Result<(), ValidationError> {
    if strictness == Strictness::AllowAny {
        return Ok(());
    }

    match catalog.exception(id) {
        None => Err(ValidationError {
            id: id.to_owned(),
            strictness,
            reason: ValidationReason::Unknown,
        }),
        Some(exc) if exc.deprecated && strictness == Strictness::AllowCurrent => {
            Err(ValidationError {
                id: id.to_owned(),
                strictness,
                reason: ValidationReason::Deprecated,
            })
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::{Expr, license_with};

    #[test]
    fn allow_any_accepts_unknown_identifiers() {
        let cat = Catalog;
        let expr = Expr::license("Not-A-Real-License", false);
        assert!(validate(&expr, &cat, Strictness::AllowAny).is_ok());
    }

    #[test]
    fn allow_deprecated_accepts_deprecated_but_not_unknown() {
        let cat = Catalog;
        assert!(validate(&Expr::license("GPL-2.0", false), &cat, Strictness::AllowDeprecated).is_ok());
        assert!(
            validate(&Expr::license("Not-A-Real-License", false), &cat, Strictness::AllowDeprecated)
                .is_err()
        );
    }

    #[test]
    fn allow_current_rejects_deprecated() {
        let cat = Catalog;
        let err = validate(&Expr::license("GPL-2.0", false), &cat, Strictness::AllowCurrent).unwrap_err();
        assert_eq!(err.reason, ValidationReason::Deprecated);
        assert!(validate(&Expr::license("GPL-2.0-only", false), &cat, Strictness::AllowCurrent).is_ok());
    }

    #[test]
    fn license_refs_are_always_accepted() {
        let cat = Catalog;
        let expr = Expr::license_ref(None::<String>, "Anything");
        assert!(validate(&expr, &cat, Strictness::AllowCurrent).is_ok());
    }

    #[test]
    fn validates_exception_in_with_node() {
        let cat = Catalog;
        let lic = crate::expr::LicenseId {
            id: "GPL-2.0-or-later".to_owned(),
            or_later: false,
        };
        let expr = Expr::With(license_with(lic.clone(), "Not-A-Real-Exception"));
        assert!(validate(&expr, &cat, Strictness::AllowCurrent).is_err());
        let expr = Expr::With(license_with(lic, "Classpath-exception-2.0"));
        assert!(validate(&expr, &cat, Strictness::AllowCurrent).is_ok());
    }
}
