//! End-to-end coverage for parse/validate/normalize/decompose/dnf, using small declarative
//! table-test macros.

use spdx_expression::{decompose, dnf, normalize, parse, Catalog, ExpressionError, Strictness};

macro_rules! render_eq {
    ($name:ident, $input:expr, $strictness:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let expr = parse($input, $strictness).expect("expected successful parse");
            similar_asserts::assert_eq!(expr.render(), $expected);
        }
    };
}

macro_rules! parse_err {
    ($name:ident, $input:expr, $strictness:expr) => {
        #[test]
        fn $name() {
            assert!(parse($input, $strictness).is_err());
        }
    };
}

render_eq!(
    drops_redundant_parens,
    "(MIT AND (Apache-2.0 AND 0BSD))",
    Strictness::AllowCurrent,
    "MIT AND Apache-2.0 AND 0BSD"
);

render_eq!(
    preserves_required_parens_around_or_in_and,
    "license1 AND (license2 OR license3)",
    Strictness::AllowAny,
    "license1 AND (license2 OR license3)"
);

render_eq!(
    with_binds_tighter_than_and_or,
    "MIT AND GPL-2.0-or-later WITH Classpath-exception-2.0 OR Apache-2.0",
    Strictness::AllowCurrent,
    "MIT AND GPL-2.0-or-later WITH Classpath-exception-2.0 OR Apache-2.0"
);

parse_err!(allow_current_rejects_deprecated_identifier, "GPL-2.0", Strictness::AllowCurrent);
parse_err!(allow_deprecated_rejects_unknown_identifier, "Not-A-Real-License", Strictness::AllowDeprecated);
parse_err!(with_on_parenthesized_compound_is_a_syntax_error, "(MIT AND Apache-2.0) WITH Classpath-exception-2.0", Strictness::AllowAny);
parse_err!(unclosed_parens_is_a_syntax_error, "(MIT AND Apache-2.0", Strictness::AllowAny);
parse_err!(empty_expression_is_a_syntax_error, "", Strictness::AllowAny);

#[test]
fn allow_any_accepts_anything_syntactically_valid() {
    assert!(parse("Definitely-Not-A-Real-License", Strictness::AllowAny).is_ok());
}

#[test]
fn license_refs_are_accepted_under_every_strictness() {
    for strictness in [Strictness::AllowAny, Strictness::AllowDeprecated, Strictness::AllowCurrent] {
        assert!(parse("LicenseRef-Internal-Tool", strictness).is_ok());
    }
}

#[test]
fn normalizes_gnu_family_bare_deprecated_identifier() {
    let expr = parse("GPL-2.0+", Strictness::AllowDeprecated).unwrap();
    let normalized = normalize(&expr, &Catalog);
    assert_eq!(normalized.render(), "GPL-2.0-or-later");
}

#[test]
fn normalizes_combined_license_and_exception_identifier() {
    let expr = parse("GPL-2.0-with-classpath-exception", Strictness::AllowDeprecated).unwrap();
    let normalized = normalize(&expr, &Catalog);
    assert_eq!(normalized.render(), "GPL-2.0-only WITH Classpath-exception-2.0");
}

#[test]
fn normalizes_deprecated_exception_while_leaving_known_successorless_license_alone() {
    let expr = parse("eCos-2.0", Strictness::AllowDeprecated).unwrap();
    let normalized = normalize(&expr, &Catalog);
    assert_eq!(normalized.render(), "eCos-2.0");
}

#[test]
fn normalizes_case() {
    let expr = parse("mit OR apache-2.0", Strictness::AllowAny).unwrap();
    let normalized = normalize(&expr, &Catalog);
    assert_eq!(normalized.render(), "MIT OR Apache-2.0");
}

#[test]
fn decomposes_into_and_or_operands_without_splitting_with() {
    let expr = parse(
        "MIT AND (Apache-2.0 OR GPL-2.0-or-later WITH Classpath-exception-2.0)",
        Strictness::AllowCurrent,
    )
    .unwrap();

    let parts: Vec<_> = decompose(&expr).iter().map(|e| e.render()).collect();
    similar_asserts::assert_eq!(
        parts,
        vec![
            "MIT".to_owned(),
            "Apache-2.0".to_owned(),
            "GPL-2.0-or-later WITH Classpath-exception-2.0".to_owned(),
        ]
    );
}

#[test]
fn rewrites_to_disjunctive_normal_form() {
    let expr = parse("(MIT OR Apache-2.0) AND 0BSD", Strictness::AllowCurrent).unwrap();
    let rewritten = dnf(&expr);
    assert_eq!(rewritten.render(), "MIT AND 0BSD OR Apache-2.0 AND 0BSD");
}

#[test]
fn validation_error_reports_the_rejected_identifier() {
    match parse("GPL-2.0", Strictness::AllowCurrent).unwrap_err() {
        ExpressionError::Validation(e) => assert_eq!(e.id, "GPL-2.0"),
        ExpressionError::Syntax(e) => panic!("expected a validation error, got {e}"),
    }
}
