//! Recursive-descent parser building an [`Expr`] tree from the token stream.
//!
//! Precedence, loosest to tightest: `OR` < `AND` < `WITH`. `WITH` binds to a single bare license
//! id only — `(MIT AND Apache-2.0) WITH Classpath-exception-2.0` and
//! `LicenseRef-Foo WITH Classpath-exception-2.0` are both syntax errors, not trees with a compound
//! or a `LicenseRef` on the left of a `WITH`. Parentheses around a single license id are
//! transparent to this rule: `(MIT) WITH Classpath-exception-2.0` is valid.

use crate::error::{Reason, SyntaxError};
use crate::expr::{Expr, Operator, license_with};
use crate::lexer::{Lexer, LexerToken, Token};

pub(crate) struct Parser<'a> {
    original: &'a str,
    tokens: Vec<LexerToken<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(original: &'a str) -> Result<Self, SyntaxError> {
        let tokens = Lexer::new(original).collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            original,
            tokens,
            pos: 0,
        })
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos).map(|lt| &lt.token)
    }

    fn peek_span(&self) -> std::ops::Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|lt| lt.span.clone())
            .unwrap_or(self.original.len()..self.original.len())
    }

    fn bump(&mut self) -> Option<LexerToken<'a>> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, reason: Reason) -> SyntaxError {
        SyntaxError {
            original: self.original.to_owned(),
            span: self.peek_span(),
            reason,
        }
    }

    /// Parses the entire token stream as a single expression, erroring on trailing garbage.
    pub(crate) fn parse(mut self) -> Result<Expr, SyntaxError> {
        if self.tokens.is_empty() {
            return Err(self.err(Reason::Empty));
        }

        let expr = self.parse_or()?;

        match self.peek() {
            None => Ok(expr),
            Some(Token::CloseParen) => Err(self.err(Reason::UnopenedParens)),
            _ => Err(self.err(Reason::Unexpected(&["AND", "OR", "WITH"]))),
        }
    }

    fn parse_or(&mut self) -> Result<Expr, SyntaxError> {
        let mut lhs = self.parse_and()?;

        while matches!(self.peek(), Some(Token::Or)) {
            self.bump();
            let rhs = self.parse_and()?;
            lhs = lhs.compound(Operator::Or, rhs);
        }

        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expr, SyntaxError> {
        let mut lhs = self.parse_with()?;

        while matches!(self.peek(), Some(Token::And)) {
            self.bump();
            let rhs = self.parse_with()?;
            lhs = lhs.compound(Operator::And, rhs);
        }

        Ok(lhs)
    }

    fn parse_with(&mut self) -> Result<Expr, SyntaxError> {
        let lhs = self.parse_primary()?;

        if matches!(self.peek(), Some(Token::With)) {
            let Expr::License(id) = lhs else {
                return Err(self.err(Reason::WithRequiresLicenseId));
            };

            self.bump();

            return match self.bump() {
                Some(LexerToken {
                    token: Token::Ident(exc_id),
                    ..
                }) => Ok(Expr::With(license_with(id, exc_id))),
                _ => Err(self.err(Reason::Unexpected(&["<exception-id>"]))),
            };
        }

        Ok(lhs)
    }

    /// Parses a parenthesized group or a single license/license-ref term. Parentheses are purely
    /// grouping here — the returned `Expr` carries no trace of whether it was parenthesized, so a
    /// redundant `(MIT)` is indistinguishable from a bare `MIT` to every caller, including
    /// `parse_with`.
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek() {
            Some(Token::OpenParen) => {
                self.bump();
                let inner = self.parse_or()?;

                match self.bump() {
                    Some(LexerToken {
                        token: Token::CloseParen,
                        ..
                    }) => Ok(inner),
                    _ => Err(self.err(Reason::UnclosedParens)),
                }
            }
            Some(Token::Ident(_)) => {
                let LexerToken { token, .. } = self.bump().expect("peeked Some");
                let Token::Ident(id) = token else {
                    unreachable!()
                };

                let or_later = matches!(self.peek(), Some(Token::Plus));
                if or_later {
                    self.bump();
                }

                Ok(Expr::license(id, or_later))
            }
            Some(Token::LicenseRef { .. }) => {
                let LexerToken { token, .. } = self.bump().expect("peeked Some");
                let Token::LicenseRef { doc_ref, lic_ref } = token else {
                    unreachable!()
                };

                Ok(Expr::license_ref(doc_ref, lic_ref))
            }
            Some(Token::CloseParen) => Err(self.err(Reason::UnopenedParens)),
            _ => Err(self.err(Reason::Unexpected(&["<license-id>", "LicenseRef-...", "("]))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Parser;
    use crate::error::Reason;
    use crate::expr::Expr;

    fn parse(s: &str) -> Expr {
        Parser::new(s).unwrap().parse().unwrap()
    }

    #[test]
    fn parses_bare_license() {
        assert_eq!(parse("MIT").render(), "MIT");
    }

    #[test]
    fn parses_or_later() {
        assert_eq!(parse("Apache-2.0+").render(), "Apache-2.0+");
    }

    #[test]
    fn precedence_with_binds_tighter_than_and_or() {
        let expr = parse("MIT AND GPL-2.0-or-later WITH Classpath-exception-2.0 OR Apache-2.0");
        assert_eq!(
            expr.render(),
            "MIT AND GPL-2.0-or-later WITH Classpath-exception-2.0 OR Apache-2.0"
        );
    }

    #[test]
    fn drops_redundant_parens_on_reprint() {
        let expr = parse("(MIT AND (Apache-2.0 AND 0BSD))");
        assert_eq!(expr.render(), "MIT AND Apache-2.0 AND 0BSD");
    }

    #[test]
    fn accepts_with_on_a_parenthesized_single_license() {
        let expr = parse("(MIT) WITH Classpath-exception-2.0");
        assert_eq!(expr.render(), "MIT WITH Classpath-exception-2.0");
    }

    #[test]
    fn rejects_with_on_parenthesized_compound() {
        let err = Parser::new("(MIT AND Apache-2.0) WITH Classpath-exception-2.0")
            .unwrap()
            .parse()
            .unwrap_err();
        assert_eq!(err.reason, Reason::WithRequiresLicenseId);
    }

    #[test]
    fn rejects_with_on_license_ref() {
        let err = Parser::new("LicenseRef-Foo WITH Classpath-exception-2.0")
            .unwrap()
            .parse()
            .unwrap_err();
        assert_eq!(err.reason, Reason::WithRequiresLicenseId);
    }

    #[test]
    fn rejects_empty_expression() {
        let err = Parser::new("").unwrap().parse().unwrap_err();
        assert_eq!(err.reason, Reason::Empty);
    }

    #[test]
    fn rejects_unclosed_parens() {
        let err = Parser::new("(MIT AND Apache-2.0").unwrap().parse().unwrap_err();
        assert_eq!(err.reason, Reason::UnclosedParens);
    }

    #[test]
    fn rejects_unopened_parens() {
        let err = Parser::new("MIT)").unwrap().parse().unwrap_err();
        assert_eq!(err.reason, Reason::UnopenedParens);
    }

    #[test]
    fn parses_license_ref() {
        assert_eq!(parse("LicenseRef-MyLicense").render(), "LicenseRef-MyLicense");
        assert_eq!(
            parse("DocumentRef-Foo:LicenseRef-Bar").render(),
            "DocumentRef-Foo:LicenseRef-Bar"
        );
    }
}
