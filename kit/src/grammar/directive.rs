//! Rules over the body of a directive comment.
//!
//! ```text
//! #[derive(Clone, Variants)]
//! ```
#![cfg_attr(feature = "docs", doc = simple_mermaid::mermaid!("../../docs/diagrams/directive.mmd"))]

use log::trace;

use super::DirectiveParser;
use crate::error::{Error, Result};
use crate::model::{Attribute, Directive, TraitName};
use crate::token::TokenKind;

/// `#[attribute, ...]` with at least one attribute. Commas between
/// attributes are optional and a trailing comma is accepted.
pub fn attributes_directive(p: &mut DirectiveParser) -> Result<Option<Directive>> {
    let start = p.position();
    if !p.advance_sequence(&[TokenKind::Hashtag, TokenKind::OpenBracket]) {
        return p.reset(start);
    }

    let mut attributes = Vec::new();
    loop {
        if p.eat(TokenKind::CloseBracket) {
            break;
        }
        if !attributes.is_empty() && p.eat(TokenKind::Comma) {
            continue;
        }
        match attribute(p)? {
            Some(attr) => attributes.push(attr),
            None => return p.reset(start),
        }
    }

    if attributes.is_empty() {
        return p.reset(start);
    }
    Ok(Some(Directive::Attributes(attributes)))
}

type AttributeRule = fn(&mut DirectiveParser) -> Result<Option<Attribute>>;

const ATTRIBUTES: &[AttributeRule] = &[derive_attribute];

/// Any attribute the directive grammar knows.
pub fn attribute(p: &mut DirectiveParser) -> Result<Option<Attribute>> {
    p.first_match(ATTRIBUTES)
}

/// `derive(Trait, ...)`.
///
/// Fails hard on an identifier that is not a [`TraitName`]: the directive
/// is clearly meant for this tool, so skipping it would silently drop
/// output.
pub fn derive_attribute(p: &mut DirectiveParser) -> Result<Option<Attribute>> {
    let start = p.position();
    if !p.advance_sequence(&[TokenKind::Derive, TokenKind::OpenParen]) {
        return p.reset(start);
    }

    let mut traits = Vec::new();
    loop {
        let token = p.advance();
        match token.kind {
            TokenKind::CloseParen => break,
            TokenKind::Comma if !traits.is_empty() => {}
            TokenKind::Identifier => match TraitName::from_ident(&token.text) {
                Some(name) => traits.push(name),
                None => {
                    return Err(Error::UnknownTrait {
                        name: token.text,
                        span: token.span,
                    });
                }
            },
            _ => return p.reset(start),
        }
    }

    if traits.is_empty() {
        return p.reset(start);
    }
    trace!("derive({traits:?})");
    Ok(Some(Attribute::Derive(traits)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::DIRECTIVE_RULES;
    use crate::token::{Span, tokenize};
    use test_case::test_case;

    fn directive(source: &str) -> Result<Option<Directive>> {
        DirectiveParser::new(tokenize(source), DIRECTIVE_RULES)?.try_match()
    }

    fn derive(traits: &[TraitName]) -> Directive {
        Directive::Attributes(vec![Attribute::Derive(traits.to_vec())])
    }

    #[test_case("#[derive(Variants)]", &[TraitName::Variants]; "single")]
    #[test_case("#[derive(Clone, Variants)]", &[TraitName::Clone, TraitName::Variants]; "two")]
    #[test_case("#[derive(Clone Variants)]", &[TraitName::Clone, TraitName::Variants]; "no comma")]
    #[test_case("#[derive(Variants,)]", &[TraitName::Variants]; "trailing comma")]
    #[test_case("#[derive(Variants),]", &[TraitName::Variants]; "trailing attribute comma")]
    fn test_derive(source: &str, expected: &[TraitName]) {
        assert_eq!(directive(source).unwrap(), Some(derive(expected)));
    }

    #[test]
    fn test_multiple_attributes() {
        let got = directive("#[derive(Clone), derive(Variants)]").unwrap();
        assert_eq!(
            got,
            Some(Directive::Attributes(vec![
                Attribute::Derive(vec![TraitName::Clone]),
                Attribute::Derive(vec![TraitName::Variants]),
            ]))
        );
    }

    #[test_case("#[]"; "no attributes")]
    #[test_case("#[derive()]"; "no traits")]
    #[test_case("#[derive(,)]"; "only comma")]
    #[test_case("#[derive(Variants)"; "unclosed bracket")]
    #[test_case("#[derive(Variants]"; "unclosed paren")]
    #[test_case("#[derive(\"Variants\")]"; "string trait")]
    #[test_case("#[cfg(test)]"; "unknown attribute")]
    #[test_case("[derive(Variants)]"; "missing hash")]
    #[test_case("#[, derive(Variants)]"; "leading comma")]
    fn test_no_match(source: &str) {
        assert_eq!(directive(source).unwrap(), None);
    }

    #[test]
    fn test_unknown_trait_is_fatal() {
        let err = directive("#[derive(Variants, Debug)]").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownTrait {
                name: "Debug".into(),
                span: Span::new(19, 24),
            }
        );
    }

    #[test]
    fn test_no_match_restores_position() {
        let mut p = DirectiveParser::new(tokenize("#[derive(Clone"), &[]).unwrap();
        assert_eq!(attributes_directive(&mut p).unwrap(), None);
        assert_eq!(p.position(), 0);
        p.set_position(2);
        assert_eq!(attribute(&mut p).unwrap(), None);
        assert_eq!(p.position(), 2);
    }
}
