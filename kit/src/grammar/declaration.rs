//! Declaration-level rules: directive comments and the two enum dialects.

use log::debug;

use super::{DIRECTIVE_RULES, DeclarationParser, DirectiveParser};
use crate::error::{Error, Result};
use crate::model::{AnnotatedDeclaration, Declaration, Enum, EnumVariant, Generator};
use crate::token::{TokenKind, tokenize_at};

const DIRECTIVE_MARKER: &str = "//";

/// A directive comment bound to the declaration that follows it.
///
/// The comment body is tokenized again on its own and parsed with
/// [`DIRECTIVE_RULES`](super::DIRECTIVE_RULES). A body the directive grammar
/// does not recognize is no match. A recognized directive with no
/// declaration after it is an error.
pub fn comment_directive(p: &mut DeclarationParser) -> Result<Option<Generator>> {
    let start = p.position();
    let token = p.advance();
    if token.kind != TokenKind::CommentDirective {
        return p.reset(start);
    }

    if !token.text.starts_with(DIRECTIVE_MARKER) {
        return Err(Error::MalformedDirective {
            text: token.text,
            span: token.span,
        });
    }

    let body = &token.text[DIRECTIVE_MARKER.len()..];
    let body_tokens = tokenize_at(body, token.span.start + DIRECTIVE_MARKER.len());
    let mut inner = DirectiveParser::with_config(body_tokens, DIRECTIVE_RULES, *p.config())?;
    let Some(directive) = inner.try_match()? else {
        return p.reset(start);
    };

    p.enter_nested()?;
    let subject = p.try_match();
    p.exit_nested();

    let annotated = match subject? {
        Some(Generator::Declaration(value)) => AnnotatedDeclaration {
            value,
            directives: vec![directive],
        },
        // Stacked directive comments: the one closest to the declaration
        // was bound first, so this one goes in front.
        Some(Generator::Annotated(mut annotated)) => {
            annotated.directives.insert(0, directive);
            annotated
        }
        None => {
            return Err(Error::UnattachedDirective {
                directive: token.text,
                span: token.span,
            });
        }
    };

    debug!(
        "bound directive at {} to `{}`",
        token.span,
        annotated.value.name()
    );
    Ok(Some(Generator::Annotated(annotated)))
}

type EnumRule = fn(&mut DeclarationParser) -> Result<Option<Enum>>;

const ENUM_DIALECTS: &[EnumRule] = &[declaration_style_enum, block_style_enum];

/// An enum in either dialect.
pub fn enum_declaration(p: &mut DeclarationParser) -> Result<Option<Generator>> {
    let start = p.position();
    let Some(decl) = p.first_match(ENUM_DIALECTS)? else {
        return Ok(None);
    };
    debug!(
        "enum `{}` with {} variant(s) at tokens {start}..{}",
        decl.name,
        decl.variants.len(),
        p.position()
    );
    Ok(Some(Declaration::from(decl).into()))
}

enum ConstValue {
    Literal(String),
    Iota,
}

/// `type Name [=] underlying` followed by typed constants.
///
/// ```text
/// type Foo string
/// const FooOne Foo = "ONE"
/// const FooTwo Foo = "TWO"
///
/// type Bar = int
/// const (
///     BarA Bar = iota
///     BarB
/// )
/// ```
fn declaration_style_enum(p: &mut DeclarationParser) -> Result<Option<Enum>> {
    let start = p.position();
    if !p.eat(TokenKind::Type) {
        return p.reset(start);
    }
    let name = p.advance();
    if name.kind != TokenKind::Identifier {
        return p.reset(start);
    }
    p.eat(TokenKind::Assignment);
    if !p.advance_sequence(&[TokenKind::Identifier, TokenKind::Const]) {
        return p.reset(start);
    }
    let grouped = p.eat(TokenKind::OpenParen);

    let mut decl = Enum::new(name.text);
    let mut counter: Option<u64> = None;
    loop {
        if grouped {
            p.eat(TokenKind::Comma);
        } else if !decl.variants.is_empty() {
            if p.current_kind() != TokenKind::Const || !typed_entry_at(p, 1, &decl.name) {
                break;
            }
            p.advance();
        }

        if let Some(next) = counter {
            if p.current_kind() == TokenKind::Identifier && !typed_entry_at(p, 0, &decl.name) {
                let key = p.advance();
                decl.variants.push(EnumVariant::new(key.text, next.to_string()));
                counter = Some(next + 1);
                continue;
            }
            counter = None;
        }

        match typed_entry(p, &decl.name) {
            Some((key, ConstValue::Literal(value))) => {
                decl.variants.push(EnumVariant::new(key, value));
            }
            Some((key, ConstValue::Iota)) => {
                decl.variants.push(EnumVariant::new(key, "0"));
                counter = Some(1);
            }
            None => break,
        }
    }

    if decl.variants.is_empty() {
        return p.reset(start);
    }
    if grouped {
        p.eat(TokenKind::CloseParen);
    }
    Ok(Some(decl))
}

/// Whether `Key Name =` starts `offset` tokens ahead.
fn typed_entry_at(p: &DeclarationParser, offset: usize, name: &str) -> bool {
    let ty = p.peek(offset + 1);
    p.peek_kind(offset) == TokenKind::Identifier
        && ty.kind == TokenKind::Identifier
        && ty.text == name
        && p.peek_kind(offset + 2) == TokenKind::Assignment
}

/// `Key Name = value`. Restores the cursor when the entry does not parse.
fn typed_entry(p: &mut DeclarationParser, name: &str) -> Option<(String, ConstValue)> {
    let start = p.position();
    if !typed_entry_at(p, 0, name) {
        return None;
    }
    let key = p.advance();
    p.advance();
    p.advance();
    match const_value(p) {
        Some(value) => Some((key.text, value)),
        None => {
            p.set_position(start);
            None
        }
    }
}

fn const_value(p: &mut DeclarationParser) -> Option<ConstValue> {
    let token = p.advance();
    match token.kind {
        TokenKind::Iota => Some(ConstValue::Iota),
        TokenKind::String => Some(ConstValue::Literal(unquote(&token.text).to_owned())),
        TokenKind::Number
        | TokenKind::Identifier
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Null => Some(ConstValue::Literal(token.text)),
        TokenKind::Dash if p.current_kind() == TokenKind::Number => {
            let number = p.advance();
            Some(ConstValue::Literal(format!("-{}", number.text)))
        }
        _ => None,
    }
}

fn unquote(text: &str) -> &str {
    ['"', '`']
        .into_iter()
        .find_map(|quote| text.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(text)
}

/// `enum Name { A B C }`, the relational-schema spelling. Each key is its
/// own value.
fn block_style_enum(p: &mut DeclarationParser) -> Result<Option<Enum>> {
    let start = p.position();
    if !p.eat(TokenKind::Enum) {
        return p.reset(start);
    }
    let name = p.advance();
    if name.kind != TokenKind::Identifier || !p.eat(TokenKind::OpenCurly) {
        return p.reset(start);
    }

    let mut decl = Enum::new(name.text);
    loop {
        let token = p.advance();
        match token.kind {
            TokenKind::Comma => {}
            TokenKind::Identifier => {
                decl.variants.push(EnumVariant::new(token.text.clone(), token.text));
            }
            TokenKind::CloseCurly => return Ok(Some(decl)),
            _ => return p.reset(start),
        }
    }
}
