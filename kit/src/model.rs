//! Values the grammars produce.
//!
//! Declarations are what a directive attaches to; directives are what the
//! comment grammar recognizes. Both are closed sum types so resolution can
//! match on them exhaustively.

use std::collections::BTreeMap;

use annogen_macros::Keyword;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    pub key: String,
    pub value: String,
}

impl EnumVariant {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An enum declaration. Variants keep declaration order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub variants: Vec<EnumVariant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }
}

/// A struct declaration. No grammar rule produces one yet.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    /// Field name to the field's type, as written.
    pub fields: BTreeMap<String, String>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Enum(Enum),
    Struct(Struct),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Enum(e) => &e.name,
            Declaration::Struct(s) => &s.name,
        }
    }
}

impl From<Enum> for Declaration {
    fn from(value: Enum) -> Self {
        Declaration::Enum(value)
    }
}

impl From<Struct> for Declaration {
    fn from(value: Struct) -> Self {
        Declaration::Struct(value)
    }
}

/// Traits that may appear inside `derive(...)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Keyword, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitName {
    Clone,
    Variants,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `derive(Trait, ...)`
    Derive(Vec<TraitName>),
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `#[attribute, ...]`
    Attributes(Vec<Attribute>),
}

/// A declaration together with the directives written directly above it.
///
/// Only the comment-directive rule builds one; it is not modified after.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedDeclaration {
    pub value: Declaration,
    pub directives: Vec<Directive>,
}

/// What the declaration grammar recognizes at a position.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    Declaration(Declaration),
    Annotated(AnnotatedDeclaration),
}

impl Generator {
    pub fn declaration(&self) -> &Declaration {
        match self {
            Generator::Declaration(decl) => decl,
            Generator::Annotated(annotated) => &annotated.value,
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            Generator::Declaration(_) => &[],
            Generator::Annotated(annotated) => &annotated.directives,
        }
    }

    pub fn into_annotated(self) -> Option<AnnotatedDeclaration> {
        match self {
            Generator::Annotated(annotated) => Some(annotated),
            Generator::Declaration(_) => None,
        }
    }
}

impl From<Declaration> for Generator {
    fn from(value: Declaration) -> Self {
        Generator::Declaration(value)
    }
}
