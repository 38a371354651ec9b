use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::Span;

bitflags! {
    /// Attributes of one identifier reference, as reported by the front-end.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ReferenceFlags: u8 {
        /// The reference is reached through an explicit qualifier
        /// (`this.field`, `Owner.field`, a dotted path).
        const QUALIFIED = 1;
        /// The reference *is* the declaration of the named member; its span
        /// covers the whole declaration.
        const DECLARATION = 1 << 1;
        /// The reference is a label in a selection/switch construct matching
        /// against a constant.
        const SWITCH_LABEL = 1 << 2;
    }
}

/// The declaring entity an identifier reference resolved to.
///
/// This is the closed set the planner dispatches over; anything the
/// front-end cannot resolve to a rewritable entity arrives as
/// [`ResolvedTarget::Unresolved`] and is silently left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedTarget {
    /// A field, with the fully-qualified name of its declaring class.
    Field {
        /// Fully-qualified dotted name of the declaring class
        owner: String,
        /// Unqualified field name
        name: String,
    },
    /// A method, with the fully-qualified name of its declaring class.
    Method {
        /// Fully-qualified dotted name of the declaring class
        owner: String,
        /// Unqualified method name
        name: String,
    },
    /// A class, by fully-qualified dotted name.
    Class {
        /// Fully-qualified dotted name
        name: String,
    },
    /// A package, by fully-qualified dotted name.
    Package {
        /// Fully-qualified dotted name
        name: String,
    },
    /// Not resolvable to a rewritable entity.
    Unresolved,
}

/// One resolved identifier occurrence in a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceNode {
    /// Extent of the whole reference (for a qualified reference, the full
    /// dotted path; for a declaration, the whole declaration)
    pub span: Span,
    /// Extent of the identifier token itself
    pub ident_span: Span,
    /// What the reference resolved to
    pub target: ResolvedTarget,
    /// Reference attributes
    #[serde(default, skip_serializing_if = "ReferenceFlags::is_empty")]
    pub flags: ReferenceFlags,
}

/// The value of one annotation attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationValue {
    /// A single string literal (the quoted text, unescaped).
    String {
        /// The literal's value
        value: String,
    },
    /// A class literal, resolved to a fully-qualified dotted name.
    ClassLiteral {
        /// Fully-qualified dotted name of the referenced class
        name: String,
    },
    /// Any other form: arrays, constants, nested annotations. These are the
    /// multi-target shapes this system deliberately does not rewrite.
    Other,
}

/// One `name = value` pair inside an annotation's argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationAttribute {
    /// Attribute name; `None` for the unnamed default attribute
    #[serde(default)]
    pub name: Option<String>,
    /// The attribute's value
    pub value: AnnotationValue,
    /// Extent of the value expression, quotes included for string literals
    pub value_span: Span,
}

impl AnnotationAttribute {
    /// True for the default attribute, written with or without `value =`.
    #[must_use]
    pub fn is_default(&self) -> bool {
        match &self.name {
            None => true,
            Some(name) => name == "value",
        }
    }

    /// The attribute's string literal, when it is one.
    #[must_use]
    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            AnnotationValue::String { value } => Some(value),
            _ => None,
        }
    }
}

/// One annotation occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationNode {
    /// Fully-qualified dotted name of the annotation type
    pub type_name: String,
    /// Extent of the whole annotation
    pub span: Span,
    /// Extent of the parenthesized argument list, parentheses included;
    /// zero-width at the annotation's end when there is none
    pub args_span: Span,
    /// The annotation's attributes in source order
    #[serde(default)]
    pub attributes: Vec<AnnotationAttribute>,
}

impl AnnotationNode {
    /// First attribute with the given name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AnnotationAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.name.as_deref() == Some(name))
    }

    /// First default (`value`) attribute.
    #[must_use]
    pub fn default_attribute(&self) -> Option<&AnnotationAttribute> {
        self.attributes.iter().find(|attr| attr.is_default())
    }
}

/// One method declaration, as the annotation passes see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNode {
    /// Unqualified method name
    pub name: String,
    /// Extent of the whole declaration
    pub span: Span,
    /// Extent of the body, when the method has one
    #[serde(default)]
    pub body_span: Option<Span>,
    /// Annotations directly on the declaration
    #[serde(default)]
    pub annotations: Vec<AnnotationNode>,
}

impl MethodNode {
    /// First annotation of the given type.
    #[must_use]
    pub fn annotation(&self, type_name: &str) -> Option<&AnnotationNode> {
        self.annotations
            .iter()
            .find(|annotation| annotation.type_name == type_name)
    }

    /// True when the body extent equals the declaration extent, the marker
    /// for compiler-generated declarations that must not be rewritten.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.body_span == Some(self.span)
    }
}

/// One class declaration, as the annotation passes see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNode {
    /// Fully-qualified dotted name
    pub qualified_name: String,
    /// Extent of the whole declaration
    pub span: Span,
    /// Annotations directly on the declaration
    #[serde(default)]
    pub annotations: Vec<AnnotationNode>,
    /// Method declarations in source order
    #[serde(default)]
    pub methods: Vec<MethodNode>,
}

impl ClassNode {
    /// First annotation of the given type.
    #[must_use]
    pub fn annotation(&self, type_name: &str) -> Option<&AnnotationNode> {
        self.annotations
            .iter()
            .find(|annotation| annotation.type_name == type_name)
    }
}

/// One compilation unit, resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Unit name as it travels through the batch protocol (a relative path)
    pub name: String,
    /// The unit's original text; all spans index into this
    pub text: String,
    /// Class declarations in source order
    #[serde(default)]
    pub classes: Vec<ClassNode>,
    /// Every annotation occurrence in the unit, nested ones included
    #[serde(default)]
    pub annotations: Vec<AnnotationNode>,
    /// Every resolved identifier occurrence, in document order
    #[serde(default)]
    pub references: Vec<ReferenceNode>,
}
