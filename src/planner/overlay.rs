use strum::{EnumIter, IntoEnumIterator};

use crate::descriptor;
use crate::mapping::Mapping;
use crate::semantic::{AnnotationAttribute, AnnotationNode, AnnotationValue, ClassNode};
use crate::{Error, Result};

use super::Pass;

/// The class-level annotation marking a class as acting in place of another.
pub const MIXIN_ANNOTATION: &str = "org.spongepowered.asm.mixin.Mixin";
/// The method-level annotation exposing a target field through an accessor.
pub const ACCESSOR_ANNOTATION: &str = "org.spongepowered.asm.mixin.gen.Accessor";
/// The method-level annotation exposing a target method through an invoker.
pub const INVOKER_ANNOTATION: &str = "org.spongepowered.asm.mixin.gen.Invoker";
/// The injection-point annotation whose `target` attribute carries a
/// descriptor-encoded member reference.
pub const AT_ANNOTATION: &str = "org.spongepowered.asm.mixin.injection.At";

/// The closed set of injector annotations whose `method` attribute names a
/// target-class method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum InjectorKind {
    /// `@Inject`
    Inject,
    /// `@ModifyArg`
    ModifyArg,
    /// `@ModifyArgs`
    ModifyArgs,
    /// `@ModifyConstant`
    ModifyConstant,
    /// `@ModifyVariable`
    ModifyVariable,
    /// `@Redirect`
    Redirect,
}

impl InjectorKind {
    /// Fully-qualified name of the annotation type.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            InjectorKind::Inject => "org.spongepowered.asm.mixin.injection.Inject",
            InjectorKind::ModifyArg => "org.spongepowered.asm.mixin.injection.ModifyArg",
            InjectorKind::ModifyArgs => "org.spongepowered.asm.mixin.injection.ModifyArgs",
            InjectorKind::ModifyConstant => "org.spongepowered.asm.mixin.injection.ModifyConstant",
            InjectorKind::ModifyVariable => "org.spongepowered.asm.mixin.injection.ModifyVariable",
            InjectorKind::Redirect => "org.spongepowered.asm.mixin.injection.Redirect",
        }
    }

    /// Match an annotation type name against the injector set.
    #[must_use]
    pub fn of(type_name: &str) -> Option<InjectorKind> {
        InjectorKind::iter().find(|kind| kind.type_name() == type_name)
    }
}

/// Pass 1: discover mixin overlays and rewrite annotation payloads.
pub(super) fn discover(pass: &mut Pass<'_>) -> Result<()> {
    let unit = pass.unit;
    let mut at_targets_done = false;
    for class in &unit.classes {
        let Some(annotation) = class.annotation(MIXIN_ANNOTATION) else {
            continue;
        };

        // `@At` targets carry their own fully-qualified owner, so this runs
        // file-wide, independent of whether the mixin target resolves.
        if !at_targets_done {
            remap_at_targets(pass);
            at_targets_done = true;
        }

        let Some(mapping) = mixin_target(pass, annotation) else {
            continue;
        };
        pass.overlays
            .insert(class.qualified_name.clone(), mapping.clone());

        if !mapping.fields.is_empty() || !mapping.methods.is_empty() {
            remap_accessors(pass, class, &mapping)?;
        }
        if !mapping.methods.is_empty() {
            remap_injections(pass, class, &mapping);
        }
    }
    Ok(())
}

/// Resolve a mixin annotation to its target class's mapping.
///
/// Only single-target forms are supported: the default attribute as one
/// class literal, or a `targets` attribute holding one string literal (whose
/// text is itself rewritten when the class is renamed). Array forms arrive
/// as [`AnnotationValue::Other`] and are skipped.
fn mixin_target(pass: &mut Pass<'_>, annotation: &AnnotationNode) -> Option<Mapping> {
    for attr in &annotation.attributes {
        if attr.is_default() {
            let AnnotationValue::ClassLiteral { name } = &attr.value else {
                continue;
            };
            if let Some(mapping) = pass.table.get(name) {
                return Some(mapping.clone());
            }
        } else if attr.name.as_deref() == Some("targets") {
            let Some(value) = attr.string_value() else {
                continue;
            };
            let Some(mapping) = pass.table.get(value) else {
                continue;
            };
            let mapping = mapping.clone();
            if mapping.new_name != value {
                pass.edits
                    .insert(attr.value_span, format!("\"{}\"", mapping.new_name));
            }
            return Some(mapping);
        }
    }
    None
}

/// Rewrite `@At(target = "...")` descriptor strings, file-wide.
fn remap_at_targets(pass: &mut Pass<'_>) {
    let unit = pass.unit;
    for annotation in &unit.annotations {
        if annotation.type_name != AT_ANNOTATION {
            continue;
        }
        for attr in &annotation.attributes {
            if attr.name.as_deref() != Some("target") {
                continue;
            }
            let Some(value) = attr.string_value() else {
                continue;
            };
            let remapped = descriptor::remap_target(pass.table, value);
            if remapped != value && pass.edits.valid(&attr.value_span) {
                pass.edits
                    .insert(attr.value_span, format!("\"{remapped}\""));
            }
        }
    }
}

/// Rewrite accessor and invoker annotation targets on a mixin class.
///
/// The target is the explicit string value when present, otherwise implied
/// by the method name. When the mapped target differs from the current one,
/// the annotation's argument list is rewritten: emptied when the mapped name
/// matches the implied one (implication then keeps working against the
/// unrenamed method name), or set to the mapped name as an explicit string.
/// The method name itself is never changed here.
fn remap_accessors(pass: &mut Pass<'_>, class: &ClassNode, mapping: &Mapping) -> Result<()> {
    for method in &class.methods {
        let (annotation, is_invoker) = match method.annotation(ACCESSOR_ANNOTATION) {
            Some(annotation) => (annotation, false),
            None => match method.annotation(INVOKER_ANNOTATION) {
                Some(annotation) => (annotation, true),
                None => continue,
            },
        };

        let implied = implied_target(&method.name);
        let explicit = annotation
            .default_attribute()
            .and_then(AnnotationAttribute::string_value);
        let Some(target) = explicit.or(implied.as_deref()) else {
            return Err(Error::AccessorTarget {
                method: method.name.clone(),
            });
        };

        let mapped = if is_invoker {
            mapping.methods.get(target)
        } else {
            mapping.fields.get(target)
        };
        let Some(mapped) = mapped else {
            continue;
        };
        if mapped == target {
            continue;
        }

        let replacement = if implied.as_deref() == Some(mapped.as_str()) {
            String::new()
        } else {
            format!("(\"{}\")", escape_literal(mapped))
        };
        pass.edits.insert(annotation.args_span, replacement);
    }
    Ok(())
}

/// Rewrite injector `method` attributes on a mixin class.
///
/// Only single string literals are handled; the frameworks permit array
/// forms with multiple textual targets, which arrive as
/// [`AnnotationValue::Other`] and stay untouched. A literal of the form
/// `name(<desc>)` has its name remapped through the overlay mapping and its
/// descriptor remapped through the codec.
fn remap_injections(pass: &mut Pass<'_>, class: &ClassNode, mapping: &Mapping) {
    for method in &class.methods {
        let Some(annotation) = method
            .annotations
            .iter()
            .find(|annotation| InjectorKind::of(&annotation.type_name).is_some())
        else {
            continue;
        };
        for attr in &annotation.attributes {
            if attr.name.as_deref() != Some("method") {
                continue;
            }
            let Some(value) = attr.string_value() else {
                continue;
            };
            let (name, desc) = match value.find('(') {
                Some(paren) => (&value[..paren], Some(&value[paren..])),
                None => (value, None),
            };
            let mapped_name = mapping.methods.get(name).map_or(name, String::as_str);
            let mapped = match desc {
                Some(desc) => format!(
                    "{}{}",
                    mapped_name,
                    descriptor::remap_method_desc(pass.table, desc)
                ),
                None => mapped_name.to_string(),
            };
            if mapped != value {
                pass.edits
                    .insert(attr.value_span, format!("\"{mapped}\""));
            }
        }
    }
}

/// The target name implied by an accessor-style method name: the remainder
/// after an `invoke`/`is`/`get`/`set` prefix, first character lowered.
fn implied_target(method_name: &str) -> Option<String> {
    let stripped = method_name
        .strip_prefix("invoke")
        .or_else(|| method_name.strip_prefix("is"))
        .or_else(|| method_name.strip_prefix("get"))
        .or_else(|| method_name.strip_prefix("set"))?;
    let mut chars = stripped.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implied_target_prefixes() {
        assert_eq!(implied_target("getFooBar").as_deref(), Some("fooBar"));
        assert_eq!(implied_target("setFooBar").as_deref(), Some("fooBar"));
        assert_eq!(implied_target("isEnabled").as_deref(), Some("enabled"));
        assert_eq!(implied_target("invokeTick").as_deref(), Some("tick"));
        assert_eq!(implied_target("doThing"), None);
    }

    #[test]
    fn test_implied_target_bare_prefix() {
        assert_eq!(implied_target("get"), None);
        assert_eq!(implied_target("is"), None);
    }

    #[test]
    fn test_injector_kind_lookup() {
        assert_eq!(
            InjectorKind::of("org.spongepowered.asm.mixin.injection.Redirect"),
            Some(InjectorKind::Redirect)
        );
        assert_eq!(InjectorKind::of("java.lang.Override"), None);
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("plain"), "plain");
        assert_eq!(escape_literal("a\"b\\c"), "a\\\"b\\\\c");
    }
}
