use crate::meta::{GrammarToken, MetaKind};

/// Whether an alternative of rule `name` starts by invoking `name` itself.
///
/// Only direct left recursion is detected. An explicit class reference
/// (`.name`) names a token class and is never a self-reference; a bare
/// `name` is.
pub fn is_left_recursive(name: &str, alternative: &[GrammarToken]) -> bool {
    let Some(first) = alternative.first() else {
        return false;
    };

    match first.kind {
        MetaKind::Literal => first.literal_value() == name,
        MetaKind::SubruleRef | MetaKind::Name => first.name() == name,
        _ => false,
    }
}
