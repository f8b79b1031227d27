use crate::meta::{GrammarToken, MetaKind};

/// Split a rule body at alternators outside of groups.
///
/// Depth goes up at `(` and down at `)`. An unmatched `)` drives it below
/// zero, so alternators after it stay inside the current alternative. An
/// empty body yields a single empty alternative.
pub fn split_alternatives(body: &[GrammarToken]) -> Vec<&[GrammarToken]> {
    let mut alternatives = Vec::new();
    let mut depth = 0isize;
    let mut start = 0;

    for (i, token) in body.iter().enumerate() {
        match token.kind {
            MetaKind::GroupOpen => depth += 1,
            MetaKind::GroupClose => depth -= 1,
            MetaKind::Alternator if depth == 0 => {
                alternatives.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    alternatives.push(&body[start..]);

    alternatives
}
