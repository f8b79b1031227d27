/// Prefix a noun with "a" or "an".
///
/// Only the first letter is inspected, which is enough for token kind and
/// rule names in diagnostics.
///
/// # Examples
/// ```
/// use oddgen_core::utils::with_indefinite_article;
/// assert_eq!(with_indefinite_article("number"), "a number");
/// assert_eq!(with_indefinite_article("identifier"), "an identifier");
/// ```
pub fn with_indefinite_article(noun: &str) -> String {
    let starts_with_vowel = noun
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
    if starts_with_vowel {
        format!("an {noun}")
    } else {
        format!("a {noun}")
    }
}
