//! Slug normalization for user-supplied place names.
//!
//! Lookup keys in [`crate::stations`] are lowercase, accent-free, hyphenated
//! slugs. These helpers fold free-text input ("Praia de Boa Viagem",
//! "Tamandaré") into that canonical form. Both functions are pure, total and
//! idempotent.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a display name into a lookup slug.
///
/// Lowercases, strips diacritics (NFD decomposition, combining marks
/// dropped), and replaces each internal whitespace run with a single hyphen.
/// Leading and trailing whitespace is removed rather than hyphenated.
///
/// ```
/// use praiamar_lib::slug::slugify;
///
/// assert_eq!(slugify("Tamandaré"), "tamandare");
/// assert_eq!(slugify("Cabo de Santo Agostinho"), "cabo-de-santo-agostinho");
/// ```
pub fn slugify(name: &str) -> String {
    let folded: String = name
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_gap = false;
    for c in folded.chars() {
        if c.is_whitespace() {
            pending_gap = true;
        } else {
            if pending_gap && !slug.is_empty() {
                slug.push('-');
            }
            pending_gap = false;
            slug.push(c);
        }
    }
    slug
}

/// Canonicalize a beach name for the tide domain.
///
/// Same as [`slugify`], then drops a leading `praia-de-` / `praia-do-`
/// prefix: the tide mapping table keys beaches by their bare names.
/// Stripping after hyphenation keeps the function idempotent, and spaced
/// input like "praia de carneiros" still loses its prefix because the
/// hyphens are in place by then.
pub fn beach_slug(name: &str) -> String {
    let slug = slugify(name);
    match slug
        .strip_prefix("praia-de-")
        .or_else(|| slug.strip_prefix("praia-do-"))
    {
        Some(bare) => bare.to_owned(),
        None => slug,
    }
}
