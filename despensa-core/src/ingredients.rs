//! Ingredient text handling for shopping list consolidation.
//!
//! Ingredient blocks are free text: one ingredient per line, or comma-separated.
//! Nothing here parses quantities or units. A fragment like "2 cups flour" is an
//! opaque string, and two strings denote the same item when either contains the
//! other, ignoring case.

/// Split an ingredient block into trimmed, non-empty ingredient strings.
///
/// Newlines and commas both separate fragments; there is no quoting or escaping.
/// Fragments with no letters or digits (stray punctuation, blank lines) are dropped.
/// Output order is document order.
pub fn tokenize(block: &str) -> impl Iterator<Item = &str> {
    block
        .split(['\n', ','])
        .map(str::trim)
        .filter(|fragment| fragment.chars().any(char::is_alphanumeric))
}

/// Case-insensitive containment in either direction.
///
/// Symmetric and reflexive, but not transitive: "leche" matches "leche entera"
/// and "leche entera" matches "leche entera sin lactosa", so line items can
/// absorb mentions that only share a prefix with their text.
pub fn matches(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Whether an ingredient is already stocked: it [`matches`] some pantry item name.
pub fn is_stocked<S: AsRef<str>>(ingredient: &str, pantry_names: &[S]) -> bool {
    let ingredient = ingredient.trim();
    pantry_names
        .iter()
        .any(|name| matches(ingredient, name.as_ref()))
}
