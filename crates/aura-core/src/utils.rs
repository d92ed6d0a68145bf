/// Whether `s` is usable as an identifier in every target language:
/// ASCII letter or `_`, then ASCII letters, digits, or `_`.
///
/// # Examples
/// ```
/// use aura_core::utils::is_identifier;
/// assert!(is_identifier("hello_world"));
/// assert!(!is_identifier("9lives"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Convert kebab-case or snake_case to SCREAMING_SNAKE_CASE.
///
/// # Examples
/// ```
/// use aura_core::utils::to_screaming_snake_case;
/// assert_eq!(to_screaming_snake_case("not-found"), "NOT_FOUND");
/// ```
pub fn to_screaming_snake_case(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Convert SCREAMING_SNAKE_CASE to kebab-case.
///
/// Inverse of [`to_screaming_snake_case`] for lowercase kebab-case input.
///
/// # Examples
/// ```
/// use aura_core::utils::to_kebab_case;
/// assert_eq!(to_kebab_case("NOT_FOUND"), "not-found");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
