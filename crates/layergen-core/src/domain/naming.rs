//! Casing transforms for generated identifiers.
//!
//! Go struct names arrive in UpperCamelCase; file names, column names and
//! JSON keys use lower_underscore; route groups use the plural form.

/// Convert an UpperCamelCase identifier to lower_underscore.
///
/// Runs of uppercase letters collapse into a single word, so acronyms stay
/// readable: `UserID` becomes `user_id`, not `user_i_d`.
pub fn lower_underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_upper = false;

    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 && !prev_upper {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_upper = true;
        } else {
            out.push(ch);
            prev_upper = false;
        }
    }

    out
}

/// Naive English pluralisation for type and route-group names.
pub fn plural(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        // Consonant + y turns into ies ("Category" -> "Categories"); a
        // vowel before the y just takes an s ("Day" -> "Days").
        let vowel_before = stem
            .chars()
            .next_back()
            .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
        if !vowel_before {
            return format!("{stem}ies");
        }
    }
    if name.ends_with('s') || name.ends_with('x') || name.ends_with("ch") || name.ends_with("sh") {
        return format!("{name}es");
    }
    format!("{name}s")
}
