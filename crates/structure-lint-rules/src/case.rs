//! Letter-case predicates and conversions.
//!
//! Grammars enforced:
//!
//! - kebab-case: `^[a-z][a-z0-9]*(-[a-z0-9]+)*$`
//! - camelCase:  `^[a-z][a-zA-Z0-9]*$`
//! - PascalCase: `^[A-Z][a-zA-Z0-9]*$`

/// True if `s` is lowercase-hyphen-separated (`user-fetch`).
#[must_use]
pub fn is_kebab_case(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }

    let mut prev_hyphen = false;
    for c in chars {
        match c {
            'a'..='z' | '0'..='9' => prev_hyphen = false,
            '-' => {
                if prev_hyphen {
                    return false;
                }
                prev_hyphen = true;
            }
            _ => return false,
        }
    }
    !prev_hyphen
}

/// True if `s` is camelCase (`userFetchBroker`).
#[must_use]
pub fn is_camel_case(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// True if `s` is PascalCase (`LoginResponder`).
#[must_use]
pub fn is_pascal_case(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Converts an arbitrary identifier-ish string to kebab-case.
///
/// `UserFetch` -> `user-fetch`, `format_date` -> `format-date`.
#[must_use]
pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower_or_digit = false;

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else if c == '_' || c == ' ' || c == '-' {
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
            prev_lower_or_digit = false;
        } else {
            out.push(c);
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    out.trim_matches('-').to_owned()
}

/// Capitalizes the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Joins hyphen-split words into a camelCase identifier.
#[must_use]
pub fn join_camel(words: &[&str]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Joins hyphen-split words into a PascalCase identifier.
#[must_use]
pub fn join_pascal(words: &[&str]) -> String {
    words.iter().map(|w| capitalize(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_accepts_valid() {
        assert!(is_kebab_case("user"));
        assert!(is_kebab_case("user-fetch"));
        assert!(is_kebab_case("a1-b2-c3"));
    }

    #[test]
    fn kebab_rejects_invalid() {
        assert!(!is_kebab_case(""));
        assert!(!is_kebab_case("User"));
        assert!(!is_kebab_case("user_fetch"));
        assert!(!is_kebab_case("user--fetch"));
        assert!(!is_kebab_case("-user"));
        assert!(!is_kebab_case("user-"));
        assert!(!is_kebab_case("1user"));
    }

    #[test]
    fn camel_case_predicate() {
        assert!(is_camel_case("userFetchBroker"));
        assert!(is_camel_case("x"));
        assert!(!is_camel_case("UserFetchBroker"));
        assert!(!is_camel_case("user-fetch"));
        assert!(!is_camel_case(""));
    }

    #[test]
    fn pascal_case_predicate() {
        assert!(is_pascal_case("LoginResponder"));
        assert!(is_pascal_case("X"));
        assert!(!is_pascal_case("loginResponder"));
        assert!(!is_pascal_case("Login-Responder"));
        assert!(!is_pascal_case(""));
    }

    #[test]
    fn to_kebab_from_pascal() {
        assert_eq!(to_kebab_case("UserFetch"), "user-fetch");
        assert_eq!(to_kebab_case("APIClient"), "apiclient");
    }

    #[test]
    fn to_kebab_from_snake_and_camel() {
        assert_eq!(to_kebab_case("format_date"), "format-date");
        assert_eq!(to_kebab_case("formatDate"), "format-date");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn join_camel_words() {
        assert_eq!(join_camel(&["user", "fetch"]), "userFetch");
        assert_eq!(join_camel(&["start", "server"]), "startServer");
        assert_eq!(join_camel(&["x"]), "x");
    }

    #[test]
    fn join_pascal_words() {
        assert_eq!(join_pascal(&["user", "fetch"]), "UserFetch");
        assert_eq!(join_pascal(&["login"]), "Login");
    }
}
