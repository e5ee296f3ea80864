//! String case conversion, replacement, and validation helpers.
//!
//! Case conversions treat `-`, `_`, and whitespace as word separators and
//! only re-case ASCII letters; other characters pass through unchanged.
//! Validators are character-class checks, not full RFC implementations:
//! `is_email` and `is_url` accept what the common structural patterns accept
//! and nothing resembling a DNS lookup happens here.

use std::borrow::Cow;

use crate::error::{MorphError, Result};
use crate::params::CompareOptions;

fn is_separator(ch: char) -> bool {
    ch == '-' || ch == '_' || ch.is_whitespace()
}

/// Collapse `separator + lowercase letter` pairs into an uppercase letter.
/// Separators not followed by a lowercase ASCII letter are kept.
fn collapse_separators(lowered: &str) -> String {
    let mut out = String::with_capacity(lowered.len());
    let mut chars = lowered.chars().peekable();
    while let Some(ch) = chars.next() {
        if is_separator(ch) {
            match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Force the first character to the requested ASCII case.
fn set_first_ascii_case(text: &mut String, upper: bool) {
    if let Some(first) = text.chars().next() {
        let mapped = if upper {
            first.to_ascii_uppercase()
        } else {
            first.to_ascii_lowercase()
        };
        if mapped != first {
            text.replace_range(..first.len_utf8(), mapped.encode_utf8(&mut [0; 4]));
        }
    }
}

/// Insert `separator` at lower-to-upper boundaries, swap the other separator
/// characters for it, and lowercase the result.
fn separate_words(input: &str, separator: char, swapped: char) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut previous_lower = false;
    for ch in input.chars() {
        if ch == swapped || ch.is_whitespace() {
            out.push(separator);
            previous_lower = false;
        } else if ch.is_ascii_uppercase() {
            if previous_lower {
                out.push(separator);
            }
            out.push(ch.to_ascii_lowercase());
            previous_lower = false;
        } else {
            previous_lower = ch.is_ascii_lowercase();
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Converts a string to camel case.
///
/// # Examples
///
/// ```rust
/// use morph_core::string::to_camel_case;
///
/// assert_eq!(to_camel_case("hello-world"), "helloWorld");
/// assert_eq!(to_camel_case("HELLO_WORLD"), "helloWorld");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut out = collapse_separators(&input.to_lowercase());
    set_first_ascii_case(&mut out, false);
    out
}

/// Converts a string to Pascal case.
///
/// # Examples
///
/// ```rust
/// use morph_core::string::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello world"), "HelloWorld");
/// ```
pub fn to_pascal_case(input: &str) -> String {
    let mut out = collapse_separators(&input.to_lowercase());
    set_first_ascii_case(&mut out, true);
    out
}

/// Converts a string to snake case.
///
/// # Examples
///
/// ```rust
/// use morph_core::string::to_snake_case;
///
/// assert_eq!(to_snake_case("helloWorld"), "hello_world");
/// assert_eq!(to_snake_case("Hello World"), "hello_world");
/// ```
pub fn to_snake_case(input: &str) -> String {
    separate_words(input, '_', '-')
}

/// Converts a string to kebab case.
///
/// # Examples
///
/// ```rust
/// use morph_core::string::to_kebab_case;
///
/// assert_eq!(to_kebab_case("helloWorld"), "hello-world");
/// assert_eq!(to_kebab_case("HELLO_WORLD"), "hello-world");
/// ```
pub fn to_kebab_case(input: &str) -> String {
    separate_words(input, '-', '_')
}

/// Converts a string to Title Case, keeping the separators in place.
///
/// # Examples
///
/// ```rust
/// use morph_core::string::to_title_case;
///
/// assert_eq!(to_title_case("hello-world"), "Hello-World");
/// assert_eq!(to_title_case("HELLO_WORLD"), "Hello_World");
/// ```
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut start_of_word = true;
    for ch in input.chars() {
        if is_separator(ch) {
            out.push(ch);
            start_of_word = true;
        } else if start_of_word {
            out.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Replaces the character at `index` (counted in characters) with
/// `replacement`.
///
/// # Errors
///
/// Returns [`MorphError::IndexOutOfRange`] when `index` does not name a
/// character of `input`.
///
/// # Examples
///
/// ```rust
/// use morph_core::string::replace_at;
///
/// assert_eq!(replace_at("hello world", 6, 'W').unwrap(), "hello World");
/// assert!(replace_at("abc", 3, 'x').is_err());
/// ```
pub fn replace_at(input: &str, index: usize, replacement: char) -> Result<String> {
    let length = input.chars().count();
    if index >= length {
        return Err(MorphError::IndexOutOfRange { index, length });
    }
    Ok(input
        .chars()
        .enumerate()
        .map(|(position, ch)| if position == index { replacement } else { ch })
        .collect())
}

/// Escapes the five special HTML characters.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Unescapes the five entities produced by [`escape_html`], in the same
/// replacement order.
pub fn unescape_html(input: &str) -> String {
    input
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Checks whether a string parses as a finite or infinite number (not NaN).
pub fn is_numeric(input: &str) -> bool {
    matches!(input.trim().parse::<f64>(), Ok(value) if !value.is_nan())
}

/// Checks whether a string has the structural shape of an email address:
/// no whitespace, exactly one `@` with a non-empty local part, and a dot
/// inside the domain with characters on both sides.
pub fn is_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(position, ch)| ch == '.' && position > 0 && position < domain.len() - 1)
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        input.get(prefix.len()..)
    } else {
        None
    }
}

fn is_ipv4_shaped(host: &str) -> bool {
    let octets: Vec<&str> = host.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|octet| {
            !octet.is_empty() && octet.len() <= 3 && octet.chars().all(|ch| ch.is_ascii_digit())
        })
}

fn is_bracketed_ipv6_shaped(host: &str) -> bool {
    let Some(inner) = host.strip_prefix('[').and_then(|tail| tail.strip_suffix(']')) else {
        return false;
    };
    !inner.is_empty() && inner.chars().all(|ch| ch.is_ascii_hexdigit() || ch == ':')
}

fn is_domain_shaped(host: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    let Some((tld, names)) = labels.split_last() else {
        return false;
    };
    if names.is_empty() {
        return false;
    }
    tld.len() >= 2
        && tld.chars().all(|ch| ch.is_ascii_alphabetic())
        && names.iter().all(|label| {
            !label.is_empty()
                && label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        })
}

/// Checks whether a string has the structural shape of a URL.
///
/// Accepts an optional `http`/`https`/`ftp` scheme and `www.` prefix, then a
/// host that is a dotted domain with an alphabetic top-level label, an IPv4
/// shape, a bracketed IPv6 shape, or `localhost`, followed by an optional
/// 2-5 digit port and free-form path, query, and fragment. Whitespace
/// anywhere disqualifies the string.
///
/// # Examples
///
/// ```rust
/// use morph_core::string::is_url;
///
/// assert!(is_url("https://example.com/path?q=1#top"));
/// assert!(is_url("localhost:8080"));
/// assert!(!is_url("not a url"));
/// ```
pub fn is_url(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }
    let mut rest = input;
    for scheme in ["https://", "http://", "ftp://"] {
        if let Some(tail) = strip_prefix_ignore_case(rest, scheme) {
            rest = tail;
            break;
        }
    }
    if let Some(tail) = strip_prefix_ignore_case(rest, "www.") {
        rest = tail;
    }

    // Everything after the first path/query/fragment delimiter is free-form
    // once whitespace has been excluded.
    let authority_end = rest.find(&['/', '?', '#'][..]).unwrap_or(rest.len());
    let authority = &rest[..authority_end];

    let (host, port) = match authority.rfind(':') {
        Some(position)
            if !authority.starts_with('[') || authority[..position].ends_with(']') =>
        {
            (&authority[..position], Some(&authority[position + 1..]))
        }
        _ => (authority, None),
    };
    if let Some(port) = port {
        if port.len() < 2 || port.len() > 5 || !port.chars().all(|ch| ch.is_ascii_digit()) {
            return false;
        }
    }

    host.eq_ignore_ascii_case("localhost")
        || is_ipv4_shaped(host)
        || is_bracketed_ipv6_shaped(host)
        || is_domain_shaped(host)
}

/// Checks whether a string is non-empty and entirely ASCII letters.
pub fn is_alpha(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|ch| ch.is_ascii_alphabetic())
}

/// Checks whether a string is non-empty and entirely ASCII letters or digits.
pub fn is_alphanumeric(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|ch| ch.is_ascii_alphanumeric())
}

/// Compares two strings for equality, prefix, suffix, or containment.
///
/// Exactly one comparison runs, selected by the first flag set in the order
/// `starts_with`, `has`, `ends_with`; full equality otherwise.
/// `ignore_case` lowercases both sides first.
///
/// # Errors
///
/// Returns [`MorphError::InvalidInput`] when either string is empty.
///
/// # Examples
///
/// ```rust
/// use morph_core::{params::CompareOptions, string::is_equal};
///
/// let options = CompareOptions { ignore_case: true, starts_with: true, ..Default::default() };
/// assert!(is_equal("Hello World", "hello", &options).unwrap());
/// ```
pub fn is_equal(first: &str, second: &str, options: &CompareOptions) -> Result<bool> {
    if first.is_empty() || second.is_empty() {
        return Err(MorphError::invalid_input("strings")
            .with_reason("comparison arguments must be non-empty"));
    }

    let (first, second): (Cow<'_, str>, Cow<'_, str>) = if options.ignore_case {
        (
            Cow::Owned(first.to_lowercase()),
            Cow::Owned(second.to_lowercase()),
        )
    } else {
        (Cow::Borrowed(first), Cow::Borrowed(second))
    };

    if options.starts_with {
        return Ok(first.starts_with(second.as_ref()));
    }
    if options.has {
        return Ok(first.contains(second.as_ref()));
    }
    if options.ends_with {
        return Ok(first.ends_with(second.as_ref()));
    }
    Ok(first == second)
}
