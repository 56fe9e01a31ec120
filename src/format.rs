//! `{name}` placeholder substitution.

use std::fmt::Display;

/// Replaces every `{name}` token with the value's text, one parameter at a time.
///
/// Each parameter is a global replacement over the current text, applied in
/// iteration order. A value that itself contains `{other}` is therefore
/// substituted again if `other` comes later. Tokens with no matching
/// parameter, and braces that are not part of a token, are left as-is.
///
/// ```
/// use json_localizer::format::substitute;
///
/// assert_eq!(substitute("Hello {name}", [("name", "World")]), "Hello World");
/// assert_eq!(substitute("{n} of {total}", [("n", 3), ("total", 10)]), "3 of 10");
/// assert_eq!(substitute("Hi {who}", Vec::<(&str, &str)>::new()), "Hi {who}");
/// ```
#[must_use]
pub fn substitute<K, V>(template: &str, params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: Display,
{
    let mut message = template.to_string();
    for (name, value) in params {
        let token = format!("{{{}}}", name.as_ref());
        if message.contains(&token) {
            message = message.replace(&token, &value.to_string());
        }
    }
    message
}
