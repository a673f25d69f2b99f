// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment placeholders inside string properties.
//!
//! A placeholder has the form `${NAME}` or `${NAME:default}`. Everything after
//! the first colon is the default, colons included.

use crate::domain::{PropertyMap, ScalarValue};
use crate::ports::Environment;

const OPEN: &str = "${";
const CLOSE: char = '}';

/// A parsed `${name:default}` expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Environment variable name, possibly empty
    pub name: &'a str,
    /// Fallback used when the variable is unset or empty
    pub default: &'a str,
}

impl<'a> Placeholder<'a> {
    /// Parses the text between `${` and `}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatcfg::engine::Placeholder;
    ///
    /// let p = Placeholder::parse("DB_URL:postgres://localhost:5432");
    /// assert_eq!(p.name, "DB_URL");
    /// assert_eq!(p.default, "postgres://localhost:5432");
    /// ```
    pub fn parse(body: &'a str) -> Self {
        match body.split_once(':') {
            Some((name, default)) => Placeholder { name, default },
            None => Placeholder {
                name: body,
                default: "",
            },
        }
    }

    /// Looks the variable up and coerces the result.
    ///
    /// An unset or empty variable falls back to the default. The text is then
    /// coerced with [`ScalarValue::coerce`].
    pub fn resolve(&self, env: &dyn Environment) -> ScalarValue {
        match env.non_empty_var(self.name) {
            Some(value) => ScalarValue::coerce(&value),
            None => ScalarValue::coerce(self.default),
        }
    }
}

/// Returns the body of every `${...}` in `text`, left to right.
///
/// An opening `${` without a closing `}` is not a placeholder.
pub fn extract_placeholders(text: &str) -> Vec<&str> {
    text.split(OPEN)
        .skip(1)
        .filter_map(|part| part.find(CLOSE).map(|end| &part[..end]))
        .collect()
}

/// Returns the body when the whole string is exactly one placeholder.
fn whole_placeholder(text: &str) -> Option<&str> {
    let body = text.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
    if body.contains(OPEN) || body.contains(CLOSE) {
        return None;
    }
    Some(body)
}

/// Resolves the placeholders in a single string value.
///
/// Returns `None` when the string contains no placeholder. A string that is a
/// single bare placeholder resolves to the coerced value, which may be a boolean
/// or an integer. Otherwise every placeholder is rendered as text and spliced
/// back in, and the result stays a string.
///
/// # Examples
///
/// ```
/// use flatcfg::adapters::StaticEnvironment;
/// use flatcfg::domain::ScalarValue;
/// use flatcfg::engine::resolve_value;
///
/// let env = StaticEnvironment::from([("HOST", "db")]);
///
/// assert_eq!(resolve_value("${PORT:5432}", &env), Some(ScalarValue::Integer(5432)));
/// assert_eq!(
///     resolve_value("${HOST}:${PORT:5432}", &env),
///     Some(ScalarValue::from("db:5432"))
/// );
/// assert_eq!(resolve_value("plain", &env), None);
/// ```
pub fn resolve_value(text: &str, env: &dyn Environment) -> Option<ScalarValue> {
    if !text.contains(OPEN) {
        return None;
    }

    if let Some(body) = whole_placeholder(text) {
        return Some(Placeholder::parse(body).resolve(env));
    }

    let mut result = text.to_string();
    for body in extract_placeholders(text) {
        let rendered = Placeholder::parse(body).resolve(env).to_string();
        let token = format!("{}{}{}", OPEN, body, CLOSE);
        result = result.replacen(&token, &rendered, 1);
    }
    Some(ScalarValue::String(result))
}

/// Replaces placeholders in every string property, in place.
///
/// Non-string properties and strings without `${` are left untouched. Never fails.
pub fn resolve_placeholders(props: &mut PropertyMap, env: &dyn Environment) {
    for (key, value) in props.iter_mut() {
        let ScalarValue::String(text) = value else {
            continue;
        };
        if let Some(resolved) = resolve_value(text, env) {
            tracing::trace!(
                "Resolved placeholder in '{}' to a {} value",
                key,
                resolved.type_name()
            );
            *value = resolved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticEnvironment;

    #[test]
    fn test_trailing_brace_is_literal_text() {
        let env = StaticEnvironment::from([("A", "x")]);

        assert_eq!(resolve_value("${A}}", &env), Some(ScalarValue::from("x}")));
        assert_eq!(resolve_value("${A:b}c}", &env), Some(ScalarValue::from("xc}")));
        assert_eq!(
            resolve_value("${MISSING:b}c}", &env),
            Some(ScalarValue::from("bc}"))
        );
    }

    fn env() -> StaticEnvironment {
        StaticEnvironment::from([
            ("FOO", "bar"),
            ("ENABLED", "true"),
            ("PORT", "8080"),
            ("EMPTY", ""),
        ])
    }

    #[test]
    fn test_parse_without_default() {
        assert_eq!(
            Placeholder::parse("FOO"),
            Placeholder {
                name: "FOO",
                default: ""
            }
        );
    }

    #[test]
    fn test_parse_keeps_colons_after_first() {
        let p = Placeholder::parse("URL:http://x:1");
        assert_eq!(p.name, "URL");
        assert_eq!(p.default, "http://x:1");
    }

    #[test]
    fn test_parse_empty_name() {
        let p = Placeholder::parse(":fallback");
        assert_eq!(p.name, "");
        assert_eq!(p.default, "fallback");
    }

    #[test]
    fn test_extract_placeholders() {
        assert_eq!(
            extract_placeholders("a ${X} b ${Y:1} c ${unterminated"),
            vec!["X", "Y:1"]
        );
    }

    #[test]
    fn test_whole_value_string() {
        let mut props: PropertyMap = [("k", "${FOO}")].into_iter().collect();
        resolve_placeholders(&mut props, &env());
        assert_eq!(props.get("k"), Some(&ScalarValue::from("bar")));
    }

    #[test]
    fn test_whole_value_default_coerces_to_integer() {
        let mut props: PropertyMap = [("k", "${UNSET_VARIABLE:42}")].into_iter().collect();
        resolve_placeholders(&mut props, &env());
        assert_eq!(props.get("k"), Some(&ScalarValue::Integer(42)));
    }

    #[test]
    fn test_whole_value_coerces_boolean_from_environment() {
        assert_eq!(
            resolve_value("${ENABLED:false}", &env()),
            Some(ScalarValue::Boolean(true))
        );
    }

    #[test]
    fn test_empty_variable_falls_back_to_default() {
        assert_eq!(
            resolve_value("${EMPTY:fallback}", &env()),
            Some(ScalarValue::from("fallback"))
        );
    }

    #[test]
    fn test_unset_without_default_is_empty_string() {
        assert_eq!(resolve_value("${NOPE}", &env()), Some(ScalarValue::from("")));
    }

    #[test]
    fn test_inline_substitution_stays_string() {
        assert_eq!(
            resolve_value("http://${FOO}:${PORT}/", &env()),
            Some(ScalarValue::from("http://bar:8080/"))
        );
    }

    #[test]
    fn test_inline_renders_coerced_default() {
        assert_eq!(
            resolve_value("retries=${RETRIES:03}", &env()),
            Some(ScalarValue::from("retries=3"))
        );
    }

    #[test]
    fn test_two_adjacent_placeholders_are_inline() {
        assert_eq!(
            resolve_value("${FOO}${PORT}", &env()),
            Some(ScalarValue::from("bar8080"))
        );
    }

    #[test]
    fn test_repeated_placeholder_replaced_each_time() {
        assert_eq!(
            resolve_value("${FOO}-${FOO}", &env()),
            Some(ScalarValue::from("bar-bar"))
        );
    }

    #[test]
    fn test_non_string_values_untouched() {
        let mut props: PropertyMap = [
            ("n", ScalarValue::Integer(1)),
            ("plain", ScalarValue::from("no placeholders")),
            ("null", ScalarValue::Null),
        ]
        .into_iter()
        .collect();
        let before = props.clone();
        resolve_placeholders(&mut props, &env());
        assert_eq!(props, before);
    }

    #[test]
    fn test_unterminated_placeholder_left_as_text() {
        assert_eq!(
            resolve_value("${FOO", &env()),
            Some(ScalarValue::from("${FOO"))
        );
    }
}
