// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binding properties onto typed structures.
//!
//! A [`Schema`] is an explicit table from property paths to field setters.
//! Schemas compose: a nested schema binds a sub-structure under a prefix, and a
//! sequence schema binds one element per index (`prefix.0`, `prefix.1`, ...).

use crate::domain::property_key::join;
use crate::domain::{ConfigError, PropertyKey, PropertyMap, Result, ScalarValue};

type Apply<T> = Box<dyn Fn(&mut T, &PropertyMap, &str) -> Result<()> + Send + Sync>;

struct Field<T> {
    path: String,
    apply: Apply<T>,
}

/// Resolves a field path below `prefix`; an empty path names the prefix itself.
fn resolve(prefix: &str, path: &str) -> String {
    if path.is_empty() {
        prefix.to_string()
    } else {
        join(prefix, path)
    }
}

/// Counts contiguous sequence elements stored below `prefix`, starting at index 0.
fn element_count(props: &PropertyMap, prefix: &str) -> usize {
    let base = PropertyKey::from(prefix);
    let mut count = 0;
    loop {
        let element = base.index(count);
        if !props.keys().any(|k| element.contains(k)) {
            return count;
        }
        count += 1;
    }
}

/// A declarative mapping from property paths to the fields of `T`.
///
/// Properties that are absent or null leave their field untouched. A property
/// of the wrong runtime type fails with [`ConfigError::TypeMismatch`]. String
/// fields accept any non-null scalar in its text form, and float fields accept
/// integers.
///
/// # Examples
///
/// ```
/// use flatcfg::binding::Schema;
/// use flatcfg::domain::{PropertyMap, ScalarValue};
///
/// #[derive(Default)]
/// struct Database {
///     host: String,
///     port: i64,
/// }
///
/// #[derive(Default)]
/// struct AppConfig {
///     name: String,
///     debug: bool,
///     database: Database,
///     tags: Vec<String>,
/// }
///
/// let schema = Schema::new()
///     .string("app.name", |c: &mut AppConfig, v| c.name = v)
///     .boolean("app.debug", |c, v| c.debug = v)
///     .nested(
///         "database",
///         Schema::new()
///             .string("host", |d: &mut Database, v| d.host = v)
///             .integer("port", |d, v| d.port = v),
///         |c| &mut c.database,
///     )
///     .strings("app.tags", |c, v| c.tags = v);
///
/// let props: PropertyMap = [
///     ("app.name", ScalarValue::from("demo")),
///     ("app.debug", ScalarValue::from(true)),
///     ("database.host", ScalarValue::from("localhost")),
///     ("database.port", ScalarValue::from(5432)),
///     ("app.tags.0", ScalarValue::from("a")),
///     ("app.tags.1", ScalarValue::from("b")),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut config = AppConfig::default();
/// schema.bind(&props, &mut config).unwrap();
///
/// assert_eq!(config.name, "demo");
/// assert!(config.debug);
/// assert_eq!(config.database.port, 5432);
/// assert_eq!(config.tags, vec!["a", "b"]);
/// ```
pub struct Schema<T> {
    fields: Vec<Field<T>>,
}

impl<T: 'static> Schema<T> {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Schema { fields: Vec::new() }
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn field<F>(mut self, path: &str, apply: F) -> Self
    where
        F: Fn(&mut T, &PropertyMap, &str) -> Result<()> + Send + Sync + 'static,
    {
        self.fields.push(Field {
            path: path.to_string(),
            apply: Box::new(apply),
        });
        self
    }

    /// Binds the raw scalar at `path`, whatever its type.
    pub fn scalar(self, path: &str, set: fn(&mut T, ScalarValue)) -> Self {
        self.field(path, move |target, props, key| {
            if let Some(value) = props.get(key) {
                set(target, value.clone());
            }
            Ok(())
        })
    }

    /// Binds a string field.
    pub fn string(self, path: &str, set: fn(&mut T, String)) -> Self {
        self.field(path, move |target, props, key| {
            match props.get(key) {
                None | Some(ScalarValue::Null) => {}
                Some(ScalarValue::String(s)) => set(target, s.clone()),
                Some(other) => set(target, other.to_string()),
            }
            Ok(())
        })
    }

    /// Binds an integer field.
    pub fn integer(self, path: &str, set: fn(&mut T, i64)) -> Self {
        self.field(path, move |target, props, key| {
            match props.get(key) {
                None | Some(ScalarValue::Null) => {}
                Some(ScalarValue::Integer(n)) => set(target, *n),
                Some(other) => return Err(mismatch(key, "integer", other)),
            }
            Ok(())
        })
    }

    /// Binds a boolean field.
    pub fn boolean(self, path: &str, set: fn(&mut T, bool)) -> Self {
        self.field(path, move |target, props, key| {
            match props.get(key) {
                None | Some(ScalarValue::Null) => {}
                Some(ScalarValue::Boolean(b)) => set(target, *b),
                Some(other) => return Err(mismatch(key, "boolean", other)),
            }
            Ok(())
        })
    }

    /// Binds a float field. Integers are widened.
    pub fn float(self, path: &str, set: fn(&mut T, f64)) -> Self {
        self.field(path, move |target, props, key| {
            match props.get(key) {
                None | Some(ScalarValue::Null) => {}
                Some(ScalarValue::Float(f)) => set(target, *f),
                Some(ScalarValue::Integer(n)) => set(target, *n as f64),
                Some(other) => return Err(mismatch(key, "float", other)),
            }
            Ok(())
        })
    }

    /// Binds a sub-structure in place, with its own schema rooted at `prefix`.
    pub fn nested<U: 'static>(
        self,
        prefix: &str,
        schema: Schema<U>,
        access: fn(&mut T) -> &mut U,
    ) -> Self {
        self.field(prefix, move |target, props, key| {
            schema.bind_at(props, key, access(target))
        })
    }

    /// Binds a sequence, one element per contiguous index below `prefix`.
    ///
    /// Each element starts from `U::default()` and is bound with `schema` rooted
    /// at `prefix.<index>`. When no element is present the field is untouched.
    pub fn sequence<U: Default + 'static>(
        self,
        prefix: &str,
        schema: Schema<U>,
        set: fn(&mut T, Vec<U>),
    ) -> Self {
        self.field(prefix, move |target, props, key| {
            let count = element_count(props, key);
            if count == 0 {
                return Ok(());
            }
            let mut items = Vec::with_capacity(count);
            for index in 0..count {
                let mut item = U::default();
                schema.bind_at(props, &join(key, &index.to_string()), &mut item)?;
                items.push(item);
            }
            set(target, items);
            Ok(())
        })
    }

    /// Binds a sequence of strings.
    pub fn strings(self, prefix: &str, set: fn(&mut T, Vec<String>)) -> Self {
        self.sequence(
            prefix,
            Schema::new().string("", |s: &mut String, v| *s = v),
            set,
        )
    }

    /// Binds a sequence of integers.
    pub fn integers(self, prefix: &str, set: fn(&mut T, Vec<i64>)) -> Self {
        self.sequence(
            prefix,
            Schema::new().integer("", |n: &mut i64, v| *n = v),
            set,
        )
    }

    /// Copies every declared property of `props` into `target`.
    ///
    /// Fields are applied in declaration order; the first failure stops binding.
    pub fn bind(&self, props: &PropertyMap, target: &mut T) -> Result<()> {
        self.bind_at(props, "", target)
    }

    fn bind_at(&self, props: &PropertyMap, prefix: &str, target: &mut T) -> Result<()> {
        for field in &self.fields {
            let key = resolve(prefix, &field.path);
            (field.apply)(target, props, &key)?;
        }
        Ok(())
    }
}

impl<T: 'static> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn mismatch(key: &str, expected: &'static str, found: &ScalarValue) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Server {
        host: String,
        port: i64,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Settings {
        name: String,
        ratio: f64,
        enabled: bool,
        servers: Vec<Server>,
        ports: Vec<i64>,
        raw: ScalarValue,
    }

    fn server_schema() -> Schema<Server> {
        Schema::new()
            .string("host", |s: &mut Server, v| s.host = v)
            .integer("port", |s, v| s.port = v)
    }

    fn schema() -> Schema<Settings> {
        Schema::new()
            .string("name", |s: &mut Settings, v| s.name = v)
            .float("ratio", |s, v| s.ratio = v)
            .boolean("enabled", |s, v| s.enabled = v)
            .sequence("servers", server_schema(), |s, v| s.servers = v)
            .integers("ports", |s, v| s.ports = v)
            .scalar("raw", |s, v| s.raw = v)
    }

    fn props(entries: Vec<(&str, ScalarValue)>) -> PropertyMap {
        entries.into_iter().collect()
    }

    #[test]
    fn test_bind_scalars() {
        let mut settings = Settings::default();
        schema()
            .bind(
                &props(vec![
                    ("name", "demo".into()),
                    ("ratio", 2.into()),
                    ("enabled", true.into()),
                    ("raw", ScalarValue::Float(0.5)),
                ]),
                &mut settings,
            )
            .unwrap();

        assert_eq!(settings.name, "demo");
        assert_eq!(settings.ratio, 2.0);
        assert!(settings.enabled);
        assert_eq!(settings.raw, ScalarValue::Float(0.5));
    }

    #[test]
    fn test_missing_and_null_leave_fields_untouched() {
        let mut settings = Settings {
            name: "keep".to_string(),
            ratio: 1.5,
            ..Settings::default()
        };
        schema()
            .bind(&props(vec![("name", ScalarValue::Null)]), &mut settings)
            .unwrap();

        assert_eq!(settings.name, "keep");
        assert_eq!(settings.ratio, 1.5);
    }

    #[test]
    fn test_string_field_accepts_rendered_scalars() {
        let mut settings = Settings::default();
        schema()
            .bind(&props(vec![("name", 1234.into())]), &mut settings)
            .unwrap();
        assert_eq!(settings.name, "1234");
    }

    #[test]
    fn test_type_mismatch() {
        let mut settings = Settings::default();
        let result = schema().bind(&props(vec![("enabled", "yes".into())]), &mut settings);

        match result {
            Err(ConfigError::TypeMismatch {
                key,
                expected,
                found,
            }) => {
                assert_eq!(key, "enabled");
                assert_eq!(expected, "boolean");
                assert_eq!(found, "string");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_bind_sequence_of_structs() {
        let mut settings = Settings::default();
        schema()
            .bind(
                &props(vec![
                    ("servers.0.host", "a".into()),
                    ("servers.0.port", 1.into()),
                    ("servers.1.host", "b".into()),
                ]),
                &mut settings,
            )
            .unwrap();

        assert_eq!(
            settings.servers,
            vec![
                Server {
                    host: "a".to_string(),
                    port: 1
                },
                Server {
                    host: "b".to_string(),
                    port: 0
                },
            ]
        );
    }

    #[test]
    fn test_sequence_stops_at_first_gap() {
        let mut settings = Settings::default();
        schema()
            .bind(
                &props(vec![("ports.0", 80.into()), ("ports.2", 8080.into())]),
                &mut settings,
            )
            .unwrap();
        assert_eq!(settings.ports, vec![80]);
    }

    #[test]
    fn test_sequence_ignores_text_prefix_siblings() {
        let mut settings = Settings::default();
        schema()
            .bind(&props(vec![("ports.0x", 1.into())]), &mut settings)
            .unwrap();
        assert!(settings.ports.is_empty());
    }

    #[test]
    fn test_sequence_element_type_mismatch_reports_full_key() {
        let mut settings = Settings::default();
        let result = schema().bind(
            &props(vec![("servers.0.port", "eighty".into())]),
            &mut settings,
        );
        assert!(matches!(
            result,
            Err(ConfigError::TypeMismatch { ref key, .. }) if key == "servers.0.port"
        ));
    }

    #[test]
    fn test_nested_binds_in_place() {
        #[derive(Default)]
        struct Outer {
            primary: Server,
        }

        let schema = Schema::new().nested("primary", server_schema(), |o: &mut Outer| {
            &mut o.primary
        });
        let mut outer = Outer {
            primary: Server {
                host: "default".to_string(),
                port: 0,
            },
        };
        schema
            .bind(&props(vec![("primary.port", 443.into())]), &mut outer)
            .unwrap();

        assert_eq!(outer.primary.host, "default");
        assert_eq!(outer.primary.port, 443);
    }

    #[test]
    fn test_schema_len() {
        assert_eq!(schema().len(), 6);
        assert!(Schema::<Server>::default().is_empty());
    }
}
