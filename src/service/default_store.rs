// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration store implementation.
//!
//! The store owns the live property map and connects it to files on disk: it
//! picks the first readable candidate file, runs the load pipeline and merges
//! the result, and later writes the reconstructed document back.

use crate::adapters::file::{self, read_config_file, write_config_file};
use crate::adapters::ProcessEnvironment;
use crate::binding::Schema;
use crate::domain::{ConfigError, DocumentValue, PropertyMap, PropertyStore, Result};
use crate::engine::{load_properties, unflatten};
use crate::ports::{DocumentReader, DocumentWriter, Environment};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default implementation of the configuration store.
///
/// # Examples
///
/// ```rust
/// use flatcfg::prelude::*;
/// use flatcfg::service::DefaultConfigStore;
///
/// # fn main() -> Result<()> {
/// let mut store = DefaultConfigStore::builder()
///     .with_default_formats()
///     .with_environment(std::sync::Arc::new(StaticEnvironment::new()))
///     .build()?;
///
/// store.load_str(r#"{"server": {"port": 8080}}"#, "json")?;
/// assert_eq!(store.get("server.port")?, ScalarValue::Integer(8080));
/// # Ok(())
/// # }
/// ```
pub struct DefaultConfigStore {
    /// The live flat property map
    properties: PropertyMap,
    /// Candidate files, tried in order
    sources: Vec<PathBuf>,
    /// Where `save` writes; set by the first successful read if not given
    destination: Option<PathBuf>,
    readers: Vec<Arc<dyn DocumentReader>>,
    writers: Vec<Arc<dyn DocumentWriter>>,
    environment: Arc<dyn Environment>,
}

impl DefaultConfigStore {
    /// Creates an empty store with no formats, reading the process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatcfg::service::DefaultConfigStore;
    ///
    /// let store = DefaultConfigStore::new();
    /// assert!(store.destination().is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            properties: PropertyMap::new(),
            sources: Vec::new(),
            destination: None,
            readers: Vec::new(),
            writers: Vec::new(),
            environment: Arc::new(ProcessEnvironment::new()),
        }
    }

    /// Creates a new configuration store builder.
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// Creates a store with every enabled format and the OS-appropriate
    /// candidate files (`config.json`, `config.yaml`, `config.yml`).
    ///
    /// Nothing is read until [`read`](Self::read) is called.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use flatcfg::service::DefaultConfigStore;
    ///
    /// # fn main() -> flatcfg::domain::Result<()> {
    /// let mut store = DefaultConfigStore::with_defaults("myapp", "com.example")?;
    /// store.read()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::builder()
            .with_default_formats()
            .with_default_locations(app_name, qualifier)?
            .build()
    }

    /// Returns the candidate source files in the order they are tried.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Appends a candidate source file.
    pub fn add_source(&mut self, path: impl Into<PathBuf>) {
        self.sources.push(path.into());
    }

    /// Returns the file `save` writes to, if known.
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Sets the file `save` writes to. When set, it is also the only file `read` loads.
    pub fn set_destination(&mut self, path: impl Into<PathBuf>) {
        self.destination = Some(path.into());
    }

    fn reader_for(&self, extension: &str) -> Option<&dyn DocumentReader> {
        self.readers
            .iter()
            .find(|r| r.supports(extension))
            .map(|r| r.as_ref())
    }

    fn writer_for(&self, extension: &str) -> Option<&dyn DocumentWriter> {
        self.writers
            .iter()
            .find(|w| w.supports(extension))
            .map(|w| w.as_ref())
    }

    /// Loads the configuration from the first readable source.
    ///
    /// With a destination set, only the destination is read. Otherwise each
    /// candidate is tried in order; files that cannot be read are skipped, and
    /// the first file read becomes the destination. A file that is read but
    /// fails to parse stops the search with its error.
    ///
    /// Loaded properties are merged into the store: new keys are added and
    /// existing keys overwritten, other keys are kept.
    ///
    /// # Errors
    ///
    /// * `NoSourceAvailable` - No candidate could be read
    /// * `UnsupportedFormat` - The file's extension has no registered reader
    /// * `ParseError` - The file content is invalid for its format
    /// * `SourceError` - The destination could not be read
    pub fn read(&mut self) -> Result<()> {
        if let Some(destination) = self.destination.clone() {
            let content = read_config_file(&destination)?;
            return self.load_file(&destination, &content);
        }

        let mut tried = Vec::with_capacity(self.sources.len());
        for candidate in self.sources.clone() {
            match read_config_file(&candidate) {
                Ok(content) => {
                    self.load_file(&candidate, &content)?;
                    self.destination = Some(candidate);
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!("Skipping configuration candidate: {}", e);
                    tried.push(candidate.display().to_string());
                }
            }
        }

        tracing::warn!("No configuration source could be read ({} candidates)", tried.len());
        Err(ConfigError::NoSourceAvailable { tried })
    }

    fn load_file(&mut self, path: &Path, content: &str) -> Result<()> {
        let extension = file::extension(path).unwrap_or_default();
        let reader = self
            .reader_for(&extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
                direction: "reader",
            })?;
        let document = reader.read(content)?;
        let loaded = self.load_document(&document);
        tracing::debug!("Loaded {} properties from {}", loaded, path.display());
        Ok(())
    }

    /// Parses `content` with the reader registered for `extension` and merges it.
    ///
    /// # Errors
    ///
    /// * `UnsupportedFormat` - No reader handles the extension
    /// * `ParseError` - The content is invalid for the format
    pub fn load_str(&mut self, content: &str, extension: &str) -> Result<()> {
        let reader = self
            .reader_for(extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: format!("<inline>.{}", extension),
                direction: "reader",
            })?;
        let document = reader.read(content)?;
        self.load_document(&document);
        Ok(())
    }

    /// Runs the load pipeline on an already parsed document and merges the result.
    ///
    /// Returns the number of properties loaded.
    pub fn load_document(&mut self, document: &DocumentValue) -> usize {
        let loaded = load_properties(document, self.environment.as_ref());
        let count = loaded.len();
        self.properties.merge(loaded);
        count
    }

    /// Reconstructs the nested document from the current properties.
    ///
    /// # Errors
    ///
    /// Returns `AmbiguousPath` if a key is both a value and a parent of other keys.
    pub fn to_document(&self) -> Result<DocumentValue> {
        unflatten(&self.properties)
    }

    /// Writes the current properties to the destination file.
    ///
    /// # Errors
    ///
    /// * `MissingDestination` - No destination was set and nothing was read
    /// * `UnsupportedFormat` - The destination's extension has no registered writer
    /// * `AmbiguousPath` - The properties do not form a tree
    /// * `SerializeError` / `SourceError` - Serialization or the write failed
    pub fn save(&self) -> Result<()> {
        let destination = self
            .destination
            .as_deref()
            .ok_or(ConfigError::MissingDestination)?;
        let extension = file::extension(destination).unwrap_or_default();
        let writer = self
            .writer_for(&extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: destination.display().to_string(),
                direction: "writer",
            })?;

        let content = writer.write(&self.to_document()?)?;
        write_config_file(destination, &content)?;
        tracing::debug!("Saved {} properties to {}", self.properties.len(), destination.display());
        Ok(())
    }

    /// Binds the current properties onto `target` using `schema`.
    pub fn bind<T: 'static>(&self, schema: &Schema<T>, target: &mut T) -> Result<()> {
        schema.bind(&self.properties, target)
    }
}

impl Default for DefaultConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyStore for DefaultConfigStore {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}

/// Builder for constructing a `DefaultConfigStore`.
///
/// # Examples
///
/// ```rust
/// use flatcfg::service::ConfigStoreBuilder;
///
/// # fn main() -> flatcfg::domain::Result<()> {
/// let store = ConfigStoreBuilder::new()
///     .with_default_formats()
///     .with_source("/etc/myapp/config.yaml")
///     .with_source("config.json")
///     .build()?;
/// assert_eq!(store.sources().len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct ConfigStoreBuilder {
    sources: Vec<PathBuf>,
    destination: Option<PathBuf>,
    readers: Vec<Arc<dyn DocumentReader>>,
    writers: Vec<Arc<dyn DocumentWriter>>,
    environment: Option<Arc<dyn Environment>>,
}

impl ConfigStoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            destination: None,
            readers: Vec::new(),
            writers: Vec::new(),
            environment: None,
        }
    }

    /// Appends a candidate source file. Candidates are tried in the order added.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(path.into());
        self
    }

    /// Sets the save destination, which is then also the only file read.
    pub fn with_destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(path.into());
        self
    }

    /// Registers a document reader. Earlier readers win on shared extensions.
    pub fn with_reader(mut self, reader: Arc<dyn DocumentReader>) -> Self {
        self.readers.push(reader);
        self
    }

    /// Registers a document writer. Earlier writers win on shared extensions.
    pub fn with_writer(mut self, writer: Arc<dyn DocumentWriter>) -> Self {
        self.writers.push(writer);
        self
    }

    /// Registers JSON as both reader and writer.
    #[cfg(feature = "json")]
    pub fn with_json(self) -> Self {
        use crate::adapters::JsonFormat;
        let format = Arc::new(JsonFormat::new());
        self.with_reader(format.clone()).with_writer(format)
    }

    /// Registers YAML as both reader and writer.
    #[cfg(feature = "yaml")]
    pub fn with_yaml(self) -> Self {
        use crate::adapters::YamlFormat;
        let format = Arc::new(YamlFormat::new());
        self.with_reader(format.clone()).with_writer(format)
    }

    /// Registers every format enabled by cargo features.
    pub fn with_default_formats(mut self) -> Self {
        #[cfg(feature = "json")]
        {
            self = self.with_json();
        }

        #[cfg(feature = "yaml")]
        {
            self = self.with_yaml();
        }

        self
    }

    /// Uses `environment` for placeholders and overrides instead of the process environment.
    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Appends `config.<ext>` candidates from the OS-appropriate config directory,
    /// one per enabled format.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the config directory cannot be determined.
    pub fn with_default_locations(mut self, app_name: &str, qualifier: &str) -> Result<Self> {
        let candidates = file::default_locations(app_name, qualifier, DEFAULT_EXTENSIONS)?;
        self.sources.extend(candidates);
        Ok(self)
    }

    /// Builds the configuration store.
    pub fn build(self) -> Result<DefaultConfigStore> {
        Ok(DefaultConfigStore {
            properties: PropertyMap::new(),
            sources: self.sources,
            destination: self.destination,
            readers: self.readers,
            writers: self.writers,
            environment: self
                .environment
                .unwrap_or_else(|| Arc::new(ProcessEnvironment::new())),
        })
    }
}

impl Default for ConfigStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Extensions of the default candidate files, in the order they are tried.
#[cfg(all(feature = "json", feature = "yaml"))]
const DEFAULT_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];
#[cfg(all(feature = "json", not(feature = "yaml")))]
const DEFAULT_EXTENSIONS: &[&str] = &["json"];
#[cfg(all(not(feature = "json"), feature = "yaml"))]
const DEFAULT_EXTENSIONS: &[&str] = &["yaml", "yml"];
#[cfg(not(any(feature = "json", feature = "yaml")))]
const DEFAULT_EXTENSIONS: &[&str] = &[];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticEnvironment;
    use crate::domain::ScalarValue;

    fn store_with(env: StaticEnvironment) -> DefaultConfigStore {
        ConfigStoreBuilder::new()
            .with_default_formats()
            .with_environment(Arc::new(env))
            .build()
            .unwrap()
    }

    #[test]
    fn test_store_new_is_empty() {
        let store = DefaultConfigStore::new();
        assert!(store.properties().is_empty());
        assert!(store.sources().is_empty());
        assert!(store.destination().is_none());
    }

    #[test]
    fn test_load_str_merges() {
        let mut store = store_with(StaticEnvironment::new());
        store.set("keep.me", "yes");
        store.set("a", 0);

        store.load_str(r#"{"a": 1, "b": {"c": "x"}}"#, "json").unwrap();

        assert_eq!(store.get("a").unwrap(), ScalarValue::Integer(1));
        assert_eq!(store.get("b.c").unwrap(), ScalarValue::from("x"));
        assert_eq!(store.get("keep.me").unwrap(), ScalarValue::from("yes"));
    }

    #[test]
    fn test_load_str_applies_placeholders_and_overrides() {
        let env = StaticEnvironment::new()
            .with_var("HOST", "db.internal")
            .with_var("DB_PORT", "6543");
        let mut store = store_with(env);

        store
            .load_str("db:\n  host: ${HOST:localhost}\n  port: 5432\n", "yaml")
            .unwrap();

        assert_eq!(store.get("db.host").unwrap(), ScalarValue::from("db.internal"));
        assert_eq!(store.get("db.port").unwrap(), ScalarValue::Integer(6543));
    }

    #[test]
    fn test_load_str_unsupported_format() {
        let mut store = store_with(StaticEnvironment::new());
        let result = store.load_str("a = 1", "toml");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedFormat { direction: "reader", .. })
        ));
    }

    #[test]
    fn test_read_without_sources() {
        let mut store = store_with(StaticEnvironment::new());
        match store.read() {
            Err(ConfigError::NoSourceAvailable { tried }) => assert!(tried.is_empty()),
            other => panic!("expected NoSourceAvailable, got {:?}", other),
        }
    }

    #[test]
    fn test_save_without_destination() {
        let store = store_with(StaticEnvironment::new());
        assert!(matches!(store.save(), Err(ConfigError::MissingDestination)));
    }

    #[test]
    fn test_save_unsupported_writer() {
        let mut store = store_with(StaticEnvironment::new());
        store.set_destination("/tmp/out.ini");
        assert!(matches!(
            store.save(),
            Err(ConfigError::UnsupportedFormat { direction: "writer", .. })
        ));
    }

    #[test]
    fn test_to_document_reports_ambiguity() {
        let mut store = store_with(StaticEnvironment::new());
        store.set("a", 1);
        store.set("a.b", 2);
        assert!(matches!(store.to_document(), Err(ConfigError::AmbiguousPath { .. })));
    }

    #[test]
    fn test_builder_default_locations() {
        let builder = ConfigStoreBuilder::new().with_default_locations("flatcfg-test", "org.test");
        if let Ok(builder) = builder {
            let store = builder.build().unwrap();
            assert_eq!(store.sources().len(), DEFAULT_EXTENSIONS.len());
            assert!(store
                .sources()
                .iter()
                .all(|p| p.file_stem().and_then(|s| s.to_str()) == Some("config")));
        }
    }

    #[test]
    fn test_bind_through_store() {
        #[derive(Default)]
        struct Server {
            port: i64,
        }

        let mut store = store_with(StaticEnvironment::new());
        store.set("server.port", 8080);

        let schema = Schema::new().integer("server.port", |s: &mut Server, v| s.port = v);
        let mut server = Server::default();
        store.bind(&schema, &mut server).unwrap();
        assert_eq!(server.port, 8080);
    }
}
