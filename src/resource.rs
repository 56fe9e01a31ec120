//! Resolution of bundled translation resources by name.

use std::collections::HashMap;
use std::fs::File;
use std::io::{
    self,
    Read,
};
use std::path::{
    Path,
    PathBuf,
};

/// Resolves a resource name (e.g. `fr.json`) to a readable stream.
///
/// `Ok(None)` means the resource does not exist; `Err` means it exists but
/// could not be opened.
pub trait ResourceResolver {
    /// Opens the resource called `name`.
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for &R {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        (**self).open(name)
    }
}

/// Resolves resources as files directly under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    /// Directory holding the resource files.
    root: PathBuf,
}

impl DirectoryResolver {
    /// Creates a resolver rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory resources are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceResolver for DirectoryResolver {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        // Names are plain file names; anything that could escape the root is absent.
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return Ok(None);
        }

        let path = self.root.join(name);
        match File::open(&path) {
            Ok(file) => Ok(Some(Box::new(io::BufReader::new(file)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Resource not found: {:?}", path);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Resolves resources from an in-memory name → bytes map.
///
/// Intended for tables compiled into the binary:
///
/// ```
/// use json_localizer::{EmbeddedResolver, ResourceResolver};
///
/// let resolver = EmbeddedResolver::new()
///     .with("en.json", br#"{"greeting": "Hello"}"#.as_slice());
///
/// assert!(resolver.open("en.json").unwrap().is_some());
/// assert!(resolver.open("fr.json").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResolver {
    /// Resource contents keyed by name.
    resources: HashMap<String, Vec<u8>>,
}

impl EmbeddedResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a resource, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    /// Adds (or replaces) a resource.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), content.into());
    }

    /// Names of all registered resources.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }
}

impl ResourceResolver for EmbeddedResolver {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        Ok(self
            .resources
            .get(name)
            .map(|bytes| -> Box<dyn Read + '_> { Box::new(bytes.as_slice()) }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn read_all(mut reader: Box<dyn Read + '_>) -> String {
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        text
    }

    #[rstest]
    fn test_directory_resolver_opens_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en.json"), r#"{"a": "A"}"#).unwrap();
        let resolver = DirectoryResolver::new(temp_dir.path());

        let reader = resolver.open("en.json").unwrap().unwrap();

        assert_eq!(read_all(reader), r#"{"a": "A"}"#);
    }

    #[rstest]
    fn test_directory_resolver_missing_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = DirectoryResolver::new(temp_dir.path());

        assert!(resolver.open("xx.json").unwrap().is_none());
    }

    #[rstest]
    #[case::empty("")]
    #[case::parent("..")]
    #[case::nested("sub/en.json")]
    #[case::traversal("../en.json")]
    #[case::backslash("sub\\en.json")]
    fn test_directory_resolver_rejects_paths(#[case] name: &str) {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("en.json"), "{}").unwrap();
        let resolver = DirectoryResolver::new(&sub);

        assert!(resolver.open(name).unwrap().is_none());
    }

    #[rstest]
    fn test_embedded_resolver() {
        let mut resolver = EmbeddedResolver::new().with("en.json", "{}");
        resolver.insert("fr.json", br#"{"a": "B"}"#.to_vec());

        assert_eq!(read_all(resolver.open("fr.json").unwrap().unwrap()), r#"{"a": "B"}"#);
        assert!(resolver.open("de.json").unwrap().is_none());

        let mut names: Vec<&str> = resolver.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["en.json", "fr.json"]);
    }

    #[rstest]
    fn test_resolver_by_reference() {
        let resolver = EmbeddedResolver::new().with("en.json", "{}");
        let by_ref = &resolver;
        assert!(by_ref.open("en.json").unwrap().is_some());
    }
}
