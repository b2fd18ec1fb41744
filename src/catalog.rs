//! Resource name resolution
//!
//! A [`ResourceCatalog`] turns a short logical resource name into a path
//! under a fixed root directory. It only answers "where would this resource
//! live, and does it exist" — opening the file is the stream source's job,
//! and path/format validation still happens in the loader afterwards.

use std::path::{Path, PathBuf};

use crate::error::{Result, SeqLoadError};

/// Maps logical resource names to filesystem paths under a root directory
///
/// # Examples
///
/// ```no_run
/// use seqload::ResourceCatalog;
///
/// let catalog = ResourceCatalog::new("resources");
/// let path = catalog.resolve("sample.fasta")?;
/// # Ok::<(), seqload::SeqLoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    root: PathBuf,
}

impl ResourceCatalog {
    /// Create a catalog rooted at the given directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The catalog's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a logical name to a path string, failing if no such file
    /// exists under the root
    pub fn resolve(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(SeqLoadError::ResourceNotFound {
                name: name.to_string(),
            });
        }
        Ok(path.to_string_lossy().into_owned())
    }
}
