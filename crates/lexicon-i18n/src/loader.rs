//! Bundle loading with a per-path parse cache

use crate::bundle::Bundle;
use crate::error::{I18nError, I18nResult};
use crate::source::SourceFormat;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Reads and flattens translation sources, parsing each path at most once.
///
/// Paths are cached exactly as given; two spellings of the same file are two
/// cache entries.
#[derive(Debug, Default)]
pub struct BundleLoader {
    cache: HashMap<PathBuf, Arc<Bundle>>,
}

impl BundleLoader {
    /// Create a loader with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the bundle for `path`, reusing an earlier parse when available.
    ///
    /// Nothing is cached when reading or parsing fails.
    pub fn load(&mut self, path: &Path) -> I18nResult<Arc<Bundle>> {
        if let Some(bundle) = self.cache.get(path) {
            debug!("Reusing cached bundle for {:?}", path);
            return Ok(Arc::clone(bundle));
        }

        let bundle = Arc::new(Self::read(path)?);
        self.cache.insert(path.to_path_buf(), Arc::clone(&bundle));
        Ok(bundle)
    }

    /// Read and flatten a source without touching the cache
    pub fn read(path: &Path) -> I18nResult<Bundle> {
        debug!("Loading translation source: {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| I18nError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

        let format = SourceFormat::from_path(path);
        let source = format.parse(&content).map_err(|message| {
            error!("Failed to parse translation source {:?}: {}", path, message);
            I18nError::SourceParse {
                path: path.to_path_buf(),
                format,
                message,
            }
        })?;

        let bundle = Bundle::from_source(&source);
        info!("Parsed {} translation keys from {:?}", bundle.len(), path);
        Ok(bundle)
    }

    /// Get the cached bundle for a path
    pub fn cached(&self, path: &Path) -> Option<&Arc<Bundle>> {
        self.cache.get(path)
    }

    /// Number of parsed sources
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no source has been parsed yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Paths of every parsed source
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.cache.keys().map(PathBuf::as_path)
    }
}
