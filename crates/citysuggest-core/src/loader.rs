// crates/citysuggest-core/src/loader.rs

//! # Catalog Loader
//!
//! Reads catalogs (a JSON array of labels) from disk. Files ending in
//! `.gz` are decompressed on the fly when the `compact` feature is on.

use crate::catalog::CityCatalog;
use crate::error::Result;
use std::io::Read;

#[cfg(feature = "json")]
use crate::error::CityError;
#[cfg(feature = "json")]
use std::{fs::File, io::BufReader, path::Path};
#[cfg(feature = "json")]
use tracing::debug;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension asks for it.
#[cfg(feature = "json")]
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CityError::NotFound(format!("File not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    #[cfg(feature = "compact")]
    {
        if gzipped {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    #[cfg(not(feature = "compact"))]
    {
        if gzipped {
            return Err(CityError::NotFound(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

impl CityCatalog {
    /// Parse a JSON array of labels from any reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let labels: Vec<String> = serde_json::from_reader(reader)?;
        Ok(Self::from_labels(labels))
    }

    /// Load a catalog from a `.json` (or, with `compact`, `.json.gz`) file.
    #[cfg(feature = "json")]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let catalog = Self::from_json_reader(reader)?;
        debug!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}
