//! Mesh file I/O.
//!
//! STL triangle soup comes in; the recovered topology goes out as TM or
//! OFF. The direction is fixed per format:
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | STL | `.stl` | ✓ | ✗ | Binary and ASCII triangle soup |
//! | TM (TMFF1) | `.tm` | ✗ | ✓ | Full topology with adjacency |
//! | OFF list | `.off` | ✗ | ✓ | Geomview face-vertex list |
//!
//! # Usage
//!
//! ```no_run
//! use trellis::io::{load, save};
//!
//! let mesh = load("scan.stl").unwrap();
//! save(&mesh, "scan.tm").unwrap();
//! ```

pub mod off;
pub mod stl;
pub mod tm;

use std::path::Path;

use crate::error::{Result, TopologyError};
use crate::topology::IndexedMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// STL (stereolithography) triangle soup.
    Stl,
    /// TM (TMFF1) indexed topology format.
    Tm,
    /// Geomview OFF list format.
    Off,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "stl" => Some(Format::Stl),
            "tm" => Some(Format::Tm),
            "off" => Some(Format::Off),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

fn detect<P: AsRef<Path>>(path: P) -> Result<Format> {
    let path = path.as_ref();
    Format::from_path(path).ok_or_else(|| TopologyError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a mesh from a file with automatic format detection.
///
/// Only STL input is supported; the topology is reconstructed on load.
pub fn load<P: AsRef<Path>>(path: P) -> Result<IndexedMesh> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Stl => stl::load(path),
        Format::Tm | Format::Off => Err(TopologyError::LoadError {
            path: path.to_path_buf(),
            message: "output-only format".to_string(),
        }),
    }
}

/// Save a mesh to a file with automatic format detection.
pub fn save<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Tm => tm::save(mesh, path),
        Format::Off => off::save(mesh, path),
        Format::Stl => Err(TopologyError::SaveError {
            path: path.to_path_buf(),
            message: "STL saving is not supported".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_extension("stl"), Some(Format::Stl));
        assert_eq!(Format::from_extension("STL"), Some(Format::Stl));
        assert_eq!(Format::from_extension("tm"), Some(Format::Tm));
        assert_eq!(Format::from_extension("off"), Some(Format::Off));
        assert_eq!(Format::from_extension("obj"), None);

        assert_eq!(Format::from_path("a/b/model.tm"), Some(Format::Tm));
        assert_eq!(Format::from_path("model"), None);
    }

    #[test]
    fn test_unsupported_directions() {
        let mesh = IndexedMesh::new();
        assert!(save(&mesh, "out.stl").is_err());
        assert!(load("in.off").is_err());
    }
}
