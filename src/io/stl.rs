//! STL (stereolithography) triangle-soup reading.
//!
//! STL stores an independent corner triple per triangle with no shared
//! vertex structure, which is exactly the soup the topology builder wants.
//! Decoding goes through the `stl_io` triangle iterator rather than its
//! indexed reader: deduplication is the builder's job, and its welding is
//! exact-identity, not whatever the decoder would choose.
//!
//! Per-triangle normals and the binary format's trailing attribute bytes
//! are ignored. Coordinates are widened from the file's `f32` to `f64`,
//! which is lossless and preserves bit-identity between repeated corners.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{Result, TopologyError};
use crate::topology::{build_from_soup, IndexedMesh};

/// Read a triangle soup from an STL stream.
///
/// Yields the raw corner points of each triangle in file order. Both binary
/// and ASCII STL are accepted. A truncated or malformed stream fails with
/// the underlying decoding error; no partial soup is returned.
pub fn read_soup<R: Read + Seek>(reader: &mut R) -> std::io::Result<Vec<[Point3<f64>; 3]>> {
    let mut soup = Vec::new();
    for triangle in stl_io::create_stl_reader(reader)? {
        let triangle = triangle?;
        let mut corners = [Point3::origin(); 3];
        for (corner, vtx) in corners.iter_mut().zip(&triangle.vertices) {
            *corner = Point3::new(vtx[0] as f64, vtx[1] as f64, vtx[2] as f64);
        }
        soup.push(corners);
    }
    Ok(soup)
}

/// Load an STL file and reconstruct its topology.
///
/// # Example
///
/// ```no_run
/// use trellis::io::stl;
///
/// let mesh = stl::load("model.stl").unwrap();
/// println!("{} vertices", mesh.num_vertices());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<IndexedMesh> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    let soup = read_soup(&mut file).map_err(|e| TopologyError::LoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(build_from_soup(&soup))
}
