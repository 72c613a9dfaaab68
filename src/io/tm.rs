//! TM (TMFF1) format support.
//!
//! An ASCII format that serializes the full recovered topology: the
//! normalized bounding box, then every vertex, edge, and face together with
//! its adjacency lists. Unlike OFF, adjacency is explicit in the file, so a
//! consumer gets the mesh graph without rebuilding it.
//!
//! # Layout
//!
//! ```text
//! TMFF1
//! <min/scale> 0 0 0
//! <max/scale> 1 1 1
//! <scale>     1 1 1
//! <num_vertices> <num_edges> <num_faces>
//! per vertex: position/scale + "0.5 0.5 0.5"; "<n_faces> <n_edges>";
//!             face list; edge list
//! per edge:   "<n_faces>"; face list; the 2 endpoint vertices
//! per face:   the 3 edges; the 3 vertices
//! ```
//!
//! `scale` is the bounding box half-extent per axis. The division is not
//! guarded: a mesh that is flat along an axis produces non-finite values on
//! that axis. Every sequence of numbers is one space-separated line; an
//! empty sequence is a bare newline.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use nalgebra::{Point3, Vector3};

use crate::error::{Result, TopologyError};
use crate::topology::IndexedMesh;

/// Write one space-separated row of numbers with a trailing newline.
///
/// An empty sequence still emits the newline.
fn write_row<W: Write, I>(writer: &mut W, items: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut first = true;
    for item in items {
        if first {
            write!(writer, "{}", item)?;
            first = false;
        } else {
            write!(writer, " {}", item)?;
        }
    }
    writeln!(writer)
}

/// Serialize a mesh to the TM format.
pub fn write<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "TMFF1")?;

    let (min, max) = mesh
        .bounding_box()
        .unwrap_or((Point3::origin(), Point3::origin()));
    let scale: Vector3<f64> = (max - min) / 2.0;

    write_row(
        writer,
        [min.x / scale.x, min.y / scale.y, min.z / scale.z, 0.0, 0.0, 0.0],
    )?;
    write_row(
        writer,
        [max.x / scale.x, max.y / scale.y, max.z / scale.z, 1.0, 1.0, 1.0],
    )?;
    write_row(writer, [scale.x, scale.y, scale.z, 1.0, 1.0, 1.0])?;

    write_row(
        writer,
        [mesh.num_vertices(), mesh.num_edges(), mesh.num_faces()],
    )?;

    for v in mesh.vertex_ids() {
        let vertex = mesh.vertex(v);
        let p = vertex.position;
        write_row(
            writer,
            [p.x / scale.x, p.y / scale.y, p.z / scale.z, 0.5, 0.5, 0.5],
        )?;
        write_row(writer, [vertex.faces.len(), vertex.edges.len()])?;
        write_row(writer, vertex.faces.iter().map(|f| f.index()))?;
        write_row(writer, vertex.edges.iter().map(|e| e.index()))?;
    }

    for e in mesh.edge_ids() {
        let edge = mesh.edge(e);
        write_row(writer, [edge.faces.len()])?;
        write_row(writer, edge.faces.iter().map(|f| f.index()))?;
        write_row(writer, edge.vertices.iter().map(|v| v.index()))?;
    }

    for f in mesh.face_ids() {
        let face = mesh.face(f);
        write_row(writer, face.edges.iter().map(|e| e.index()))?;
        write_row(writer, face.vertices.iter().map(|v| v.index()))?;
    }

    Ok(())
}

/// Save a mesh to a TM file.
///
/// # Example
///
/// ```no_run
/// use trellis::io::{stl, tm};
///
/// let mesh = stl::load("model.stl").unwrap();
/// tm::save(&mesh, "model.tm").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write(mesh, &mut writer).map_err(|e| TopologyError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
