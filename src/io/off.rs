//! OFF (Geomview object file) list output.
//!
//! Emits the mesh as a single-entry Geomview `LIST` wrapping an OFF object:
//! raw vertex positions followed by per-face vertex index rows. Only the
//! face-vertex structure survives this format; edge adjacency is implicit.
//!
//! Face rows swap the first two stored vertices, so a face stored as
//! `(v0, v1, v2)` is written as `3 v1 v0 v2`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TopologyError};
use crate::topology::IndexedMesh;

/// Serialize a mesh to the OFF list format.
pub fn write<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "LIST")?;
    writeln!(writer, "{{")?;
    writeln!(writer, "OFF {} {} 0", mesh.num_vertices(), mesh.num_faces())?;

    for v in mesh.vertex_ids() {
        let p = mesh.position(v);
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }

    for f in mesh.face_ids() {
        let [v0, v1, v2] = mesh.face(f).vertices;
        writeln!(writer, "3 {} {} {}", v1.index(), v0.index(), v2.index())?;
    }

    writeln!(writer, "}}")
}

/// Save a mesh to an OFF list file.
///
/// # Example
///
/// ```no_run
/// use trellis::io::{off, stl};
///
/// let mesh = stl::load("model.stl").unwrap();
/// off::save(&mesh, "model.off").unwrap();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::build_from_soup;
    use nalgebra::Point3;

    #[test]
    fn test_single_triangle_exact_text() {
        let soup = vec![[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]];
        let mesh = build_from_soup(&soup);

        let mut bytes = Vec::new();
        write(&mesh, &mut bytes).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "LIST\n{\nOFF 3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 1 0 2\n}\n"
        );
    }

    #[test]
    fn test_positions_are_raw() {
        // No bounding-box normalization in this format.
        let soup = vec![[
            Point3::new(-3.5, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 8.25, 0.0),
        ]];
        let mesh = build_from_soup(&soup);

        let mut bytes = Vec::new();
        write(&mesh, &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("-3.5 0 0\n"));
        assert!(text.contains("0 8.25 0\n"));
    }

    #[test]
    fn test_face_rows_swap_first_two() {
        let soup = vec![
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            [
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
        ];
        let mesh = build_from_soup(&soup);

        let mut bytes = Vec::new();
        write(&mesh, &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("3 ")).collect();

        // Stored windings are (0,1,2) and (1,2,3).
        assert_eq!(rows, vec!["3 1 0 2", "3 2 1 3"]);
    }
}
