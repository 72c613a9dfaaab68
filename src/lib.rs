//! # Trellis
//!
//! Triangle-soup to indexed-topology conversion.
//!
//! Trellis takes a raw triangle soup — as produced by an STL scanner or
//! export, where every triangle repeats its own corner coordinates — and
//! recovers an indexed polygon mesh with explicit adjacency: coincident
//! corners are welded into shared vertices, shared sides are merged into
//! single edges, and every vertex, edge, and face records the entities
//! touching it. The result can be emitted as TM (TMFF1) or Geomview OFF.
//!
//! ## Features
//!
//! - **Single-pass topology reconstruction**: one forward scan over the soup
//! - **Exact welding**: corners merge iff their coordinates are bit-identical
//! - **Index-based adjacency**: flat, relocatable collections, no pointers
//! - **No manifold assumption**: boundary and non-manifold edges are
//!   represented as given, never repaired
//!
//! ## Quick Start
//!
//! ```no_run
//! use trellis::prelude::*;
//!
//! // Load an STL file; topology is reconstructed on load
//! let mesh = trellis::io::load("scan.stl").unwrap();
//!
//! println!("Vertices: {}", mesh.num_vertices());
//! println!("Edges: {}", mesh.num_edges());
//! println!("Faces: {}", mesh.num_faces());
//!
//! // Emit the full topology
//! trellis::io::save(&mesh, "scan.tm").unwrap();
//! ```
//!
//! ## Building from a Soup in Memory
//!
//! ```
//! use trellis::prelude::*;
//! use nalgebra::Point3;
//!
//! // Two triangles sharing an edge; corners are repeated, not indexed
//! let soup = vec![
//!     [
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     [
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!     ],
//! ];
//!
//! let mesh = build_from_soup(&soup);
//! assert_eq!(mesh.num_vertices(), 4);
//! assert_eq!(mesh.num_edges(), 5);
//! assert_eq!(mesh.num_faces(), 2);
//! ```
//!
//! ## Walking the Adjacency
//!
//! ```
//! use trellis::prelude::*;
//! use nalgebra::Point3;
//!
//! # let soup = vec![[
//! #     Point3::new(0.0, 0.0, 0.0),
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(0.0, 1.0, 0.0),
//! # ]];
//! let mesh = build_from_soup(&soup);
//!
//! for e in mesh.edge_ids() {
//!     let edge = mesh.edge(e);
//!     println!("{:?}: {:?} borders {} face(s)", e, edge.vertices, edge.faces.len());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod topology;

/// Prelude module for convenient imports.
///
/// ```
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, TopologyError};
    pub use crate::topology::{
        build_from_soup, Edge, EdgeId, Face, FaceId, IndexedMesh, TopologyBuilder, Vertex,
        VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
