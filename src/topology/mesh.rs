//! Indexed mesh data structure.
//!
//! This module provides the entity types produced by the topology builder:
//! vertices, edges, and faces, each carrying explicit adjacency to its
//! neighboring entities by index. The three collections live in an
//! [`IndexedMesh`], which is flat, relocatable data — every cross-reference
//! is an integer index, never a pointer.
//!
//! # Structure
//!
//! - Each **vertex** stores its position plus the faces and edges touching it
//! - Each **edge** stores its two endpoint vertices plus the faces it borders
//! - Each **face** stores its 3 vertices and 3 edges in winding order
//!
//! # Manifoldness
//!
//! No manifold assumption is enforced: an edge may border one face (mesh
//! boundary), two (manifold interior), or more (non-manifold fan). The
//! structure represents whatever the input soup describes.

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, VertexId};

/// A vertex in the indexed mesh.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The 3D position of this vertex.
    pub position: Point3<f64>,

    /// Faces touching this vertex, in order of discovery.
    pub faces: Vec<FaceId>,

    /// Edges touching this vertex, in order of discovery.
    pub edges: Vec<EdgeId>,
}

impl Vertex {
    /// Create a new vertex at the given position with no adjacency yet.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            faces: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// An edge in the indexed mesh.
#[derive(Debug, Clone)]
pub struct Edge {
    /// The two endpoint vertices, in the order the pair was first observed.
    ///
    /// A degenerate input triangle with a repeated corner produces an edge
    /// whose endpoints are equal; this is represented as-is.
    pub vertices: [VertexId; 2],

    /// Faces that have this edge as one of their sides.
    ///
    /// Exactly 2 entries for a manifold interior edge, but 1 (boundary) or
    /// 3+ (non-manifold) are representable and preserved.
    pub faces: Vec<FaceId>,
}

impl Edge {
    /// Create a new edge between two vertices with no face adjacency yet.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            vertices: [a, b],
            faces: Vec::new(),
        }
    }
}

/// A triangular face in the indexed mesh.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    /// The 3 corner vertices, in the originating triangle's winding order.
    pub vertices: [VertexId; 3],

    /// The 3 edges, in winding order: edge `j` connects vertices `j` and
    /// `(j + 1) % 3`.
    pub edges: [EdgeId; 3],
}

/// An indexed triangle mesh with explicit vertex/edge/face adjacency.
///
/// Built by [`TopologyBuilder`](super::TopologyBuilder) in a single pass
/// over a triangle soup; read-only afterwards. Face indices equal the
/// originating triangle's position in the input.
#[derive(Debug, Clone, Default)]
pub struct IndexedMesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get an edge by ID.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertex(v).position
    }

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId::new)
    }

    // ==================== Topology Queries ====================

    /// Check whether an edge borders exactly two faces.
    #[inline]
    pub fn is_manifold_edge(&self, e: EdgeId) -> bool {
        self.edge(e).faces.len() == 2
    }

    /// Check whether an edge borders exactly one face.
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeId) -> bool {
        self.edge(e).faces.len() == 1
    }

    /// Check whether every edge is manifold (the mesh is closed and
    /// watertight as far as edge adjacency can tell).
    pub fn is_closed(&self) -> bool {
        self.edge_ids().all(|e| self.is_manifold_edge(e))
    }

    /// Compute the axis-aligned bounding box of the mesh.
    ///
    /// Returns `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let mut verts = self.vertices.iter();
        let first = verts.next()?.position;
        let (mut min, mut max) = (first, first);
        for v in verts {
            let p = v.position;
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        Some((min, max))
    }

    /// Check the structural invariants of the mesh.
    ///
    /// Verifies that all cross-references are in range, that face edge `j`
    /// connects face vertices `j` and `(j + 1) % 3`, and that adjacency is
    /// symmetric (an edge's faces list it among their edges, a vertex's
    /// edges have it as an endpoint). Intended for tests and debugging;
    /// meshes produced by the builder always pass.
    pub fn is_consistent(&self) -> bool {
        let in_range = |v: VertexId| v.index() < self.vertices.len();

        for face in &self.faces {
            if !face.vertices.iter().all(|&v| in_range(v)) {
                return false;
            }
            for j in 0..3 {
                let e = face.edges[j];
                if e.index() >= self.edges.len() {
                    return false;
                }
                let pair = [face.vertices[j], face.vertices[(j + 1) % 3]];
                let ends = self.edge(e).vertices;
                if ends != pair && ends != [pair[1], pair[0]] {
                    return false;
                }
            }
        }

        for (ei, edge) in self.edges.iter().enumerate() {
            if !edge.vertices.iter().all(|&v| in_range(v)) {
                return false;
            }
            for &f in &edge.faces {
                if f.index() >= self.faces.len()
                    || !self.face(f).edges.contains(&EdgeId::new(ei))
                {
                    return false;
                }
            }
        }

        for (vi, vertex) in self.vertices.iter().enumerate() {
            let vid = VertexId::new(vi);
            for &e in &vertex.edges {
                if e.index() >= self.edges.len() || !self.edge(e).vertices.contains(&vid) {
                    return false;
                }
            }
            for &f in &vertex.faces {
                if f.index() >= self.faces.len() || !self.face(f).vertices.contains(&vid) {
                    return false;
                }
            }
        }

        true
    }
}
