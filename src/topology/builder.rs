//! Topology reconstruction from triangle soup.
//!
//! This module provides [`TopologyBuilder`], which consumes an ordered
//! sequence of triangles (each three 3D corner points, no shared structure)
//! and recovers a consistent mesh graph: coincident corners are merged into
//! shared vertices, shared sides between triangles are merged into single
//! edges, and every entity records its adjacent entities.
//!
//! # Welding semantics
//!
//! Vertex merging uses exact coordinate identity: two corners are the same
//! vertex iff their coordinates are bit-identical. There is no tolerance.
//! Real scanner output with rounding noise will therefore not weld
//! geometrically coincident points; this matches the exact-comparison
//! contract and keeps output topology deterministic.
//!
//! # Degenerate input
//!
//! The builder never rejects a triangle. A repeated corner produces an edge
//! whose two endpoints are equal; a zero-area triangle is represented as
//! given. Data quality is the consumer's concern.

use std::collections::HashMap;

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, VertexId};
use super::mesh::{Edge, Face, IndexedMesh, Vertex};

/// Hashable key for exact-identity vertex lookup.
///
/// Equality and hashing are defined over the raw bit pattern of each
/// coordinate, sidestepping float hashing entirely. Note that `0.0` and
/// `-0.0` have different bit patterns and are distinct keys.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
struct PointKey([u64; 3]);

impl PointKey {
    fn new(p: &Point3<f64>) -> Self {
        Self([p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
    }
}

/// Incremental builder for an [`IndexedMesh`].
///
/// Feed triangles in input order with [`add_triangle`](Self::add_triangle),
/// then call [`build`](Self::build) to take ownership of the finished
/// collections. The two lookup tables are builder-local and discarded on
/// completion.
///
/// # Example
/// ```
/// use trellis::topology::TopologyBuilder;
/// use nalgebra::Point3;
///
/// let mut builder = TopologyBuilder::new();
/// builder.add_triangle([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]);
/// let mesh = builder.build();
///
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_edges(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
#[derive(Default)]
pub struct TopologyBuilder {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    faces: Vec<Face>,

    /// Exact position -> vertex index.
    vertex_lookup: HashMap<PointKey, VertexId>,

    /// Endpoint pair (in first-observed order) -> edge index. Lookups also
    /// probe the reversed pair; insertions use the observed order only.
    edge_lookup: HashMap<(VertexId, VertexId), EdgeId>,
}

impl TopologyBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with capacity pre-allocated for a known triangle
    /// count.
    pub fn with_capacity(num_triangles: usize) -> Self {
        // For a closed manifold mesh V ~ F/2 and E ~ 3F/2; soup with little
        // sharing approaches 3F and 3F. Split the difference on vertices.
        Self {
            vertices: Vec::with_capacity(num_triangles),
            edges: Vec::with_capacity(num_triangles * 2),
            faces: Vec::with_capacity(num_triangles),
            vertex_lookup: HashMap::with_capacity(num_triangles),
            edge_lookup: HashMap::with_capacity(num_triangles * 2),
        }
    }

    /// Resolve a corner point to a vertex index, allocating a new vertex on
    /// first sight.
    fn resolve_vertex(&mut self, p: &Point3<f64>) -> VertexId {
        let key = PointKey::new(p);
        if let Some(&v) = self.vertex_lookup.get(&key) {
            return v;
        }
        let v = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(*p));
        self.vertex_lookup.insert(key, v);
        v
    }

    /// Resolve an unordered vertex pair to an edge index, allocating a new
    /// edge on first sight.
    fn resolve_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        if let Some(&e) = self.edge_lookup.get(&(a, b)) {
            return e;
        }
        if let Some(&e) = self.edge_lookup.get(&(b, a)) {
            return e;
        }
        let e = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(a, b));
        self.edge_lookup.insert((a, b), e);
        e
    }

    /// Add one triangle to the mesh under construction.
    ///
    /// Corner order defines the face's winding; the face index is the number
    /// of triangles added before this one.
    pub fn add_triangle(&mut self, corners: [Point3<f64>; 3]) {
        let f = FaceId::new(self.faces.len());

        // Resolve the three corners, recording face adjacency in corner
        // order. Each face appears once per vertex per triangle visit even
        // if the corner positions coincide.
        let mut vs = [VertexId::new(0); 3];
        for (slot, corner) in vs.iter_mut().zip(&corners) {
            let v = self.resolve_vertex(corner);
            self.vertices[v.index()].faces.push(f);
            *slot = v;
        }

        // Resolve the three sides in winding order: edge j connects corners
        // j and (j + 1) % 3.
        let mut es = [EdgeId::new(0); 3];
        for (j, slot) in es.iter_mut().enumerate() {
            let (a, b) = (vs[j], vs[(j + 1) % 3]);
            let e = self.resolve_edge(a, b);
            self.edges[e.index()].faces.push(f);
            self.vertices[a.index()].edges.push(e);
            self.vertices[b.index()].edges.push(e);
            *slot = e;
        }

        self.faces.push(Face {
            vertices: vs,
            edges: es,
        });
    }

    /// Finish building, discarding the lookup tables and transferring the
    /// three collections whole.
    pub fn build(self) -> IndexedMesh {
        IndexedMesh {
            vertices: self.vertices,
            edges: self.edges,
            faces: self.faces,
        }
    }
}

/// Build an indexed mesh from a triangle soup in one pass.
///
/// Triangles are processed in input order; face `i` corresponds to triangle
/// `i`. This never fails: degenerate triangles are represented as given
/// rather than rejected.
///
/// # Example
/// ```
/// use trellis::topology::build_from_soup;
/// use nalgebra::Point3;
///
/// let soup = vec![[
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]];
/// let mesh = build_from_soup(&soup);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_soup(soup: &[[Point3<f64>; 3]]) -> IndexedMesh {
    let mut builder = TopologyBuilder::with_capacity(soup.len());
    for &corners in soup {
        builder.add_triangle(corners);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> [Point3<f64>; 3] {
        [a.into(), b.into(), c.into()]
    }

    fn single_triangle() -> Vec<[Point3<f64>; 3]> {
        vec![tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])]
    }

    fn two_triangles() -> Vec<[Point3<f64>; 3]> {
        // Two triangles sharing the edge (1,0,0)-(0,1,0)
        vec![
            tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
        ]
    }

    #[test]
    fn test_single_triangle() {
        let mesh = build_from_soup(&single_triangle());

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert!(mesh.is_consistent());

        let f0 = FaceId::new(0);
        for v in mesh.vertex_ids() {
            assert_eq!(mesh.vertex(v).faces, vec![f0]);
        }
        for e in mesh.edge_ids() {
            assert_eq!(mesh.edge(e).faces, vec![f0]);
        }
    }

    #[test]
    fn test_two_triangles_shared_edge() {
        let mesh = build_from_soup(&two_triangles());

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_edges(), 5);
        assert_eq!(mesh.num_faces(), 2);
        assert!(mesh.is_consistent());

        // The shared edge is between vertices 1 and 2 (discovery order) and
        // borders both faces, in input order.
        let shared: Vec<_> = mesh
            .edge_ids()
            .filter(|&e| mesh.edge(e).faces.len() == 2)
            .collect();
        assert_eq!(shared.len(), 1);
        let edge = mesh.edge(shared[0]);
        assert_eq!(edge.vertices, [VertexId::new(1), VertexId::new(2)]);
        assert_eq!(edge.faces, vec![FaceId::new(0), FaceId::new(1)]);
    }

    #[test]
    fn test_face_indices_dense_in_input_order() {
        let mesh = build_from_soup(&two_triangles());
        let ids: Vec<_> = mesh.face_ids().map(|f| f.index()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_welding_is_idempotent() {
        // The same triangle twice must not grow the vertex or edge sets.
        let mut soup = single_triangle();
        soup.push(soup[0]);
        let mesh = build_from_soup(&soup);

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.num_faces(), 2);
        for e in mesh.edge_ids() {
            assert_eq!(mesh.edge(e).faces, vec![FaceId::new(0), FaceId::new(1)]);
        }
    }

    #[test]
    fn test_no_tolerance_welding() {
        // Bit-identical only: a corner off by one ulp stays separate, and so
        // do 0.0 and -0.0.
        let mut soup = single_triangle();
        soup.push(tri([-0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));
        let mesh = build_from_soup(&soup);

        assert_eq!(mesh.num_vertices(), 4);
    }

    #[test]
    fn test_reversed_pair_merges_edge() {
        // Second triangle traverses the shared side in the opposite
        // direction; it must still resolve to the same edge, with endpoints
        // kept in first-observed order.
        let mesh = build_from_soup(&two_triangles());

        let mut pairs: Vec<[usize; 2]> = mesh
            .edge_ids()
            .map(|e| {
                let [a, b] = mesh.edge(e).vertices;
                let (lo, hi) = (a.index().min(b.index()), a.index().max(b.index()));
                [lo, hi]
            })
            .collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), mesh.num_edges());
    }

    #[test]
    fn test_winding_edge_correspondence() {
        let mesh = build_from_soup(&two_triangles());

        for f in mesh.face_ids() {
            let face = mesh.face(f);
            for j in 0..3 {
                let pair = [face.vertices[j], face.vertices[(j + 1) % 3]];
                let ends = mesh.edge(face.edges[j]).vertices;
                assert!(
                    ends == pair || ends == [pair[1], pair[0]],
                    "face {:?} edge {} does not connect its corners",
                    f,
                    j
                );
            }
        }
    }

    #[test]
    fn test_degenerate_repeated_corner() {
        // A repeated corner yields a self-loop edge, not a panic.
        let soup = vec![tri([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0])];
        let mesh = build_from_soup(&soup);

        assert_eq!(mesh.num_vertices(), 2);
        assert_eq!(mesh.num_faces(), 1);

        let v0 = VertexId::new(0);
        let self_loops: Vec<_> = mesh
            .edge_ids()
            .filter(|&e| mesh.edge(e).vertices == [v0, v0])
            .collect();
        assert_eq!(self_loops.len(), 1);
    }

    #[test]
    fn test_non_manifold_fan() {
        // Three faces sharing one edge: structurally valid, faces list has
        // 3 entries, and nothing downstream of the builder trims it.
        let shared_a = [0.0, 0.0, 0.0];
        let shared_b = [0.0, 0.0, 1.0];
        let soup = vec![
            tri(shared_a, shared_b, [1.0, 0.0, 0.0]),
            tri(shared_a, shared_b, [0.0, 1.0, 0.0]),
            tri(shared_a, shared_b, [-1.0, 0.0, 0.0]),
        ];
        let mesh = build_from_soup(&soup);

        assert_eq!(mesh.num_vertices(), 5);
        assert_eq!(mesh.num_faces(), 3);

        let fan = mesh
            .edge_ids()
            .find(|&e| mesh.edge(e).faces.len() == 3)
            .expect("shared edge should border all three faces");
        assert_eq!(
            mesh.edge(fan).faces,
            vec![FaceId::new(0), FaceId::new(1), FaceId::new(2)]
        );
        assert!(!mesh.is_manifold_edge(fan));
        assert!(mesh.is_consistent());
    }

    #[test]
    fn test_vertex_adjacency_order() {
        let mesh = build_from_soup(&two_triangles());

        // Vertex 0 belongs only to face 0; vertices 1 and 2 to both, in
        // discovery order.
        assert_eq!(mesh.vertex(VertexId::new(0)).faces, vec![FaceId::new(0)]);
        assert_eq!(
            mesh.vertex(VertexId::new(1)).faces,
            vec![FaceId::new(0), FaceId::new(1)]
        );
        assert_eq!(
            mesh.vertex(VertexId::new(2)).faces,
            vec![FaceId::new(0), FaceId::new(1)]
        );
        assert_eq!(mesh.vertex(VertexId::new(3)).faces, vec![FaceId::new(1)]);
    }

    #[test]
    fn test_incremental_matches_batch() {
        let soup = two_triangles();

        let mut builder = TopologyBuilder::new();
        for &t in &soup {
            builder.add_triangle(t);
        }
        let a = builder.build();
        let b = build_from_soup(&soup);

        assert_eq!(a.num_vertices(), b.num_vertices());
        assert_eq!(a.num_edges(), b.num_edges());
        assert_eq!(a.num_faces(), b.num_faces());
    }
}
