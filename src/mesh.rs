//! Triangle mesh buffers produced by the extruder.
//!
//! Vertex data is plain `#[repr(C)]` Pod so downstream renderers can
//! cast the buffers straight to bytes for GPU upload; this crate never
//! touches a GPU itself.

use crate::secondary_structure::SsType;

/// Vertex layout shared by every ribbon, arrow, and tube mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Position in structure coordinates (angstroms).
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Texture coordinate: u is cross-sectional position 0..1, v is
    /// arc-length fraction 0..1 along the curve.
    pub texcoord: [f32; 2],
}

/// An indexed triangle mesh.
///
/// Indices come in triples; every index references a valid vertex slot
/// and the three indices of a triangle are distinct.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex array.
    pub vertices: Vec<MeshVertex>,
    /// Flat triangle index array, stride 3.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Whether the mesh holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer as raw bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// A per-segment mesh tagged with its originating identity, so a
/// downstream material system can color by structural type, chain, or
/// residue range.
#[derive(Debug, Clone)]
pub struct SegmentMesh {
    /// Chain the segment came from.
    pub chain_id: char,
    /// Running segment index across the whole structure, in pipeline
    /// output order.
    pub segment_index: usize,
    /// Structural type the mesh was extruded as.
    pub ss_type: SsType,
    /// First and last residue index covered by the segment.
    pub residue_range: (i32, i32),
    /// The extruded triangle mesh.
    pub mesh: Mesh,
}

/// Full geometric output for a structure: per-segment meshes in
/// segment order.
#[derive(Debug, Clone, Default)]
pub struct RibbonGeometry {
    /// Ordered per-segment meshes.
    pub meshes: Vec<SegmentMesh>,
}

impl RibbonGeometry {
    /// Whether any segment produced geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.iter().all(|m| m.mesh.is_empty())
    }

    /// Merge all segment meshes into a single vertex/index pair with
    /// rebased indices, for single-draw-call consumers.
    #[must_use]
    pub fn concat(&self) -> Mesh {
        let vertex_count = self.meshes.iter().map(|m| m.mesh.vertices.len()).sum();
        let index_count = self.meshes.iter().map(|m| m.mesh.indices.len()).sum();
        let mut merged = Mesh {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        };
        for segment in &self.meshes {
            let base = merged.vertices.len() as u32;
            merged.vertices.extend_from_slice(&segment.mesh.vertices);
            merged
                .indices
                .extend(segment.mesh.indices.iter().map(|&i| base + i));
        }
        merged
    }
}
