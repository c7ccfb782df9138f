use bytemuck::{Pod, Zeroable};
use std::ops::Range;

/// An interleaved vertex with a position and a texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub texcoord: [f32; 2],
}

const fn vertex(position: [f32; 3], texcoord: [f32; 2]) -> TexturedVertex {
    TexturedVertex { position, texcoord }
}

#[rustfmt::skip]
pub static QUAD_VERTICES: [TexturedVertex; 4] = [
    //      positions          texture coords
    vertex([ 0.5,  0.5, 0.0], [1.0, 1.0]), // top right
    vertex([ 0.5, -0.5, 0.0], [1.0, 0.0]), // bottom right
    vertex([-0.5, -0.5, 0.0], [0.0, 0.0]), // bottom left
    vertex([-0.5,  0.5, 0.0], [0.0, 1.0]), // top left
];

#[rustfmt::skip]
pub static QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

/// Two side by side triangles, positions only.
#[rustfmt::skip]
pub static TRIANGLE_VERTICES: [[f32; 3]; 6] = [
    [-0.9,  -0.5, 0.0],
    [ 0.0,  -0.5, 0.0],
    [-0.45,  0.5, 0.0],

    [ 0.0,  -0.5, 0.0],
    [ 0.9,  -0.5, 0.0],
    [ 0.45,  0.5, 0.0],
];

/// A single float vertex attribute within an interleaved vertex record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    /// The shader input location.
    pub location: u32,
    /// Number of floats read for this attribute.
    pub components: u32,
    /// Offset of the first float, in floats.
    pub offset: usize,
}

impl VertexAttribute {
    /// The range of floats this attribute reads within one vertex record.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.components as usize
    }

    pub fn byte_offset(&self) -> usize {
        self.offset * std::mem::size_of::<f32>()
    }
}

/// How an interleaved float vertex buffer maps to shader inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    /// Floats per vertex record.
    pub stride: usize,
    pub attributes: &'static [VertexAttribute],
}

impl VertexLayout {
    pub fn stride_bytes(&self) -> usize {
        self.stride * std::mem::size_of::<f32>()
    }

    /// Number of complete vertex records in a buffer of `floats` floats.
    pub fn vertex_count(&self, floats: usize) -> usize {
        floats / self.stride
    }
}

/// Position at location 0, texcoord at location 1, 5 floats per vertex.
pub const QUAD_LAYOUT: VertexLayout = VertexLayout {
    stride: 5,
    attributes: &[
        VertexAttribute {
            location: 0,
            components: 3,
            offset: 0,
        },
        VertexAttribute {
            location: 1,
            components: 2,
            offset: 3,
        },
    ],
};

pub const TRIANGLE_LAYOUT: VertexLayout = VertexLayout {
    stride: 3,
    attributes: &[VertexAttribute {
        location: 0,
        components: 3,
        offset: 0,
    }],
};
