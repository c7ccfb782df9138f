use crate::error::GlError;
use glow::HasContext;
use learngl_runtime::geometry::{
    VertexLayout, QUAD_INDICES, QUAD_LAYOUT, QUAD_VERTICES, TRIANGLE_LAYOUT, TRIANGLE_VERTICES,
};
use std::sync::Arc;

/// A vertex array object together with the buffers it reads from.
///
/// The attribute layout is captured once at creation; drawing only rebinds the VAO.
pub struct VertexArray {
    context: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: Option<glow::Buffer>,
    ebo: Option<glow::Buffer>,
    /// Index count when indexed, vertex count otherwise.
    count: i32,
}

impl VertexArray {
    /// Upload interleaved float vertices and optional `u32` indices as static data.
    pub fn new(
        context: &Arc<glow::Context>,
        vertices: &[f32],
        indices: Option<&[u32]>,
        layout: &VertexLayout,
    ) -> Result<Self, GlError> {
        let vao = unsafe { context.create_vertex_array() }.map_err(GlError::VertexArray)?;

        // partially built arrays release whatever was created when dropped
        let mut array = VertexArray {
            context: Arc::clone(context),
            vao,
            vbo: None,
            ebo: None,
            count: match indices {
                Some(indices) => indices.len() as i32,
                None => layout.vertex_count(vertices.len()) as i32,
            },
        };

        unsafe {
            let vbo = context.create_buffer().map_err(GlError::Buffer)?;
            array.vbo = Some(vbo);

            context.bind_vertex_array(Some(vao));
            context.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            context.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            if let Some(indices) = indices {
                let ebo = match context.create_buffer() {
                    Ok(ebo) => ebo,
                    Err(e) => {
                        context.bind_vertex_array(None);
                        return Err(GlError::Buffer(e));
                    }
                };
                array.ebo = Some(ebo);

                context.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                context.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    bytemuck::cast_slice(indices),
                    glow::STATIC_DRAW,
                );
            }

            for attribute in layout.attributes {
                context.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components as i32,
                    glow::FLOAT,
                    false,
                    layout.stride_bytes() as i32,
                    attribute.byte_offset() as i32,
                );
                context.enable_vertex_attrib_array(attribute.location);
            }

            // the element buffer binding is VAO state, so only the array buffer is unbound
            context.bind_buffer(glow::ARRAY_BUFFER, None);
            context.bind_vertex_array(None);
        }

        Ok(array)
    }

    /// The textured quad: 4 vertices, 6 indices.
    pub fn quad(context: &Arc<glow::Context>) -> Result<Self, GlError> {
        Self::new(
            context,
            bytemuck::cast_slice(&QUAD_VERTICES),
            Some(&QUAD_INDICES),
            &QUAD_LAYOUT,
        )
    }

    /// Two position-only triangles drawn without indices.
    pub fn triangles(context: &Arc<glow::Context>) -> Result<Self, GlError> {
        Self::new(
            context,
            bytemuck::cast_slice(&TRIANGLE_VERTICES),
            None,
            &TRIANGLE_LAYOUT,
        )
    }

    pub fn bind(&self) {
        unsafe { self.context.bind_vertex_array(Some(self.vao)) }
    }

    pub fn is_indexed(&self) -> bool {
        self.ebo.is_some()
    }

    /// Index count for indexed arrays, vertex count otherwise.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Bind and draw everything as triangles.
    pub fn draw(&self) {
        self.bind();
        unsafe {
            if self.is_indexed() {
                self.context
                    .draw_elements(glow::TRIANGLES, self.count, glow::UNSIGNED_INT, 0);
            } else {
                self.context.draw_arrays(glow::TRIANGLES, 0, self.count);
            }
        }
    }

    /// Bind and draw `count` vertices starting at `first`, ignoring any index buffer.
    pub fn draw_range(&self, first: i32, count: i32) {
        self.bind();
        unsafe { self.context.draw_arrays(glow::TRIANGLES, first, count) }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            self.context.delete_vertex_array(self.vao);
            if let Some(vbo) = self.vbo.take() {
                self.context.delete_buffer(vbo);
            }
            if let Some(ebo) = self.ebo.take() {
                self.context.delete_buffer(ebo);
            }
        }
    }
}
