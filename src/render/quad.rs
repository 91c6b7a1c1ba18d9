use gl::types::*;
use std::mem;
use std::ptr;

/// Clip-space quad covering [-1, 1]^2, split along the 0-3 diagonal.
pub const QUAD_VERTICES: [f32; 12] = [
    1.0, 1.0, 0.0, // top right
    1.0, -1.0, 0.0, // bottom right
    -1.0, -1.0, 0.0, // bottom left
    -1.0, 1.0, 0.0, // top left
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

pub struct QuadMesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: GLuint,
}

impl QuadMesh {
    pub fn new() -> Self {
        let (mut vao, mut vbo, mut ebo) = (0, 0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ebo);

            gl::BindVertexArray(vao);

            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                mem::size_of_val(&QUAD_VERTICES) as GLsizeiptr,
                QUAD_VERTICES.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                mem::size_of_val(&QUAD_INDICES) as GLsizeiptr,
                QUAD_INDICES.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                3 * mem::size_of::<f32>() as GLsizei,
                ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            // the attribute pointer registered the VBO, so it can be unbound;
            // the element buffer stays captured by the VAO
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        Self { vao, vbo, ebo }
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                gl::TRIANGLES,
                QUAD_INDICES.len() as GLsizei,
                gl::UNSIGNED_INT,
                ptr::null(),
            );
            gl::BindVertexArray(0);
        }
    }
}

impl Default for QuadMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QuadMesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ebo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(index: u32) -> (f32, f32) {
        let base = index as usize * 3;
        (QUAD_VERTICES[base], QUAD_VERTICES[base + 1])
    }

    fn triangle_area(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
        0.5 * ((b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1)).abs()
    }

    #[test]
    fn test_indices_stay_in_range() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len() / 3));
    }

    #[test]
    fn test_vertices_sit_on_clip_space_corners() {
        for index in 0..4 {
            let (x, y) = vertex(index);
            assert_eq!(x.abs(), 1.0);
            assert_eq!(y.abs(), 1.0);
            assert_eq!(QUAD_VERTICES[index as usize * 3 + 2], 0.0);
        }
    }

    #[test]
    fn test_triangles_cover_the_full_square() {
        let first = triangle_area(vertex(0), vertex(1), vertex(3));
        let second = triangle_area(vertex(1), vertex(2), vertex(3));
        assert_eq!(first, 2.0);
        assert_eq!(second, 2.0);
        // two halves of the [-1,1]^2 square
        assert_eq!(first + second, 4.0);
    }

    #[test]
    fn test_triangles_share_only_the_diagonal() {
        let first: Vec<u32> = QUAD_INDICES[..3].to_vec();
        let second: Vec<u32> = QUAD_INDICES[3..].to_vec();
        let shared: Vec<u32> = first.iter().copied().filter(|i| second.contains(i)).collect();
        assert_eq!(shared, vec![1, 3]);
    }
}
