use gl;
use std;

pub struct VertexBuffer {
    gl: gl::Gl,
    glid: gl::types::GLuint,
}

impl VertexBuffer {
    pub fn new(gl: &gl::Gl) -> VertexBuffer {
        let mut glid: gl::types::GLuint = 0;
        unsafe {
            gl.GenBuffers(1, &mut glid);
        }
        VertexBuffer { gl: gl.clone(), glid }
    }

    pub fn bind(&self) {
        unsafe {
            self.gl.BindBuffer(gl::ARRAY_BUFFER, self.glid);
        }
    }

    pub fn unbind(&self) {
        unsafe {
            self.gl.BindBuffer(gl::ARRAY_BUFFER, 0);
        }
    }

    /// Uploads to whatever buffer is currently bound to `GL_ARRAY_BUFFER`;
    /// call `bind` first.
    pub fn static_draw_data(&self, vertices: &[f32]) {
        unsafe {
            self.gl.BufferData(
                gl::ARRAY_BUFFER,
                (vertices.len() * std::mem::size_of::<f32>()) as gl::types::GLsizeiptr,
                vertices.as_ptr() as *const gl::types::GLvoid,
                gl::STATIC_DRAW,
            );
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteBuffers(1, &self.glid);
        }
    }
}

pub struct VertexArray {
    gl: gl::Gl,
    glid: gl::types::GLuint,
}

impl VertexArray {
    pub fn new(gl: &gl::Gl) -> VertexArray {
        let mut glid: gl::types::GLuint = 0;
        unsafe {
            gl.GenVertexArrays(1, &mut glid);
        }
        VertexArray { gl: gl.clone(), glid }
    }

    pub fn bind(&self) {
        unsafe {
            self.gl.BindVertexArray(self.glid);
        }
    }

    pub fn unbind(&self) {
        unsafe {
            self.gl.BindVertexArray(0);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteVertexArrays(1, &self.glid);
        }
    }
}
