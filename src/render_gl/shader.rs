use gl;
use std;
use std::ffi::{CString, CStr};

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to compile {} shader: {}", stage, message)]
    CompileError { stage: String, message: String },
    #[fail(display = "Failed to link program: {}", message)]
    LinkError { message: String },
}

pub struct Program {
    gl: gl::Gl,
    id: gl::types::GLuint,
}

impl Program {
    pub fn from_shaders(gl: &gl::Gl, shaders: &[Shader]) -> Result<Program, Error> {
        let program_id = unsafe { gl.CreateProgram() };

        for shader in shaders {
            unsafe { gl.AttachShader(program_id, shader.id()); }
        }

        unsafe { gl.LinkProgram(program_id); }

        let mut success: gl::types::GLint = 1;
        unsafe {
            gl.GetProgramiv(program_id, gl::LINK_STATUS, &mut success);
        }

        if success == 0 {
            let mut len: gl::types::GLint = 0;
            unsafe {
                gl.GetProgramiv(program_id, gl::INFO_LOG_LENGTH, &mut len);
            }

            let error = create_whitespace_cstring_with_len(len as usize);

            unsafe {
                gl.GetProgramInfoLog(
                    program_id,
                    len,
                    std::ptr::null_mut(),
                    error.as_ptr() as *mut gl::types::GLchar
                );
            }

            // the handle of a failed link must not escape either
            unsafe { gl.DeleteProgram(program_id); }

            return Err(Error::LinkError {
                message: error.to_string_lossy().into_owned(),
            });
        }

        for shader in shaders {
            unsafe { gl.DetachShader(program_id, shader.id()); }
        }

        Ok(Program { gl: gl.clone(), id: program_id })
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }

    pub fn set_used(&self) {
        unsafe {
            self.gl.UseProgram(self.id);
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteProgram(self.id);
        }
    }
}

pub struct Shader {
    gl: gl::Gl,
    id: gl::types::GLuint,
}

impl Shader {
    pub fn from_source(
        gl: &gl::Gl,
        source: &CStr,
        kind: gl::types::GLenum
    ) -> Result<Shader, Error> {
        let id = shader_from_source(gl, source, kind)
            .map_err(|message| Error::CompileError {
                stage: stage_name(kind).into(),
                message,
            })?;
        Ok(Shader { gl: gl.clone(), id })
    }

    pub fn from_vert_source(gl: &gl::Gl, source: &CStr) -> Result<Shader, Error> {
        Shader::from_source(gl, source, gl::VERTEX_SHADER)
    }

    pub fn from_frag_source(gl: &gl::Gl, source: &CStr) -> Result<Shader, Error> {
        Shader::from_source(gl, source, gl::FRAGMENT_SHADER)
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteShader(self.id);
        }
    }
}

fn stage_name(kind: gl::types::GLenum) -> &'static str {
    match kind {
        gl::VERTEX_SHADER => "vertex",
        gl::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

fn shader_from_source(
    gl: &gl::Gl,
    source: &CStr,
    kind: gl::types::GLenum
) -> Result<gl::types::GLuint, String> {
    let id = unsafe { gl.CreateShader(kind) };
    unsafe {
        gl.ShaderSource(id, 1, &source.as_ptr(), std::ptr::null());
        gl.CompileShader(id);
    }

    let mut success: gl::types::GLint = 1;
    unsafe {
        gl.GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        let mut len: gl::types::GLint = 0;
        unsafe {
            gl.GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        }

        let error = create_whitespace_cstring_with_len(len as usize);

        unsafe {
            gl.GetShaderInfoLog(
                id,
                len,
                std::ptr::null_mut(),
                error.as_ptr() as *mut gl::types::GLchar
            );
        }

        // the handle of a failed compile must not escape this function
        unsafe { gl.DeleteShader(id); }

        return Err(error.to_string_lossy().into_owned());
    }

    Ok(id)
}

fn create_whitespace_cstring_with_len(len: usize) -> CString {
    // allocate buffer of correct size
    let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
    // fill it with len spaces
    buffer.extend([b' '].iter().cycle().take(len));
    // convert buffer to CString
    unsafe { CString::from_vec_unchecked(buffer) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_buffer_has_requested_len_and_no_interior_nul() {
        let buffer = create_whitespace_cstring_with_len(12);
        assert_eq!(buffer.as_bytes().len(), 12);
        assert!(buffer.as_bytes().iter().all(|&b| b == b' '));

        let empty = create_whitespace_cstring_with_len(0);
        assert_eq!(empty.as_bytes().len(), 0);
    }

    #[test]
    fn stage_names_follow_shader_kind() {
        assert_eq!(stage_name(gl::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(gl::FRAGMENT_SHADER), "fragment");
        assert_eq!(stage_name(gl::ZERO), "unknown");
    }

    #[test]
    fn errors_display_stage_and_driver_log() {
        let compile = Error::CompileError {
            stage: "vertex".into(),
            message: "0:1(1): error: syntax error".into(),
        };
        assert_eq!(
            format!("{}", compile),
            "Failed to compile vertex shader: 0:1(1): error: syntax error"
        );

        let link = Error::LinkError { message: "missing entry point".into() };
        assert_eq!(format!("{}", link), "Failed to link program: missing entry point");
    }
}
