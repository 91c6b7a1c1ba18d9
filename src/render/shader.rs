use gl::types::*;
use std::ffi::{CStr, CString};
use std::ptr;

use crate::config::rendering::ShaderFailurePolicy;
use crate::utils::error::RenderError;
use crate::utils::file::load_entire_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Loads, compiles and links a vertex/fragment pair. Source file
    /// failures always abort; compile and link failures abort or are
    /// logged depending on `policy`. With `LogAndContinue` the returned
    /// program may be unusable for drawing, which is intentional.
    pub fn from_files(
        vertex_path: &str,
        fragment_path: &str,
        policy: ShaderFailurePolicy,
    ) -> Result<Self, RenderError> {
        let vertex_source = load_entire_file(vertex_path)?;
        let fragment_source = load_entire_file(fragment_path)?;

        let (vertex, vertex_status) =
            Self::compile_stage(vertex_source.as_c_str(), ShaderStage::Vertex);
        let (fragment, fragment_status) =
            Self::compile_stage(fragment_source.as_c_str(), ShaderStage::Fragment);

        for status in [vertex_status, fragment_status] {
            if let Some(err) = status {
                if policy == ShaderFailurePolicy::Strict {
                    unsafe {
                        gl::DeleteShader(vertex);
                        gl::DeleteShader(fragment);
                    }
                    return Err(err);
                }
                log::error!("{err}");
            }
        }

        let program = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(program, vertex);
            gl::AttachShader(program, fragment);
            gl::LinkProgram(program);
            // safe to delete once attached and linked
            gl::DeleteShader(vertex);
            gl::DeleteShader(fragment);
        }

        let mut success = 1;
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
        }

        if success == 0 {
            let err = RenderError::LinkingFailed {
                log: Self::program_info_log(program),
            };
            if policy == ShaderFailurePolicy::Strict {
                unsafe {
                    gl::DeleteProgram(program);
                }
                return Err(err);
            }
            log::error!("{err}");
        }

        Ok(ShaderProgram { id: program })
    }

    fn compile_stage(source: &CStr, stage: ShaderStage) -> (GLuint, Option<RenderError>) {
        let shader = unsafe { gl::CreateShader(stage.gl_kind()) };

        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(shader);
        }

        let mut success = 1;
        unsafe {
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let err = RenderError::CompilationFailed {
                stage: stage.name(),
                log: Self::shader_info_log(shader),
            };
            return (shader, Some(err));
        }

        (shader, None)
    }

    fn shader_info_log(shader: GLuint) -> String {
        let mut len = 0;
        unsafe {
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        }

        let log = Self::create_whitespace_cstring_with_len(len as usize);
        unsafe {
            gl::GetShaderInfoLog(shader, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
        }
        log.to_string_lossy().into_owned()
    }

    fn program_info_log(program: GLuint) -> String {
        let mut len = 0;
        unsafe {
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        }

        let log = Self::create_whitespace_cstring_with_len(len as usize);
        unsafe {
            gl::GetProgramInfoLog(program, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
        }
        log.to_string_lossy().into_owned()
    }

    fn create_whitespace_cstring_with_len(len: usize) -> CString {
        let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
        buffer.extend([b' '].iter().cycle().take(len));
        unsafe { CString::from_vec_unchecked(buffer) }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(ShaderStage::Vertex.name(), "vertex");
        assert_eq!(ShaderStage::Fragment.name(), "fragment");
    }

    #[test]
    fn test_info_log_buffer_is_nul_terminated() {
        let buffer = ShaderProgram::create_whitespace_cstring_with_len(16);
        assert_eq!(buffer.as_bytes().len(), 16);
        assert!(buffer.as_bytes().iter().all(|&b| b == b' '));
    }
}
