//! The slice of OpenGL the probe talks to.
//!
//! Every call takes the context explicitly. Implementations are only valid
//! on the thread where that context is current.

use glow::HasContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Object creation returns `Err` instead of a zero handle, so a handle that
/// exists is always usable.
pub trait GlApi {
    type Shader: Copy + std::fmt::Debug;
    type Program: Copy + std::fmt::Debug;

    /// Pops the single-slot error state; a second call sees `NO_ERROR`.
    fn get_error(&self) -> u32;
    fn max_vertex_uniform_vectors(&self) -> i32;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_info_log(&self, program: Self::Program) -> String;
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn delete_program(&self, program: Self::Program);
}

// The context handed out by eframe is current on the UI thread for as long
// as the app creator runs, which is the only place these are called from.
impl GlApi for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn get_error(&self) -> u32 {
        unsafe { HasContext::get_error(self) }
    }

    fn max_vertex_uniform_vectors(&self) -> i32 {
        unsafe { HasContext::get_parameter_i32(self, glow::MAX_VERTEX_UNIFORM_VECTORS) }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }
}
