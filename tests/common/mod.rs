//! Recording stand-in for a GL context, plus shader file fixtures.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use shader_link_probe::{GlApi, ProbeConfig, ShaderStage};
use tempfile::TempDir;

pub const VALID_VERT: &str = "#version 330\nin vec3 position;\nvoid main() {\n    gl_Position = vec4(position, 1.0);\n}";
pub const VALID_FRAG: &str = "#version 330\nout vec4 color;\nvoid main() {\n    color = vec4(1.0);\n}";
pub const BROKEN: &str = "#version 330\n#error broken on purpose\nvoid main() {}";
pub const WARNS: &str = "#version 330\n// warn\nvoid main() {}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
}

/// Compiles anything except empty sources and sources with `#error`.
/// `// warn` produces a log on a successful compile.
pub struct MockGl {
    pub max_vectors: i32,
    pub fail_shader: Option<ShaderStage>,
    pub fail_program: bool,
    pub link_ok: bool,
    pub link_log: String,
    pub error_after_compile: Option<u32>,
    pub calls: RefCell<Vec<Call>>,
    pub errors: RefCell<VecDeque<u32>>,
    pub sources: RefCell<HashMap<u32, String>>,
    pub next_handle: Cell<u32>,
}

impl Default for MockGl {
    fn default() -> Self {
        MockGl {
            max_vectors: 256,
            fail_shader: None,
            fail_program: false,
            link_ok: true,
            link_log: String::new(),
            error_after_compile: None,
            calls: RefCell::new(Vec::new()),
            errors: RefCell::new(VecDeque::new()),
            sources: RefCell::new(HashMap::new()),
            next_handle: Cell::new(1),
        }
    }
}

impl MockGl {
    pub fn push_error(&self, code: u32) {
        self.errors.borrow_mut().push_back(code);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn source_of(&self, shader: u32) -> Option<String> {
        self.sources.borrow().get(&shader).cloned()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn handle(&self) -> u32 {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        handle
    }

    fn compiles(&self, shader: u32) -> bool {
        match self.sources.borrow().get(&shader) {
            Some(source) => !source.is_empty() && !source.contains("#error"),
            None => false,
        }
    }
}

impl GlApi for MockGl {
    type Shader = u32;
    type Program = u32;

    fn get_error(&self) -> u32 {
        self.errors.borrow_mut().pop_front().unwrap_or(glow::NO_ERROR)
    }

    fn max_vertex_uniform_vectors(&self) -> i32 {
        self.max_vectors
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        if self.fail_shader == Some(stage) {
            return Err("out of handles".to_string());
        }
        let handle = self.handle();
        self.record(Call::CreateShader(stage, handle));
        Ok(handle)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_string());
        self.record(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
        if let Some(code) = self.error_after_compile {
            self.push_error(code);
        }
    }

    fn shader_info_log(&self, shader: u32) -> String {
        let source = self.source_of(shader).unwrap_or_default();
        if source.is_empty() {
            "ERROR: 0:1: '' : empty source\n".to_string()
        } else if source.contains("#error") {
            "ERROR: 0:2: '#error' : broken on purpose\n".to_string()
        } else if source.contains("// warn") {
            "WARNING: 0:2: something to look at\n".to_string()
        } else {
            String::new()
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.compiles(shader)
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        if self.fail_program {
            return Err("out of handles".to_string());
        }
        let handle = self.handle();
        self.record(Call::CreateProgram(handle));
        Ok(handle)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.link_log.clone()
    }

    fn program_link_status(&self, _program: u32) -> bool {
        self.link_ok
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }
}

/// Writes whichever of `Shader.vert` / `Shader.frag` are given into a
/// fresh directory.
pub fn shader_dir(vert: Option<&str>, frag: Option<&str>) -> (TempDir, ProbeConfig) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    if let Some(text) = vert {
        std::fs::write(dir.path().join("Shader.vert"), text).expect("Failed to write Shader.vert");
    }
    if let Some(text) = frag {
        std::fs::write(dir.path().join("Shader.frag"), text).expect("Failed to write Shader.frag");
    }
    let config = ProbeConfig::in_dir(dir.path());
    (dir, config)
}

pub fn run_probe(gl: &MockGl, config: &ProbeConfig) -> (Result<(), shader_link_probe::ProbeError>, String) {
    let mut out = Vec::<u8>::new();
    let result = shader_link_probe::run(gl, config, &mut out);
    (result, String::from_utf8(out).expect("console output is UTF-8"))
}
