use crate::gl_api::ShaderStage;

/// Every way a probe run can end early. Each maps to its own process exit
/// code.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("windowing system init failed: {0}")]
    WindowInit(String),
    #[error("window creation failed: {0}")]
    WindowCreation(String),
    #[error("OpenGL init failed: {0}")]
    GraphicsInit(String),
    #[error("could not load vertex source from {}", .0.display())]
    VertexSourceMissing(std::path::PathBuf),
    #[error("could not load fragment source from {}", .0.display())]
    FragmentSourceMissing(std::path::PathBuf),
    #[error("{stage} shader is 0 ({reason})")]
    ShaderCreation { stage: ShaderStage, reason: String },
    #[error("could not compile {0} shader")]
    Compile(ShaderStage),
    #[error("program is 0 ({0})")]
    ProgramCreation(String),
    #[error("could not link")]
    Link,
    #[error("could not write to console: {0}")]
    Console(#[from] std::io::Error),
}

impl ProbeError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ProbeError::WindowCreation(_) => 1,
            ProbeError::GraphicsInit(_)
            | ProbeError::ShaderCreation { .. }
            | ProbeError::ProgramCreation(_)
            | ProbeError::Link
            | ProbeError::Console(_) => 2,
            ProbeError::WindowInit(_) => 3,
            ProbeError::VertexSourceMissing(_) => 4,
            ProbeError::FragmentSourceMissing(_) | ProbeError::Compile(_) => 5,
        }
    }

    /// Classifies a failure reported by `eframe::run_native` before the
    /// probe got hold of a context.
    pub fn from_startup(err: eframe::Error) -> Self {
        let text = err.to_string();
        match err {
            eframe::Error::WinitEventLoop(_) => ProbeError::WindowInit(text),
            eframe::Error::Winit(_) => ProbeError::WindowCreation(text),
            eframe::Error::Glutin(_)
            | eframe::Error::NoGlutinConfigs(..)
            | eframe::Error::OpenGL(_) => ProbeError::GraphicsInit(text),
            _ => ProbeError::WindowInit(text),
        }
    }
}
