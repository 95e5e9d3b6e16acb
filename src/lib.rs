//! Compiles and links one vertex/fragment shader pair against a live
//! OpenGL context and reports what the driver said about it.

pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gl_api;
pub mod probe;
pub mod resource;
pub mod source;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use gl_api::{GlApi, ShaderStage};
pub use probe::run;
