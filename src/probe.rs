//! The single compile-and-link attempt.
//!
//! Runs after the window and context exist: report the uniform vector
//! limit, load both sources, compile each stage, link, release.

use crate::compiler::{compile_shader, write_info_log};
use crate::config::ProbeConfig;
use crate::diagnostics;
use crate::error::ProbeError;
use crate::gl_api::{GlApi, ShaderStage};
use crate::resource::{ProgramObject, ShaderObject};
use crate::source::load_source;

pub fn run<G, W>(gl: &G, config: &ProbeConfig, out: &mut W) -> Result<(), ProbeError>
where
    G: GlApi + ?Sized,
    W: std::io::Write + ?Sized,
{
    diagnostics::drain(gl);

    let max_vectors = gl.max_vertex_uniform_vectors();
    writeln!(out, "Max vectors: {max_vectors}")?;

    writeln!(out, "Loading shader sources...")?;
    let vertex_source = load_source(&config.vertex_path);
    let fragment_source = load_source(&config.fragment_path);
    let vertex_source =
        vertex_source.ok_or_else(|| ProbeError::VertexSourceMissing(config.vertex_path.clone()))?;
    let fragment_source = fragment_source
        .ok_or_else(|| ProbeError::FragmentSourceMissing(config.fragment_path.clone()))?;

    let vs = create_shader(gl, ShaderStage::Vertex)?;
    let fs = create_shader(gl, ShaderStage::Fragment)?;

    writeln!(out, "Compiling vertex shader...")?;
    if !compile_shader(gl, vs.handle(), &vertex_source, out)? {
        return Err(ProbeError::Compile(vs.stage()));
    }
    writeln!(out, "Compiling fragment shader...")?;
    if !compile_shader(gl, fs.handle(), &fragment_source, out)? {
        return Err(ProbeError::Compile(fs.stage()));
    }

    let program = ProgramObject::create(gl).map_err(ProbeError::ProgramCreation)?;
    debug_assert!(!diagnostics::error(gl));
    program.attach(&vs);
    debug_assert!(!diagnostics::error(gl));
    program.attach(&fs);
    debug_assert!(!diagnostics::error(gl));
    gl.link_program(program.handle());
    debug_assert!(!diagnostics::error(gl));

    write_info_log(out, &gl.program_info_log(program.handle()))?;
    if !gl.program_link_status(program.handle()) {
        return Err(ProbeError::Link);
    }
    debug_assert!(!diagnostics::error(gl));
    drop(vs);
    drop(fs);

    writeln!(out, "Finishing...")?;
    drop(program);
    Ok(())
}

fn create_shader<G: GlApi + ?Sized>(
    gl: &G,
    stage: ShaderStage,
) -> Result<ShaderObject<'_, G>, ProbeError> {
    let shader =
        ShaderObject::create(gl, stage).map_err(|reason| ProbeError::ShaderCreation { stage, reason })?;
    debug_assert!(!diagnostics::error(gl));
    Ok(shader)
}
