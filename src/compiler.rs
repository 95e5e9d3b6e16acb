use crate::gl_api::GlApi;
use crate::source::SourceText;

/// Submits `source` as one unit, compiles it, prints any compiler log to
/// `out` and returns the compile status.
///
/// The log is printed whenever the compiler produced one, warnings on a
/// successful compile included.
pub fn compile_shader<G, W>(
    gl: &G,
    shader: G::Shader,
    source: &SourceText,
    out: &mut W,
) -> std::io::Result<bool>
where
    G: GlApi + ?Sized,
    W: std::io::Write + ?Sized,
{
    gl.shader_source(shader, &source.joined());
    debug_assert!(!crate::diagnostics::error(gl));
    gl.compile_shader(shader);
    debug_assert!(!crate::diagnostics::error(gl));

    write_info_log(out, &gl.shader_info_log(shader))?;

    let status = gl.shader_compile_status(shader);
    log::debug!("shader {shader:?} compile status: {status}");
    Ok(status)
}

/// Prints a compiler or linker log. An empty log prints nothing.
pub fn write_info_log<W: std::io::Write + ?Sized>(out: &mut W, log: &str) -> std::io::Result<()> {
    if log.is_empty() {
        return Ok(());
    }
    writeln!(out, "Log: ")?;
    write!(out, "{log}")
}
