//! Reading and describing the context's error state.

use crate::gl_api::GlApi;

// English descriptions from the glGetError reference page.
static ERROR_STRINGS: [(u32, &str); 8] = [
    (
        glow::NO_ERROR,
        "No error has been recorded. THIS message is the error itself.",
    ),
    (
        glow::INVALID_ENUM,
        "An unacceptable value is specified for an enumerated argument.",
    ),
    (glow::INVALID_VALUE, "A numeric argument is out of range."),
    (
        glow::INVALID_OPERATION,
        "The specified operation is not allowed in the current state.",
    ),
    (
        glow::INVALID_FRAMEBUFFER_OPERATION,
        "The framebuffer object is not complete.",
    ),
    (
        glow::OUT_OF_MEMORY,
        "There is not enough memory left to execute the command.",
    ),
    (
        glow::STACK_UNDERFLOW,
        "An attempt has been made to perform an operation that would cause an internal stack to underflow.",
    ),
    (
        glow::STACK_OVERFLOW,
        "An attempt has been made to perform an operation that would cause an internal stack to overflow.",
    ),
];

pub const NO_DESCRIPTION: &str = "No description available. Incompatible OpenGL version?";

/// Upper bound on errors discarded by [`drain`]. A lost context may keep
/// reporting errors forever.
const DRAIN_LIMIT: usize = 16;

pub fn describe(code: u32) -> Option<&'static str> {
    ERROR_STRINGS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| *text)
}

pub fn format_error(code: u32) -> String {
    format!(
        "OpenGL error: {}\nError string: {}\n",
        code as i32,
        describe(code).unwrap_or(NO_DESCRIPTION)
    )
}

/// Reads the error state once. `None` means no error was pending.
///
/// Reading clears the slot, so call this once per state to inspect.
pub fn error_message<G: GlApi + ?Sized>(gl: &G) -> Option<String> {
    let code = gl.get_error();
    if code == glow::NO_ERROR {
        return None;
    }
    Some(format_error(code))
}

/// Prints any pending error to stderr and reports whether there was one.
pub fn error<G: GlApi + ?Sized>(gl: &G) -> bool {
    match error_message(gl) {
        Some(message) => {
            eprint!("{message}");
            true
        }
        None => false,
    }
}

/// Discards errors raised before the probe took over the context.
/// Returns how many were discarded.
pub fn drain<G: GlApi + ?Sized>(gl: &G) -> usize {
    let mut count = 0;
    while count < DRAIN_LIMIT {
        let code = gl.get_error();
        if code == glow::NO_ERROR {
            break;
        }
        log::warn!(
            "discarding GL error left by context setup: {}",
            format_error(code).trim_end()
        );
        count += 1;
    }
    count
}
