//! Shader source text as read from disk.

use std::io::BufRead;

/// Lines of a shader file, each terminated with `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SourceText {
            lines: lines
                .into_iter()
                .map(|line| format!("{}\n", line.as_ref()))
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The whole file as one text stream, in line order.
    pub fn joined(&self) -> String {
        self.lines.concat()
    }
}

/// Returns `None` when the file cannot be opened. Read errors past that
/// point end the text early.
pub fn load_source<P: AsRef<std::path::Path>>(path: P) -> Option<SourceText> {
    let path = path.as_ref();
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::debug!("cannot open {}: {err}", path.display());
            return None;
        }
    };
    let mut reader = std::io::BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = Vec::<u8>::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                lines.push(String::from_utf8_lossy(&buf).into_owned());
            }
            Err(err) => {
                log::warn!("stopped reading {} early: {err}", path.display());
                break;
            }
        }
    }
    log::debug!("loaded {} lines from {}", lines.len(), path.display());
    Some(SourceText::from_lines(lines))
}
