pub mod emitter;
pub mod notebook;
pub mod script;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BASE_NAME: &str = "analysis";
pub const BASE_NAME_PROMPT: &str = "Enter base name for files (without extension): ";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Notebook serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;

/// Trims `raw`, falling back to `fallback` when nothing is left.
pub fn resolve_base_name(raw: &str, fallback: &str) -> String {
    match raw.trim() {
        "" => fallback.to_string(),
        name => name.to_string(),
    }
}

/// Asks for a base name on `output` and reads a single line from `input`.
/// End of input is treated as a blank answer.
pub fn prompt_base_name<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    fallback: &str,
) -> io::Result<String> {
    write!(output, "{}", BASE_NAME_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(resolve_base_name(&line, fallback))
}
