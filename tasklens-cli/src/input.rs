//! Input acquisition: file, stdin, or the TASK_DATA environment variable.

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

use tasklens_core::AnalysisInput;

pub const TASK_DATA_ENV: &str = "TASK_DATA";

/// Load and parse the input payload.
///
/// - `Some("-")` reads stdin
/// - `Some(path)` reads the file
/// - `None` falls back to the TASK_DATA environment variable
///
/// No reachable data at all, or data that fails to parse, is a hard error:
/// the report engine is never invoked with garbage.
pub fn load_input(file: Option<&Path>) -> Result<AnalysisInput> {
    let raw = match file {
        Some(p) if p.as_os_str() == "-" => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("read stdin")?;
            s
        }
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?
        }
        None => match std::env::var(TASK_DATA_ENV) {
            Ok(s) if !s.trim().is_empty() => s,
            _ => bail!("no task data: pass a file, `-` for stdin, or set {TASK_DATA_ENV}"),
        },
    };

    parse_input(&raw)
}

pub fn parse_input(raw: &str) -> Result<AnalysisInput> {
    serde_json::from_str(raw).context("parse task data JSON")
}
