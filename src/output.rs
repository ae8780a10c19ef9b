use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{NextSemverError, Result};

/// Named results produced by a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outputs {
    /// Bare resolved semantic version (e.g., "1.2.3")
    pub version: String,
    /// Fully formatted tag (e.g., "v1.2.3-beta")
    pub tag: String,
    /// Path of the manifest file, when it was written back
    pub manifest: Option<PathBuf>,
}

/// Destination for named step outputs.
///
/// In a workflow run this is the file named by GITHUB_OUTPUT, written
/// in the `name=value` step-output format. Outside one (local runs,
/// tests) the same lines go to stdout. Constructed once at startup and
/// passed in, so the pipeline itself never touches the environment.
pub enum OutputSink {
    File(PathBuf),
    Stdout,
}

impl OutputSink {
    /// Selects the sink from the environment: GITHUB_OUTPUT when set,
    /// stdout otherwise.
    pub fn from_env() -> Self {
        match std::env::var("GITHUB_OUTPUT") {
            Ok(path) if !path.is_empty() => OutputSink::File(PathBuf::from(path)),
            _ => OutputSink::Stdout,
        }
    }

    /// Sink writing to an explicit step-output file
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        OutputSink::File(path.into())
    }

    /// Emits a single named output.
    ///
    /// Single-line values use the `name=value` form; values containing
    /// newlines use the heredoc delimiter form the runner expects.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let line = if value.contains('\n') {
            format!("{}<<NEXT_SEMVER_EOF\n{}\nNEXT_SEMVER_EOF\n", name, value)
        } else {
            format!("{}={}\n", name, value)
        };

        match self {
            OutputSink::File(path) => append_line(path, &line),
            OutputSink::Stdout => {
                print!("{}", line);
                Ok(())
            }
        }
    }

    /// Emits the full set of run outputs.
    pub fn emit(&self, outputs: &Outputs) -> Result<()> {
        self.set_output("version", &outputs.version)?;
        self.set_output("tag", &outputs.tag)?;
        if let Some(manifest) = &outputs.manifest {
            self.set_output("manifest", &manifest.display().to_string())?;
        }
        Ok(())
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            NextSemverError::output(format!("Cannot open '{}': {}", path.display(), e))
        })?;
    file.write_all(line.as_bytes())
        .map_err(|e| NextSemverError::output(format!("Cannot write '{}': {}", path.display(), e)))
}
