//! compression/backends/process.rs
//!
//! Raw LZMA1 by running the `xz` executable.
//!
//! Design notes:
//! - stdin is fed from a scoped thread while stdout/stderr are collected, so
//!   large inputs cannot deadlock on full pipe buffers.
//! - There is no timeout; a hung `xz` blocks the caller.
//! - `xz` complains about streams without an end marker after writing the
//!   full output, so on decompress a correct output length wins over diagnostics.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::warn;

use crate::compression::types::{CompressionError, LzmaBackend, LzmaParams};

const NAME: &str = "process";

#[derive(Debug, Clone)]
pub struct ProcessBackend {
    xz_path: PathBuf,
}

impl ProcessBackend {
    pub fn new(xz_path: impl Into<PathBuf>) -> Self {
        Self { xz_path: xz_path.into() }
    }

    pub fn xz_path(&self) -> &Path {
        &self.xz_path
    }

    fn run(&self, args: &[String], input: &[u8]) -> Result<Output, CompressionError> {
        let mut child = Command::new(&self.xz_path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CompressionError::Spawn { backend: NAME, source })?;

        let mut stdin = child.stdin.take().ok_or_else(|| CompressionError::BackendFailed {
            backend: NAME,
            status: None,
            diagnostics: "stdin pipe unavailable".into(),
        })?;

        let (output, written) = std::thread::scope(|s| {
            let writer = s.spawn(move || stdin.write_all(input));
            let output = child.wait_with_output();
            (output, writer.join())
        });

        let output = output.map_err(|source| CompressionError::Spawn { backend: NAME, source })?;

        match written {
            Ok(Ok(())) => {}
            // xz exited early; its status and stderr tell the story.
            Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => {
                return Err(CompressionError::BackendFailed {
                    backend: NAME,
                    status: output.status.code(),
                    diagnostics: format!("writing stdin: {}", e),
                })
            }
            Err(_) => {
                return Err(CompressionError::BackendFailed {
                    backend: NAME,
                    status: None,
                    diagnostics: "stdin writer panicked".into(),
                })
            }
        }

        Ok(output)
    }
}

fn base_args(params: &LzmaParams) -> Vec<String> {
    vec![
        "--format=raw".to_string(),
        format!("--lzma1={}", params.xz_filter_spec()),
        "-c".to_string(),
        "-".to_string(),
    ]
}

fn diagnostics(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

impl LzmaBackend for ProcessBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compress(&self, input: &[u8], params: &LzmaParams) -> Result<Vec<u8>, CompressionError> {
        let output = self.run(&base_args(params), input)?;
        if !output.status.success() || !output.stderr.is_empty() {
            return Err(CompressionError::BackendFailed {
                backend: NAME,
                status: output.status.code(),
                diagnostics: diagnostics(&output),
            });
        }
        Ok(output.stdout)
    }

    fn decompress(
        &self,
        input: &[u8],
        params: &LzmaParams,
        expected_len: usize,
    ) -> Result<Vec<u8>, CompressionError> {
        let mut args = base_args(params);
        args.insert(0, "--decompress".to_string());
        let output = self.run(&args, input)?;

        let clean = output.status.success() && output.stderr.is_empty();
        if output.stdout.len() == expected_len {
            if !clean {
                warn!(
                    backend = NAME,
                    status = ?output.status.code(),
                    diagnostics = %diagnostics(&output),
                    "xz reported diagnostics; output length matches, accepting"
                );
            }
            return Ok(output.stdout);
        }
        if !clean {
            return Err(CompressionError::BackendFailed {
                backend: NAME,
                status: output.status.code(),
                diagnostics: diagnostics(&output),
            });
        }
        Ok(output.stdout)
    }
}
