use std::io::{Read, Write};

use crate::domain::error::DigestError;
use crate::domain::report::DigestReport;
use crate::engine::hasher::Hasher;

const READ_CHUNK_SIZE: usize = 64 * 1024;

/// Command-level options for digest execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestCommandOptions {
    pub seed: u64,
    pub json: bool,
    /// Label echoed next to the digest: a file path, or `-` for stdin.
    pub label: String,
}

impl Default for DigestCommandOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            json: false,
            label: "-".to_string(),
        }
    }
}

/// Digest `input` from stream to stream.
///
/// This function is intentionally thin: it only coordinates I/O and
/// delegates hashing to the engine layer.
pub fn run<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    options: &DigestCommandOptions,
) -> Result<(), DigestError> {
    let mut hasher = Hasher::new(options.seed);
    let mut chunk = vec![0u8; READ_CHUNK_SIZE];
    loop {
        let read = input
            .read(&mut chunk)
            .map_err(|source| DigestError::ReadInput { source })?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read])?;
    }
    let digest = hasher.finish(b"")?;

    if options.json {
        let report = DigestReport::new(options.label.clone(), options.seed, digest);
        let serialized = serde_json::to_string(&report).map_err(|source| {
            DigestError::WriteOutput {
                source: source.into(),
            }
        })?;
        writeln!(output, "{serialized}").map_err(|source| DigestError::WriteOutput { source })?;
    } else {
        writeln!(output, "{digest}  {}", options.label)
            .map_err(|source| DigestError::WriteOutput { source })?;
    }
    Ok(())
}
