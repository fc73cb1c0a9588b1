use serde::Serialize;

/// Structured result of digesting one input, for `--json` output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DigestReport {
    /// Input label: a file path, or `-` for stdin.
    pub input: String,
    /// Seed the digest was computed under, rendered as `0x`-hex.
    pub seed: String,
    /// 16 lowercase hex characters.
    pub digest: String,
}

impl DigestReport {
    pub fn new(input: impl Into<String>, seed: u64, digest: String) -> Self {
        Self {
            input: input.into(),
            seed: format!("{seed:#x}"),
            digest,
        }
    }
}
