use thiserror::Error;

/// Errors produced by the streaming hash core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// The state already produced a digest; construct a new hasher.
    #[error("hasher already finalized")]
    AlreadyFinalized,
}

/// Errors produced by the seed parsing boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    /// Seed string is not a decimal or `0x`-prefixed hexadecimal u64.
    #[error("invalid seed `{input}`: expected a decimal or 0x-hex 64-bit value")]
    Invalid { input: String },
}

/// Errors produced by the `digest` command boundary.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Input stream could not be read.
    #[error("failed to read input: {source}")]
    ReadInput {
        #[source]
        source: std::io::Error,
    },

    /// Digest line could not be written.
    #[error("failed to write output: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },

    /// The hasher state was misused across the command boundary.
    #[error("hasher state error: {source}")]
    Stream {
        #[from]
        source: StreamError,
    },
}
