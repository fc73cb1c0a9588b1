use crate::domain::error::SeedError;

/// Parse a seed string as decimal or `0x`-prefixed hexadecimal.
///
/// Both spellings of the same value map to the same u64, so `"26"` and
/// `"0x1a"` select identical digests.
pub fn parse_seed(input: &str) -> Result<u64, SeedError> {
    let trimmed = input.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| SeedError::Invalid {
        input: input.to_string(),
    })
}
