/// The four wyhash round primes. Compile-time constants; lane `k` of the
/// absorber mixes with `PRIMES[k + 1]`, `PRIMES[0]` only seeds and
/// finalizes.
pub(crate) const PRIMES: [u64; 4] = [
    0xa0761d6478bd642f,
    0xe7037ed1a0b428db,
    0x8ebc6af09c88c6e3,
    0x589965cc75374cc3,
];

/// Widening 64x64 -> 128 multiply, split back into (low, high) halves.
#[inline]
pub(crate) fn mum(a: u64, b: u64) -> (u64, u64) {
    let wide = u128::from(a).wrapping_mul(u128::from(b));
    (wide as u64, (wide >> 64) as u64)
}

/// Multiply-and-fold: XOR of the two halves of the 128-bit product.
#[inline]
pub(crate) fn mix(a: u64, b: u64) -> u64 {
    let (lo, hi) = mum(a, b);
    lo ^ hi
}

/// Little-endian u64 read at `offset`.
#[inline]
pub(crate) fn read_u64(buffer: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(buffer[offset..offset + 8].try_into().unwrap())
}

/// Little-endian u32 read at `offset`, zero-extended.
#[inline]
pub(crate) fn read_u32(buffer: &[u8], offset: usize) -> u64 {
    u64::from(u32::from_le_bytes(
        buffer[offset..offset + 4].try_into().unwrap(),
    ))
}
