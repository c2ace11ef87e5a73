use crate::error::{Error, Result};

pub const MIN_DIGEST_LEN: usize = 4;

/// Folds `digest` into a non-negative 31-bit integer.
///
/// The digest is cut into four equal columns of `len / 4` bytes and each column
/// is XORed down to one byte. The `len % 4` trailing bytes are XORed into the
/// leading output bytes. The four bytes are read as a little-endian `i32` and
/// the sign bit is cleared.
///
/// This is not the offset-nibble truncation from RFC 4226.
pub fn fold(digest: &[u8]) -> Result<u32> {
  if digest.len() < MIN_DIGEST_LEN {
    return Err(Error::InternalInvariant(format!(
      "digest of {} bytes is shorter than {}", digest.len(), MIN_DIGEST_LEN)));
  }
  let stride = digest.len() / 4;
  let (columns, remnant) = digest.split_at(stride * 4);

  let mut v = [0u8; 4];
  for (y, column) in columns.chunks_exact(stride).enumerate() {
    v[y] = column.iter().fold(0, |acc, b| acc ^ b);
  }
  for (x, b) in remnant.iter().enumerate() {
    v[x] ^= b;
  }

  Ok((i32::from_le_bytes(v) & 0x7FFF_FFFF) as u32)
}
