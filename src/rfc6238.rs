//! RFC 4226 / RFC 6238 passcodes, for interop with standard authenticator apps.

use hmac::{digest::FixedOutput, Hmac, Mac};

use crate::error::{Error, Result};

pub fn base32_encode(secret: &[u8]) -> String {
  base32::encode(base32::Alphabet::RFC4648 { padding: true }, secret)
}

/// Accepts upper or lower case, with or without `=` padding and spaces.
pub fn base32_decode(text: &str) -> Option<Vec<u8>> {
  let cleaned = text.chars()
    .filter(|c| !c.is_whitespace())
    .collect::<String>()
    .trim_end_matches('=')
    .to_uppercase();
  base32::decode(base32::Alphabet::RFC4648 { padding: false }, &cleaned)
}

/// 31-bit HOTP value of `secret` at `counter`, before the decimal reduction.
pub fn hotp(secret: &[u8], counter: u64) -> Result<u32> {
  let mut mac = Hmac::<sha1::Sha1>::new_from_slice(secret)
    .map_err(|e| Error::Configuration(format!("hmac key rejected: {}", e)))?;
  mac.update(&counter.to_be_bytes());
  let signature = mac.finalize_fixed();
  dynamic_truncate(&signature)
}

/// Picks the 4-byte window selected by the low nibble of the last byte.
pub fn dynamic_truncate(signature: &[u8]) -> Result<u32> {
  let last = signature.last()
    .ok_or_else(|| Error::InternalInvariant("empty signature".to_string()))?;
  let offset = (last & 0x0f) as usize;
  let window = signature.get(offset..offset + 4)
    .ok_or_else(|| Error::InternalInvariant(format!(
      "signature of {} bytes has no window at offset {}", signature.len(), offset)))?;
  let code = u32::from_be_bytes([window[0], window[1], window[2], window[3]]);
  Ok(code & 0x7fff_ffff)
}
