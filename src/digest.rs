//! The keyed digest used by the reference passcode.
//!
//! This is *not* HMAC: the inner padded key and the message are appended to
//! the outer hash unhashed, giving `H(k ^ 0x5c) || (k ^ 0x36) || m`. The key is
//! used at its own length, never padded or shortened to the hash block size.
//! Standard HMAC vectors do not match it. See [`crate::rfc6238`] for the real thing.

use sha1::{Digest, Sha1};

pub const OUTER_PAD: u8 = 0x5c;
pub const INNER_PAD: u8 = 0x36;

/// Output length of the hash primitive.
pub const HASH_LEN: usize = 20;

pub fn xor_pad(bytes: &[u8], pad: u8) -> Vec<u8> {
  bytes.iter().map(|b| b ^ pad).collect()
}

pub fn keyed_digest(key: &[u8], message: &[u8]) -> Vec<u8> {
  let outer = Sha1::digest(xor_pad(key, OUTER_PAD));
  let mut digest = Vec::with_capacity(HASH_LEN + key.len() + message.len());
  digest.extend_from_slice(&outer);
  digest.extend_from_slice(&xor_pad(key, INNER_PAD));
  digest.extend_from_slice(message);
  digest
}
