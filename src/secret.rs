use crate::error::{Error, Result};
use crate::rfc6238;

/// Shared secret bytes. Text secrets are taken as their UTF-8 encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
  /// Decodes an RFC 4648 base32 secret, the form authenticator apps exchange.
  pub fn from_base32(text: &str) -> Result<Self> {
    rfc6238::base32_decode(text)
      .map(Self)
      .ok_or_else(|| Error::Configuration("secret is not valid base32".to_string()))
  }

  pub fn to_base32(&self) -> String { rfc6238::base32_encode(&self.0) }

  pub fn as_bytes(&self) -> &[u8] { &self.0 }
  pub fn len(&self) -> usize { self.0.len() }
  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl std::fmt::Debug for Secret {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Secret(<{} bytes>)", self.0.len())
  }
}

impl From<Vec<u8>> for Secret {
  fn from(value: Vec<u8>) -> Self { Self(value) }
}

impl From<&[u8]> for Secret {
  fn from(value: &[u8]) -> Self { Self(value.to_vec()) }
}

impl<const N: usize> From<&[u8; N]> for Secret {
  fn from(value: &[u8; N]) -> Self { Self(value.to_vec()) }
}

impl From<&str> for Secret {
  fn from(value: &str) -> Self { Self(value.as_bytes().to_vec()) }
}

impl From<String> for Secret {
  fn from(value: String) -> Self { Self(value.into_bytes()) }
}
