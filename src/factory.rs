use std::time::SystemTime;

use crate::counter;
use crate::digest::keyed_digest;
use crate::error::{Error, Result};
use crate::rfc6238;
use crate::secret::Secret;
use crate::truncate::fold;

pub const DEFAULT_TIME_STEP: i64 = 30;
pub const DIGITS: usize = 6;
const MODULUS: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
  /// Reference-compatible pipeline: the non-HMAC keyed digest, column-XOR folding
  /// and a little-endian counter. Codes do not match authenticator apps.
  #[default]
  Legacy,
  /// HMAC-SHA1 with offset truncation and a big-endian counter (RFC 6238).
  ///
  /// RFC 6238 counters are unsigned. Before 1970 the negative counter is
  /// hashed as its two's complement bytes, so `-1` counts as `u64::MAX`.
  Rfc6238,
}

impl std::fmt::Display for Algorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Legacy => "legacy",
      Self::Rfc6238 => "rfc6238",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PasscodeConfig {
  /// Window length in seconds, must be positive.
  pub time_step: i64,
  pub algorithm: Algorithm,
}

impl Default for PasscodeConfig {
  fn default() -> Self {
    Self { time_step: DEFAULT_TIME_STEP, algorithm: Algorithm::default() }
  }
}

impl PasscodeConfig {
  pub fn validate(&self) -> Result<()> {
    if self.time_step <= 0 {
      return Err(Error::Configuration(format!("time step must be positive, got {}", self.time_step)));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Passcode {
  /// In `0..=999999`.
  pub value: u32,
  /// Unix second the current window ends, always a multiple of the time step.
  pub expires: i64,
}

impl Passcode {
  /// Zero-padded six digit rendering, same as `Display`.
  pub fn code(&self) -> String { self.to_string() }

  pub fn expires_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(self.expires, 0)
  }

  /// Seconds left at unix time `now`, zero once expired.
  pub fn remaining(&self, now: i64) -> i64 {
    self.expires.saturating_sub(now).max(0)
  }
}

impl std::fmt::Display for Passcode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:0width$}", self.value, width = DIGITS)
  }
}

/// Generates passcodes for one secret. Immutable once built, so a single
/// instance can be shared between threads as is.
#[derive(Debug, Clone)]
pub struct PasscodeFactory {
  secret: Secret,
  time_step: i64,
  algorithm: Algorithm,
}

pub struct PasscodeFactoryBuilder {
  secret: Secret,
  config: PasscodeConfig,
}

impl PasscodeFactoryBuilder {
  pub fn time_step(mut self, seconds: i64) -> Self {
    self.config.time_step = seconds;
    self
  }

  pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
    self.config.algorithm = algorithm;
    self
  }

  pub fn config(mut self, config: PasscodeConfig) -> Self {
    self.config = config;
    self
  }

  pub fn build(self) -> Result<PasscodeFactory> {
    self.config.validate()?;
    if self.secret.is_empty() {
      return Err(Error::Configuration("secret must not be empty".to_string()));
    }
    debug!("passcode factory: time_step={}s algorithm={} secret_len={}",
      self.config.time_step, self.config.algorithm, self.secret.len());
    Ok(PasscodeFactory {
      secret: self.secret,
      time_step: self.config.time_step,
      algorithm: self.config.algorithm,
    })
  }
}

impl PasscodeFactory {
  pub fn builder<S: Into<Secret>>(secret: S) -> PasscodeFactoryBuilder {
    PasscodeFactoryBuilder { secret: secret.into(), config: PasscodeConfig::default() }
  }

  /// 30 second windows, legacy algorithm.
  pub fn new<S: Into<Secret>>(secret: S) -> Result<Self> {
    Self::builder(secret).build()
  }

  pub fn with_time_step<S: Into<Secret>>(secret: S, time_step: i64) -> Result<Self> {
    Self::builder(secret).time_step(time_step).build()
  }

  pub fn with_config<S: Into<Secret>>(secret: S, config: &PasscodeConfig) -> Result<Self> {
    Self::builder(secret).config(config.clone()).build()
  }

  pub fn time_step(&self) -> i64 { self.time_step }
  pub fn algorithm(&self) -> Algorithm { self.algorithm }

  /// Passcode for the current window of the system clock.
  pub fn generate(&self) -> Result<Passcode> {
    self.generate_at(SystemTime::now())
  }

  pub fn generate_at(&self, now: SystemTime) -> Result<Passcode> {
    self.generate_at_unix(counter::unix_time(now))
  }

  /// Passcode for the window containing unix second `now`.
  ///
  /// Only fails with [`Error::InternalInvariant`]: never with a correctly sized
  /// hash primitive, and for instants whose window ends past `i64::MAX`.
  pub fn generate_at_unix(&self, now: i64) -> Result<Passcode> {
    let counter = self.counter_at_unix(now);
    let raw = match self.algorithm {
      Algorithm::Legacy => fold(&keyed_digest(self.secret.as_bytes(), &counter.to_le_bytes()))?,
      // same eight bytes as the signed counter, big-endian
      Algorithm::Rfc6238 => rfc6238::hotp(self.secret.as_bytes(), counter as u64)?,
    };
    let expires = counter::window_end(counter, self.time_step).ok_or_else(|| Error::InternalInvariant(
      format!("window {} of {}s ends past the last representable second", counter, self.time_step)))?;
    trace!("passcode window: counter={} expires={}", counter, expires);
    Ok(Passcode { value: raw % MODULUS, expires })
  }

  pub fn counter_at_unix(&self, now: i64) -> i64 {
    counter::counter_from_unix(now, self.time_step)
  }
}
