use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Rejected construction parameters. Fix the configuration, retrying won't help.
  #[error("configuration error: {0}")]
  Configuration(String),

  /// A programming error inside the pipeline, never a runtime condition.
  #[error("internal invariant violated: {0}")]
  InternalInvariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
