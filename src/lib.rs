//! Time-stepped six digit passcodes derived from a shared secret.
//!
//! ```
//! use stepcode::PasscodeFactory;
//!
//! let factory = PasscodeFactory::new("12345678901234567890")?;
//! let passcode = factory.generate_at_unix(59)?;
//! assert_eq!(passcode.to_string(), "630931");
//! assert_eq!(passcode.expires, 60);
//! # Ok::<(), stepcode::Error>(())
//! ```

#[macro_use]
extern crate log;

pub mod counter;
pub mod digest;
pub mod error;
pub mod factory;
pub mod rfc6238;
pub mod secret;
pub mod truncate;

pub use error::{Error, Result};
pub use factory::{Algorithm, Passcode, PasscodeConfig, PasscodeFactory, PasscodeFactoryBuilder};
pub use secret::Secret;
