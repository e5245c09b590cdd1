//! Runtime configuration for the HED tools web interface.
//!
//! Four values, computed once at startup and immutable for the process
//! lifetime:
//!
//! - upload folder — OS temp directory + `hedtools_uploads`
//! - session secret — 24 bytes from the OS secure random source
//! - log directory — `/var/log/hedtools`
//! - error log — `error.log` inside the log directory
//!
//! # Module layout
//!
//! - **types** — the resolved [`Config`] consumers receive.
//! - **secret** — [`SecretKey`] generation and safe exposure.
//! - **build** — bootstrap and path derivation.

mod build;
mod secret;
mod types;

pub use build::{LOG_DIRECTORY, UPLOAD_SUBDIR, upload_folder_under};
pub use secret::{SECRET_KEY_LEN, SecretKey};
pub use types::{Config, LOG_FILE_NAME};
