//! hedtools-config — runtime configuration for the HED tools web interface.
//!
//! Startup sequence for a consuming application:
//!   1. [`Config::bootstrap`] — resolve paths, draw the session secret
//!   2. [`logger::init`] with `Some(config.log_file())` — install tracing
//!   3. Hand `&Config` to each subsystem at its own construction time
//!
//! The configuration is immutable after bootstrap and freely shared across
//! threads. Nothing here creates directories or files, except the logger
//! opening its sink; the upload directory is the upload handler's to create.

pub mod config;
pub mod error;
pub mod logger;

pub use config::{Config, LOG_DIRECTORY, LOG_FILE_NAME, SECRET_KEY_LEN, SecretKey, UPLOAD_SUBDIR};
pub use error::AppError;
