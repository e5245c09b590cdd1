//! Resolved configuration types.
//!
//! [`Config`] is the ready-to-use value consumers receive at their own
//! construction time. Derivation logic lives in `build.rs`.

use std::path::{Path, PathBuf};

use super::secret::SecretKey;

/// Name of the error log inside the log directory.
pub const LOG_FILE_NAME: &str = "error.log";

/// Fully-resolved application configuration.
///
/// Built once at startup by [`Config::bootstrap`](crate::Config::bootstrap),
/// immutable afterwards. All accessors are pure; sharing `&Config` across
/// threads needs no locking.
#[derive(Debug, Clone)]
pub struct Config {
    upload_folder: PathBuf,
    secret_key: SecretKey,
    log_directory: PathBuf,
    log_file: PathBuf,
}

impl Config {
    /// Assemble a configuration from explicit parts.
    ///
    /// The log file path is derived here, so it always resides under
    /// `log_directory`. Used by bootstrap and by tests that need alternate
    /// paths.
    pub fn from_parts(
        upload_folder: PathBuf,
        secret_key: SecretKey,
        log_directory: PathBuf,
    ) -> Self {
        let log_file = log_directory.join(LOG_FILE_NAME);
        Self {
            upload_folder,
            secret_key,
            log_directory,
            log_file,
        }
    }

    /// Directory for user-submitted files, under the OS temp root.
    ///
    /// Not created here — the upload handler is responsible for creating it
    /// before the first write.
    pub fn upload_folder(&self) -> &Path {
        &self.upload_folder
    }

    /// Session secret for signing/encrypting session data.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Directory the error log lives in.
    pub fn log_directory(&self) -> &Path {
        &self.log_directory
    }

    /// Path of the error log, always inside [`Config::log_directory`].
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}
