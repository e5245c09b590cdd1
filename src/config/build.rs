//! Configuration bootstrap — derives the four runtime values.
//!
//! [`Config::bootstrap`] runs once at startup, before any request handling
//! begins. Failures here are fatal: serving requests without a secret key or
//! with an unresolved upload location is not a degraded mode.

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AppError;

use super::secret::SecretKey;
use super::types::Config;

/// Subdirectory of the OS temp root that receives uploads.
pub const UPLOAD_SUBDIR: &str = "hedtools_uploads";

/// Directory the error log is written to.
pub const LOG_DIRECTORY: &str = "/var/log/hedtools";

impl Config {
    /// Compute the configuration for this process.
    ///
    /// Resolves the OS temp directory (honouring `TMPDIR`-style settings),
    /// derives the upload folder, draws a fresh session secret, and fixes the
    /// log paths. Any failure aborts startup with a diagnostic naming the
    /// value that could not be computed.
    pub fn bootstrap() -> Result<Self, AppError> {
        let temp = env::temp_dir();
        validate_temp_dir(&temp)?;

        let upload_folder = upload_folder_under(&temp);
        let secret_key = SecretKey::generate()?;

        let config = Self::from_parts(upload_folder, secret_key, PathBuf::from(LOG_DIRECTORY));

        info!(
            upload_folder = %config.upload_folder().display(),
            log_file = %config.log_file().display(),
            secret_fingerprint = %config.secret_key().fingerprint(),
            "configuration initialised"
        );

        Ok(config)
    }
}

/// Upload folder for a given temp root. Pure — tests pass a path directly
/// instead of mutating the process environment.
pub fn upload_folder_under(temp: &Path) -> PathBuf {
    temp.join(UPLOAD_SUBDIR)
}

/// Reject unusable temp roots. `std::env::temp_dir` itself never fails, so an
/// unusual host shows up as an empty or relative result.
fn validate_temp_dir(temp: &Path) -> Result<(), AppError> {
    if temp.as_os_str().is_empty() {
        return Err(AppError::Config(
            "upload folder: OS temp directory resolved to an empty path".into(),
        ));
    }
    if !temp.is_absolute() {
        return Err(AppError::Config(format!(
            "upload folder: OS temp directory is not absolute: {}",
            temp.display()
        )));
    }
    Ok(())
}
