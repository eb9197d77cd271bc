//! Locate the Android debug keystore and dump its certificate
//! with `keytool`.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

/// Location of the debug keystore, relative to the user's home.
pub const DEBUG_KEYSTORE: &str = ".android/debug.keystore";

/// Alias of the debug signing key.
pub const DEBUG_ALIAS: &str = "androiddebugkey";

/// Store and key password of the debug keystore.
pub const DEBUG_PASSWORD: &str = "android";

/// Certificate listing tool shipped with every JDK.
pub const KEYTOOL: &str = "keytool";

/// Failures that prevent `keytool` from ever running.
#[derive(Debug, thiserror::Error)]
pub enum KeytoolError {
    /// The `keytool` process could not be started.
    #[error("Failed to spawn keytool")]
    Spawn(#[source] io::Error),
}

/// Captured output of a `keytool -list` run.
pub struct Listing {
    /// Decoded standard output.
    pub stdout: String,
    /// Decoded standard error.
    pub stderr: String,
    /// Exit status of `keytool`, `None` when it is not installed.
    /// Informational only.
    pub status: Option<ExitStatus>,
}

impl Listing {
    /// Listing of a `keytool` that could not be found.
    fn missing() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            status: None,
        }
    }
}

/// Join `home` with the conventional debug keystore location.
#[inline]
pub fn debug_keystore_path(home: &Path) -> PathBuf {
    home.join(DEBUG_KEYSTORE)
}

/// Expand `~/.android/debug.keystore` against `home`. Without a home
/// directory the path is left unexpanded and `keytool` reports the
/// failure.
pub fn expand_debug_keystore(home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) => debug_keystore_path(&home),
        None => Path::new("~").join(DEBUG_KEYSTORE),
    }
}

/// Expand `~/.android/debug.keystore` for the current user.
pub fn resolve_debug_keystore() -> PathBuf {
    let home = home::home_dir();
    if home.is_none() {
        log::debug!("No home directory, leaving ~ unexpanded");
    }
    expand_debug_keystore(home)
}

/// Arguments passed to `keytool` to list the debug certificate
/// in verbose form.
pub fn list_args(keystore: &Path) -> Vec<OsString> {
    vec![
        "-list".into(),
        "-v".into(),
        "-keystore".into(),
        keystore.into(),
        "-alias".into(),
        DEBUG_ALIAS.into(),
        "-storepass".into(),
        DEBUG_PASSWORD.into(),
        "-keypass".into(),
        DEBUG_PASSWORD.into(),
    ]
}

/// Run `keytool -list -v` against `keystore` and capture its output.
///
/// A non-zero exit status is not an error: a missing keystore or a
/// wrong password only shows up as text in the captured streams. A
/// `keytool` absent from `PATH` yields an empty listing. Any other spawn
/// failure is fatal.
pub fn list_certificate(keystore: &Path) -> Result<Listing> {
    log::debug!("Listing certificate in {}", keystore.display());

    let output = match Command::new(KEYTOOL).args(list_args(keystore)).output() {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{KEYTOOL} not found: {e}");
            return Ok(Listing::missing());
        }
        Err(e) => {
            return Err(KeytoolError::Spawn(e)).context("Failed to list the debug certificate")
        }
    };

    let listing = Listing {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: Some(output.status),
    };

    if let Some(status) = listing.status.filter(|status| !status.success()) {
        log::debug!("Exit code of {KEYTOOL}: {status}");
    }
    if !listing.stderr.trim().is_empty() {
        log::debug!("{KEYTOOL} stderr: {}", listing.stderr.trim_end());
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystore_path_under_home() {
        assert_eq!(
            debug_keystore_path(Path::new("/home/alice")),
            PathBuf::from("/home/alice/.android/debug.keystore")
        );
    }

    #[test]
    fn expand_with_home() {
        assert_eq!(
            expand_debug_keystore(Some(PathBuf::from("/home/alice"))),
            PathBuf::from("/home/alice/.android/debug.keystore")
        );
    }

    #[test]
    fn expand_without_home_is_literal() {
        assert_eq!(
            expand_debug_keystore(None),
            PathBuf::from("~/.android/debug.keystore")
        );
    }

    #[test]
    fn keystore_path_keeps_spaces() {
        let path = debug_keystore_path(Path::new("/home/Jo Doe"));
        assert_eq!(path, PathBuf::from("/home/Jo Doe/.android/debug.keystore"));
        // passed as one argument, never split on whitespace
        assert!(list_args(&path).contains(&OsString::from("/home/Jo Doe/.android/debug.keystore")));
    }

    #[test]
    fn list_args_order() {
        let args = list_args(Path::new("/k"));
        let expected: Vec<OsString> = [
            "-list",
            "-v",
            "-keystore",
            "/k",
            "-alias",
            "androiddebugkey",
            "-storepass",
            "android",
            "-keypass",
            "android",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }
}
