//! Print the SHA1 fingerprint of the debug keystore.

use anyhow::Result;

use super::keystore;

/// Substring identifying a fingerprint line in `keytool` output.
pub const MARKER: &str = "SHA1";

/// Yield every line of `text` containing [`MARKER`], trimmed,
/// in the order they appear.
pub fn fingerprint_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|line| line.contains(MARKER))
        .map(str::trim)
}

/// Execute the `fingerprint` command.
pub fn command() -> Result<()> {
    let keystore = keystore::resolve_debug_keystore();
    let listing = keystore::list_certificate(&keystore)?;

    let mut found = false;
    for line in fingerprint_lines(&listing.stdout) {
        println!("{line}");
        found = true;
    }
    if !found {
        log::warn!("No {MARKER} fingerprint found for {}", keystore.display());
    }
    Ok(())
}
