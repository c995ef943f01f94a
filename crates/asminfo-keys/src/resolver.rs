//! ---
//! asminfo_section: "01-signing-keys"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Strong-name key interpretation and token derivation."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::blob::{public_key_from_private_blob, strong_name_token, PRIVATE_KEY_BLOB};
use crate::errors::{KeyError, Result};

/// File extension recognised as a strong-name key file.
pub const STRONG_NAME_KEY_EXTENSION: &str = "snk";

/// Hex-encoded public key and public key token of a strong-name key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyInfo {
    public_key: String,
    public_key_token: String,
}

impl KeyInfo {
    /// Derive key info from raw public key bytes.
    #[must_use]
    pub fn from_public_key(public_key: &[u8]) -> Self {
        Self {
            public_key: hex::encode(public_key),
            public_key_token: hex::encode(strong_name_token(public_key)),
        }
    }

    /// Lowercase hex of the full public key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Lowercase hex of the 8-byte public key token.
    #[must_use]
    pub fn public_key_token(&self) -> &str {
        &self.public_key_token
    }
}

/// Outcome of resolving signing key information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResolution {
    /// A public key was found.
    Resolved(KeyInfo),
    /// No key is configured, or the configured source is unsupported.
    Absent,
    /// A key source was read but yielded no key bytes.
    Unavailable,
}

impl KeyResolution {
    /// Borrow the key info when resolved.
    #[must_use]
    pub fn key_info(&self) -> Option<&KeyInfo> {
        match self {
            KeyResolution::Resolved(info) => Some(info),
            KeyResolution::Absent | KeyResolution::Unavailable => None,
        }
    }

    /// Consume the resolution, yielding the key info when resolved.
    #[must_use]
    pub fn into_key_info(self) -> Option<KeyInfo> {
        match self {
            KeyResolution::Resolved(info) => Some(info),
            KeyResolution::Absent | KeyResolution::Unavailable => None,
        }
    }

    /// True when key bytes came back empty and the caller should warn.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, KeyResolution::Unavailable)
    }
}

/// Resolve the public key and token for the configured signing key.
///
/// A key file takes precedence over a key container. Only existing files
/// with the `.snk` extension are read. Container lookup is unsupported and
/// resolves to [`KeyResolution::Absent`].
pub fn resolve(key_file: Option<&Path>, key_container: Option<&str>) -> Result<KeyResolution> {
    let public_key = match read_public_key(key_file, key_container) {
        Ok(bytes) => bytes,
        Err(KeyError::NotImplemented(container)) => {
            debug!(container = %container, "key container lookup unsupported; skipping key info");
            return Ok(KeyResolution::Absent);
        }
        Err(err) => return Err(err),
    };

    Ok(match public_key {
        Some(bytes) if !bytes.is_empty() => KeyResolution::Resolved(KeyInfo::from_public_key(&bytes)),
        Some(_) => {
            warn!("signing key produced no public key bytes; public key fields will be omitted");
            KeyResolution::Unavailable
        }
        None => KeyResolution::Absent,
    })
}

/// Read the public key held in a named key container.
pub fn public_key_from_container(container: &str) -> Result<Vec<u8>> {
    Err(KeyError::NotImplemented(container.to_owned()))
}

fn read_public_key(key_file: Option<&Path>, key_container: Option<&str>) -> Result<Option<Vec<u8>>> {
    if let Some(path) = key_file.filter(|p| !p.as_os_str().is_empty() && p.exists()) {
        if !has_key_extension(path) {
            debug!(path = %path.display(), "key file is not a .snk file; skipping key info");
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(|source| KeyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return match bytes.first() {
            Some(&PRIVATE_KEY_BLOB) => {
                debug!(path = %path.display(), "deriving public key from key pair");
                public_key_from_private_blob(&bytes).map(Some)
            }
            _ => {
                debug!(path = %path.display(), "key file holds a public key");
                Ok(Some(bytes))
            }
        };
    }

    match key_container.filter(|name| !name.is_empty()) {
        Some(container) => public_key_from_container(container).map(Some),
        None => Ok(None),
    }
}

fn has_key_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(STRONG_NAME_KEY_EXTENSION))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::blob::tests::{microsoft_key_pair_blob, MICROSOFT_PUBLIC_KEY};

    const ECMA_KEY: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0];

    fn write_key(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn nothing_configured_is_absent() {
        assert_eq!(resolve(None, None).unwrap(), KeyResolution::Absent);
        assert_eq!(resolve(None, Some("")).unwrap(), KeyResolution::Absent);
    }

    #[test]
    fn public_key_file_is_used_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_key(&dir, "public.snk", &ECMA_KEY);

        let info = resolve(Some(&path), None).unwrap().into_key_info().unwrap();
        assert_eq!(info.public_key(), "00000000000000000400000000000000");
        assert_eq!(info.public_key_token(), "b77a5c561934e089");
    }

    #[test]
    fn key_pair_file_yields_public_key_and_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_key(&dir, "pair.SNK", &microsoft_key_pair_blob());

        let info = resolve(Some(&path), None).unwrap().into_key_info().unwrap();
        assert_eq!(info.public_key(), MICROSOFT_PUBLIC_KEY);
        assert_eq!(info.public_key_token(), "b03f5f7f11d50a3a");
    }

    #[test]
    fn malformed_key_pair_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_key(&dir, "broken.snk", &[PRIVATE_KEY_BLOB, 2, 0, 0, 1]);
        let err = resolve(Some(&path), None).unwrap_err();
        assert!(matches!(err, KeyError::MalformedKeyPair(_)));
    }

    #[test]
    fn non_snk_extension_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_key(&dir, "key.pfx", &ECMA_KEY);
        assert_eq!(
            resolve(Some(&path), Some("container")).unwrap(),
            KeyResolution::Absent
        );
    }

    #[test]
    fn missing_file_falls_back_to_container() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.snk");
        assert_eq!(
            resolve(Some(&missing), Some("MyContainer")).unwrap(),
            KeyResolution::Absent
        );
    }

    #[test]
    fn container_lookup_is_not_implemented() {
        let err = public_key_from_container("MyContainer").unwrap_err();
        assert!(matches!(err, KeyError::NotImplemented(name) if name == "MyContainer"));
    }

    #[test]
    fn empty_key_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_key(&dir, "empty.snk", &[]);
        let resolution = resolve(Some(&path), None).unwrap();
        assert!(resolution.is_unavailable());
        assert!(resolution.key_info().is_none());
    }
}
