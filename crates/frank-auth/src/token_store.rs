use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::Session;

const DEFAULT_KEYRING_SERVICE: &str = "frank-cli";
const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session.json";

/// Env var holding a raw access token (CI and scripted use).
pub const TOKEN_ENV_VAR: &str = "FRANK_AUTH__TOKEN";

/// Returns the keyring service name.
///
/// Defaults to `"frank-cli"`. Override via `FRANK_KEYRING_SERVICE` for
/// testing to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("FRANK_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a session in the OS keychain. Falls back to file if keyring unavailable.
///
/// A keychain write only counts when a fresh entry reads the same value
/// back. Backends that accept writes without persisting them (the mock
/// store keyring uses when no platform backend is available) fall through
/// to the file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(session: &Session) -> Result<(), AuthError> {
    let json = serde_json::to_string(session)
        .map_err(|e| AuthError::TokenStoreError(format!("serialize session: {e}")))?;
    match store_keyring(&json) {
        Ok(()) => Ok(()),
        Err(reason) => {
            tracing::warn!(%reason, "keyring store unusable; falling back to file");
            store_file(&session_path()?, &json)
        }
    }
}

/// Load a session. Priority: keyring → `FRANK_AUTH__TOKEN` env → file (`~/.frank/session.json`).
#[must_use]
pub fn load() -> Option<Session> {
    // 1. Keyring
    if let Some(session) = load_keyring() {
        return Some(session);
    }

    // 2. Environment variable
    if let Some(session) = load_env() {
        return Some(session);
    }

    // 3. File fallback
    session_path().ok().and_then(|path| load_file(&path))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the session file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Missing keyring entries are fine.
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }
    delete_file(&session_path()?)
}

/// Detect which tier the current session came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<String> {
    if load_keyring().is_some() {
        return Some("keyring".into());
    }
    if load_env().is_some() {
        return Some("env".into());
    }
    if session_path().ok().and_then(|path| load_file(&path)).is_some() {
        return Some("file".into());
    }
    None
}

// --- Private tier helpers ---

fn store_keyring(json: &str) -> Result<(), String> {
    let entry = keyring::Entry::new(&keyring_service(), KEYRING_USER).map_err(|e| e.to_string())?;
    entry.set_password(json).map_err(|e| e.to_string())?;

    let readback = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        .and_then(|fresh| fresh.get_password())
        .map_err(|e| format!("read-back failed: {e}"))?;
    if readback == json {
        Ok(())
    } else {
        Err("read-back returned a different value".into())
    }
}

fn load_keyring() -> Option<Session> {
    let entry = keyring::Entry::new(&keyring_service(), KEYRING_USER).ok()?;
    let json = entry.get_password().ok()?;
    parse_stored(&json)
}

fn load_env() -> Option<Session> {
    let token = std::env::var(TOKEN_ENV_VAR).ok()?;
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    match Session::from_access_token(token) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, "{TOKEN_ENV_VAR} is not a decodable access token");
            None
        }
    }
}

fn parse_stored(json: &str) -> Option<Session> {
    if json.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(json) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, "ignoring unreadable stored session");
            None
        }
    }
}

fn session_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".frank").join(SESSION_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found, cannot store session".into())
        })
}

fn store_file(path: &Path, json: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, json)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file(path: &Path) -> Option<Session> {
    fs::read_to_string(path)
        .ok()
        .and_then(|json| parse_stored(&json))
}

fn delete_file(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}
