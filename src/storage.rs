//! Durable storage for the session token.
//!
//! DESIGN
//! ======
//! The console persists exactly one value across restarts: the opaque
//! session token. Absent or empty means unauthenticated. The username is
//! deliberately not persisted; it is re-fetched from the profile endpoint
//! after startup. The contract is a narrow key-value get/set/remove seam so
//! the session store can run on a throwaway backend in tests.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Backend holding the single persisted token value.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token. Empty string when absent.
    fn load(&self) -> String;

    /// Persist the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, token: &str) -> io::Result<()>;

    /// Remove the persisted token entirely. Removing an absent token is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be modified.
    fn clear(&self) -> io::Result<()>;
}

// =============================================================================
// FILE BACKEND
// =============================================================================

/// Token persisted as a single file — the native analog of the browser
/// build's localStorage entry.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> String {
        fs::read_to_string(&self.path)
            .map(|raw| raw.trim().to_owned())
            .unwrap_or_default()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error),
            _ => Ok(()),
        }
    }
}

// =============================================================================
// MEMORY BACKEND
// =============================================================================

/// In-memory backend for tests and `--no-persist` runs.
#[derive(Default)]
pub struct MemoryTokenStore {
    value: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Whether a token is currently persisted. Test helper.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.lock().is_ok_and(|slot| slot.is_some())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> String {
        self.value
            .lock()
            .map(|slot| slot.clone().unwrap_or_default())
            .unwrap_or_default()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Ok(mut slot) = self.value.lock() {
            *slot = Some(token.to_owned());
        }
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        if let Ok(mut slot) = self.value.lock() {
            *slot = None;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
