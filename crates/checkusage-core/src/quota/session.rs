//! Authenticated session and its scoped on-disk artifact
//!
//! Login produces a [`Session`] that subsequent calls borrow. The
//! session writes a small artifact file to the temp directory for the
//! lifetime of the run; the file name embeds the invocation timestamp
//! and pid so concurrent invocations never collide, and removal is
//! guaranteed by `Drop` on every exit path, including authentication
//! failure.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

// ============================================================================
// Session Artifact
// ============================================================================

/// Scoped per-run session file, removed when dropped
#[derive(Debug)]
pub(crate) struct SessionArtifact {
    path: PathBuf,
}

impl SessionArtifact {
    /// Create the artifact in the OS temp directory
    pub(crate) fn create() -> std::io::Result<Self> {
        Self::create_in(std::env::temp_dir())
    }

    /// Create the artifact under a specific directory
    pub(crate) fn create_in(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let name = format!(
            "adrive-session.{}.{}.json",
            Utc::now().timestamp_micros(),
            std::process::id()
        );
        let path = dir.as_ref().join(name);
        fs::write(&path, "{}")?;
        log::debug!("[session] Created session artifact: {:?}", path);
        Ok(Self { path })
    }

    /// Record the logged-in pool host in the artifact
    pub(crate) fn record(&self, pool: &str) -> std::io::Result<()> {
        let body = serde_json::json!({
            "pool": pool,
            "logged_in_at": Utc::now().to_rfc3339(),
        });
        fs::write(&self.path, body.to_string())
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SessionArtifact {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => log::debug!("[session] Removed session artifact: {:?}", self.path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!(
                "[session] Failed to remove session artifact {:?}: {}",
                self.path,
                e
            ),
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Authenticated context established by login
///
/// Owns the resolved pool host and the session artifact; usage-fetch
/// and logout borrow it. How continuity reaches the server (a cookie
/// store on the HTTP client) is a transport detail, not part of this
/// type's contract. Dropping the session invalidates the local state.
#[derive(Debug)]
pub struct Session {
    pool: String,
    artifact: SessionArtifact,
}

impl Session {
    pub(crate) fn new(pool: impl Into<String>, artifact: SessionArtifact) -> Self {
        Self {
            pool: pool.into(),
            artifact,
        }
    }

    /// Pool host this session is bound to
    pub fn pool(&self) -> &str {
        &self.pool
    }

    /// Location of the per-run session artifact
    pub fn artifact_path(&self) -> &Path {
        self.artifact.path()
    }
}

// ============================================================================
// Tests
// ============================================================================
