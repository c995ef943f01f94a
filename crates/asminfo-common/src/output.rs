//! ---
//! asminfo_section: "03-configuration-logging"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Shared configuration, logging, and build metadata."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use std::fs;
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

const WRITE_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(50);

/// Result of persisting generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or its contents replaced.
    Written,
    /// The file already held identical bytes and was left untouched.
    Unchanged,
}

/// Write `content` to `path` unless the file already holds it.
///
/// Leaving an identical file alone preserves its timestamp, so regenerating
/// does not trigger a recompile. Transient write failures (for example a
/// file briefly locked by another build process) are retried.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    if let Ok(existing) = fs::read(path) {
        if existing == content.as_bytes() {
            debug!(path = %path.display(), "generated file is up to date");
            return Ok(WriteOutcome::Unchanged);
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("unable to create output directory {}", parent.display()))?;
    }

    with_retry(|| fs::write(path, content))
        .with_context(|| format!("unable to write generated file {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "wrote generated file");
    Ok(WriteOutcome::Written)
}

fn with_retry(mut operation: impl FnMut() -> io::Result<()>) -> io::Result<()> {
    let mut attempt = 1;
    loop {
        match operation() {
            Ok(()) => return Ok(()),
            Err(err) if attempt < WRITE_ATTEMPTS => {
                warn!(attempt, error = %err, "file operation failed; retrying");
                thread::sleep(RETRY_DELAY);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
