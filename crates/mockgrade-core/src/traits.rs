//! Output sinks used by the session's copy action.

use std::sync::{Arc, Mutex};

/// A destination for exported text.
///
/// The session tries a primary sink first and a fallback sink second,
/// so implementations should fail fast rather than retry.
pub trait Clipboard: Send {
    /// Human-readable sink name (e.g. "file", "stdout").
    fn name(&self) -> &str;

    /// Place `text` in the sink.
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// A clipboard that writes into a file, replacing its contents.
pub struct FileClipboard {
    path: std::path::PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn name(&self) -> &str {
        "file"
    }

    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        use anyhow::Context;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// An in-memory clipboard, mostly useful in tests and embedders.
///
/// Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self {
            contents: Arc::default(),
            fail: true,
        }
    }

    /// The last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        *self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
        Ok(())
    }
}
