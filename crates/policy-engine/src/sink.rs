//! Destinations for rendered artifacts

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

pub trait ReportSink {
    fn write(&mut self, name: &str, content: &str) -> Result<()>;
}

/// Writes each artifact as a UTF-8 file inside one directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ReportSink for DirectorySink {
    fn write(&mut self, name: &str, content: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        fs::write(&path, content)?;
        info!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}

/// Keeps artifacts in memory, keyed by name; later writes replace earlier ones
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub artifacts: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts.get(name).map(String::as_str)
    }
}

impl ReportSink for MemorySink {
    fn write(&mut self, name: &str, content: &str) -> Result<()> {
        self.artifacts.insert(name.to_string(), content.to_string());
        Ok(())
    }
}
