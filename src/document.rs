//! @acp:module "Document"
//! @acp:summary "Assemble resolved rule blocks into the output markdown file"
//! @acp:domain cli
//! @acp:layer io

use std::path::Path;

use crate::error::Result;

/// @acp:summary "Output document under construction"
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    marker: String,
    blocks: Vec<String>,
}

impl Document {
    pub fn new(title: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            marker: marker.into(),
            blocks: Vec::new(),
        }
    }

    /// Add a resolved rule block. Empty text is ignored.
    pub fn push_rule(&mut self, text: &str) {
        if !text.is_empty() {
            self.blocks.push(text.to_string());
        }
    }

    /// Add an operator-written rule
    pub fn push_custom(&mut self, title: &str, body: &str) {
        self.blocks.push(format!("## {}\n\n{}", title, body));
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.blocks.len() + 2);
        parts.push(format!("# {}\n", self.title));
        parts.push(format!("> {}\n", self.marker));
        parts.extend(self.blocks.iter().cloned());
        parts.join("\n")
    }

    /// Write the whole document in one call
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.render())?;
        tracing::info!("Wrote {} ({} blocks)", path.display(), self.blocks.len());
        Ok(())
    }
}
