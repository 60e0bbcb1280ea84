use std::path::Path;

use crate::{error::Result, types::DetectionResult};

impl DetectionResult {
    /// Pretty-printed JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save the record as pretty JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// JSON schema of the output record
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(DetectionResult)
    }
}
