use serde::{Deserialize, Serialize};

/// Run parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PadParams {
    /// Name of the output subdirectory created inside the target directory
    pub subdir: String,
}

impl Default for PadParams {
    fn default() -> Self {
        Self {
            subdir: "Texture".to_string(),
        }
    }
}
