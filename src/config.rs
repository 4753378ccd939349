//! @ai:module:intent Configuration for one annotation run
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnnotatorConfig
//! @ai:module:depends_on scanner, error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::scanner::MemberScope;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Paths and names that drive a run; built once, read-only afterwards
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Directory every other path is relative to.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_metadata_file")]
    pub metadata_file: PathBuf,
    /// Module file whose declarations get annotated, as spelled in the metadata.
    #[serde(default = "default_target_file")]
    pub target_file: PathBuf,
    /// Module named in the notice as the one to use instead.
    #[serde(default = "default_replacement")]
    pub replacement: String,
    #[serde(default)]
    pub member_scope: MemberScope,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            metadata_file: default_metadata_file(),
            target_file: default_target_file(),
            replacement: default_replacement(),
            member_scope: MemberScope::default(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_metadata_file() -> PathBuf {
    PathBuf::from(".jsii")
}

fn default_target_file() -> PathBuf {
    PathBuf::from("lib/domain.ts")
}

fn default_replacement() -> String {
    "opensearchservice".to_string()
}

impl AnnotatorConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// @ai:effects pure
    pub fn metadata_path(&self) -> PathBuf {
        self.root.join(&self.metadata_file)
    }

    /// @ai:intent Resolve a module-relative path reported by the metadata
    /// @ai:effects pure
    pub fn source_path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
