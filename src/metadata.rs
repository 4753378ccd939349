//! @ai:module:intent Model the jsii assembly metadata consumed by the scanner
//! @ai:module:layer domain
//! @ai:module:public_api Assembly, TypeDeclaration, MemberDeclaration, SourceLocation, Stability, load_assembly, parse_assembly
//! @ai:module:depends_on error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// @ai:intent Lifecycle classification attached to a declaration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Deprecated,
    Experimental,
    Stable,
    External,
    #[serde(other)]
    Unknown,
}

/// @ai:intent Where a declaration starts in its module
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceLocation {
    pub filename: PathBuf,
    /// 1-based
    pub line: usize,
}

/// @ai:intent Documentation block of a type; only stability matters here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Docs {
    pub stability: Stability,
}

/// @ai:intent A method or property declared on a type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDeclaration {
    #[serde(default)]
    pub name: Option<String>,
    pub location_in_module: SourceLocation,
}

/// @ai:intent A class, interface or enum entry of the assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclaration {
    pub docs: Docs,
    pub location_in_module: SourceLocation,
    #[serde(default)]
    pub methods: Vec<MemberDeclaration>,
    #[serde(default)]
    pub properties: Vec<MemberDeclaration>,
}

/// @ai:intent Root of the metadata document, keyed by fully qualified name
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Assembly {
    pub types: BTreeMap<String, TypeDeclaration>,
}

impl TypeDeclaration {
    /// @ai:intent Check whether the type is already marked deprecated
    /// @ai:effects pure
    pub fn is_deprecated(&self) -> bool {
        self.docs.stability == Stability::Deprecated
    }

    /// @ai:intent Iterate methods then properties
    /// @ai:effects pure
    pub fn members(&self) -> impl Iterator<Item = &MemberDeclaration> {
        self.methods.iter().chain(self.properties.iter())
    }
}

/// @ai:intent Read and parse a metadata document from disk
/// @ai:pre path exists and is readable
/// @ai:effects fs:read
pub fn load_assembly(path: &Path) -> Result<Assembly> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_assembly(&content, path)
}

/// @ai:intent Parse metadata text; `origin` is only used in error messages
/// @ai:effects pure
pub fn parse_assembly(content: &str, origin: &Path) -> Result<Assembly> {
    serde_json::from_str(content).map_err(|e| Error::Metadata {
        path: origin.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "@aws-cdk/aws-elasticsearch",
        "types": {
            "es.Domain": {
                "fqn": "es.Domain",
                "docs": { "stability": "stable", "summary": "A domain" },
                "locationInModule": { "filename": "lib/domain.ts", "line": 40 },
                "methods": [
                    { "name": "grantRead", "locationInModule": { "filename": "lib/domain.ts", "line": 90 } }
                ]
            },
            "es.Version": {
                "docs": { "stability": "deprecated" },
                "locationInModule": { "filename": "lib/version.ts", "line": 4 }
            }
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let assembly = parse_assembly(SAMPLE, Path::new(".jsii")).unwrap();

        assert_eq!(assembly.types.len(), 2);

        let domain = &assembly.types["es.Domain"];
        assert!(!domain.is_deprecated());
        assert_eq!(domain.location_in_module.line, 40);
        assert_eq!(domain.methods.len(), 1);
        assert!(domain.properties.is_empty());
        assert_eq!(domain.methods[0].name.as_deref(), Some("grantRead"));

        assert!(assembly.types["es.Version"].is_deprecated());
    }

    #[test]
    fn test_unknown_stability_is_not_deprecated() {
        let json = r#"{ "types": { "t": {
            "docs": { "stability": "frozen" },
            "locationInModule": { "filename": "a.ts", "line": 5 }
        } } }"#;

        let assembly = parse_assembly(json, Path::new(".jsii")).unwrap();
        assert_eq!(assembly.types["t"].docs.stability, Stability::Unknown);
        assert!(!assembly.types["t"].is_deprecated());
    }

    #[test]
    fn test_missing_stability_is_fatal() {
        let json = r#"{ "types": { "t": {
            "docs": {},
            "locationInModule": { "filename": "a.ts", "line": 5 }
        } } }"#;

        let err = parse_assembly(json, Path::new("meta.json")).unwrap_err();
        assert!(matches!(err, Error::Metadata { .. }));
        assert!(err.to_string().contains("meta.json"));
    }

    #[test]
    fn test_missing_types_is_fatal() {
        assert!(parse_assembly("{}", Path::new(".jsii")).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_assembly(&dir.path().join(".jsii")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
