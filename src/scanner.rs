//! @ai:module:intent Collect edit sites from the assembly for one target file
//! @ai:module:layer application
//! @ai:module:public_api scan_assembly, MemberScope
//! @ai:module:depends_on metadata, sites
//! @ai:module:stateless true

use crate::metadata::Assembly;
use crate::sites::{EditSite, EditSites};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Which file a type's members are recorded under
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MemberScope {
    /// Members go under whatever file they report, even outside the target.
    #[default]
    AsReported,
    /// Members reporting another file are dropped.
    TargetOnly,
}

/// @ai:intent Collect the lines of every non-deprecated type in `target` and of its members
/// @ai:post every type site belongs to `target`
/// @ai:post member sites are only filtered by file when scope is TargetOnly
/// @ai:effects pure
pub fn scan_assembly(assembly: &Assembly, target: &Path, scope: MemberScope) -> EditSites {
    let mut sites = EditSites::default();

    for (fqn, ty) in &assembly.types {
        if ty.is_deprecated() {
            continue;
        }

        let loc = &ty.location_in_module;
        if loc.filename != target {
            continue;
        }

        sites.push(&loc.filename, EditSite::new(loc.line, fqn.as_str()));

        for member in ty.members() {
            let mloc = &member.location_in_module;
            if scope == MemberScope::TargetOnly && mloc.filename != target {
                tracing::debug!(
                    "Skipping member of {} reported in {}",
                    fqn,
                    mloc.filename.display()
                );
                continue;
            }

            let label = match &member.name {
                Some(name) => format!("{}#{}", fqn, name),
                None => fqn.clone(),
            };
            sites.push(&mloc.filename, EditSite::new(mloc.line, label));
        }
    }

    sites
}
