//! @ai:module:intent Append deprecation notices to the doc block above each edit site
//! @ai:module:layer application
//! @ai:module:public_api annotate, annotate_anchor, anchor_index, starts_new_doc_entry, Notice, Insertion, AppliedEdit
//! @ai:module:depends_on source, sites, error
//! @ai:module:stateless true
//!
//! A declaration starting on 1-based line `L` is expected to look like:
//!
//! ```text
//!   /**                  L-3 (0-based index L-4)
//!    * Summary text      L-2 (0-based index L-3)  <- anchor
//!    */                  L-1
//!   export class Domain  L
//! ```
//!
//! The notice is appended to the anchor entry of the buffer, so it lands
//! right before the closing delimiter.

use crate::error::{Error, Result};
use crate::sites::EditSite;
use crate::source::SourceFile;
use serde::{Deserialize, Serialize};

/// Character that opens a block tag such as `@default` or `@see`.
pub const DOC_TAG_MARKER: char = '@';

/// @ai:intent Check whether a comment line's first content character starts a tag
/// @ai:example ('@') -> true
/// @ai:example ('T') -> false
/// @ai:effects pure
pub fn starts_new_doc_entry(c: char) -> bool {
    c == DOC_TAG_MARKER
}

/// @ai:intent Text of the inserted tag line, without the leading `* `
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
}

impl Notice {
    /// @ai:example ("opensearchservice") -> "@deprecated use opensearchservice module instead"
    pub fn for_replacement(module: &str) -> Self {
        Self {
            text: format!("@deprecated use {} module instead", module),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// @ai:intent Shape of what was appended after an anchor line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Insertion {
    /// Only the notice line.
    NoticeOnly,
    /// A bare `*` line, then the notice line.
    SeparatorAndNotice,
}

impl Insertion {
    pub fn lines_added(&self) -> usize {
        match self {
            Insertion::NoticeOnly => 1,
            Insertion::SeparatorAndNotice => 2,
        }
    }
}

/// @ai:intent Record of one applied edit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedEdit {
    pub line: usize,
    pub anchor_index: usize,
    pub insertion: Insertion,
    pub declaration: String,
}

/// @ai:intent Map a 1-based declaration line to the 0-based anchor index
/// @ai:example (10) -> Some(7)
/// @ai:example (2) -> None
/// @ai:effects pure
pub fn anchor_index(line: usize) -> Option<usize> {
    line.checked_sub(3)
}

/// @ai:intent Append the notice (and a separator when needed) to one anchor line
/// @ai:pre anchor is a single line, optionally ending in its terminator
/// @ai:post anchor keeps its original content as a prefix
/// @ai:effects pure
pub fn annotate_anchor(anchor: &mut String, notice: &Notice) -> Insertion {
    let (content, eol) = split_terminator(anchor);
    let indent = content.chars().take_while(|c| c.is_whitespace()).count();

    // The terminator stands in for the character at indent+2 when the content stops right before it.
    let insertion = if content.chars().count() < indent + 2 {
        Insertion::NoticeOnly
    } else {
        match content.chars().nth(indent + 2) {
            Some(c) if starts_new_doc_entry(c) => Insertion::NoticeOnly,
            _ => Insertion::SeparatorAndNotice,
        }
    };

    let eol = match eol {
        "" => {
            anchor.push('\n');
            "\n"
        }
        eol => eol,
    };
    let pad = " ".repeat(indent);

    if insertion == Insertion::SeparatorAndNotice {
        anchor.push_str(&format!("{}*{}", pad, eol));
    }
    anchor.push_str(&format!("{}* {}{}", pad, notice.text(), eol));

    insertion
}

/// @ai:intent Split a line into its content and its `\r\n`, `\n` or empty terminator
/// @ai:example ("  * a\r\n") -> ("  * a", "\r\n")
/// @ai:effects pure
fn split_terminator(line: &str) -> (&str, &'static str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// @ai:intent Apply every site of one file to its buffer, in the given order
/// @ai:pre sites are sorted by descending line
/// @ai:post one AppliedEdit per site, in application order
/// @ai:effects pure
/// @ai:edge_cases lines below 3 or past the end of the buffer are errors
pub fn annotate(
    source: &mut SourceFile,
    sites: &[EditSite],
    notice: &Notice,
) -> Result<Vec<AppliedEdit>> {
    let mut applied = Vec::with_capacity(sites.len());

    for site in sites {
        let len = source.len();
        let index = match anchor_index(site.line) {
            Some(index) if index < len => index,
            _ => {
                return Err(Error::AnchorOutOfRange {
                    file: source.path().to_path_buf(),
                    line: site.line,
                    len,
                });
            }
        };

        let insertion = annotate_anchor(&mut source.lines_mut()[index], notice);

        tracing::debug!(
            "{}: line {} -> anchor {} ({:?})",
            site.declaration,
            site.line,
            index,
            insertion
        );

        applied.push(AppliedEdit {
            line: site.line,
            anchor_index: index,
            insertion,
            declaration: site.declaration.clone(),
        });
    }

    Ok(applied)
}
