//! Combined shader source handling for triview.
//!
//! A combined source file carries both pipeline stages in one text file,
//! separated by directive lines:
//!
//! ```text
//! #shader vertex
//! ...vertex GLSL...
//! #shader fragment
//! ...fragment GLSL...
//! ```
//!
//! This crate splits such a file into per-stage strings and reports which
//! stages are present, so the renderer can refuse to compile an incomplete
//! pair with an error that points at the source file rather than at GLSL
//! diagnostics.

mod split;

pub use split::{split_source, SourceError, StageSources};

use std::fmt;

/// The two pipeline stages a combined source file can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Keyword that selects this stage on a `#shader` directive line.
    pub fn keyword(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_labels_match_directive_keywords() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
