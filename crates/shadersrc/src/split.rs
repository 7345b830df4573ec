//! Splits a combined source file into per-stage GLSL strings.
//!
//! The scanner is a three-state machine: lines before the first directive
//! are discarded, and each `#shader` directive selects which stage the
//! following lines accumulate into. Directive lines themselves are never
//! part of any stage.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ShaderStage;

/// Marker token that makes a line a stage directive.
const DIRECTIVE: &str = "#shader";

/// Extra capacity added on top of the half-length estimate when reserving
/// the per-stage strings.
const RESERVE_CUSHION: usize = 128;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read shader source at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Vertex and fragment sources recovered from one combined file.
///
/// Either string may be empty when the file never declared that stage; use
/// [`StageSources::missing_stages`] to find out before compiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageSources {
    pub vertex: String,
    pub fragment: String,
}

impl StageSources {
    /// Reads and splits the combined source file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(split_source(&text))
    }

    /// Stages the file never declared (their accumulated text is empty).
    pub fn missing_stages(&self) -> Vec<ShaderStage> {
        let mut missing = Vec::new();
        if self.vertex.is_empty() {
            missing.push(ShaderStage::Vertex);
        }
        if self.fragment.is_empty() {
            missing.push(ShaderStage::Fragment);
        }
        missing
    }

    /// Borrows the accumulated text for one stage.
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

/// Which stage, if any, the scanner is currently accumulating into.
#[derive(Clone, Copy)]
enum Section {
    Discarding,
    Stage(ShaderStage),
}

/// Splits combined source text into per-stage strings.
///
/// Directive matching is substring-based: any line containing `#shader`
/// switches sections, selecting the stage whose keyword (`vertex` or
/// `fragment`) also appears on the line. A directive naming neither stage
/// drops back to discarding until the next directive. Every accumulated
/// line is appended followed by `\n`.
pub fn split_source(text: &str) -> StageSources {
    let reserve = text.len() / 2 + RESERVE_CUSHION;
    let mut sources = StageSources {
        vertex: String::with_capacity(reserve),
        fragment: String::with_capacity(reserve),
    };

    let mut section = Section::Discarding;
    for line in text.lines() {
        if line.contains(DIRECTIVE) {
            section = if line.contains(ShaderStage::Vertex.keyword()) {
                Section::Stage(ShaderStage::Vertex)
            } else if line.contains(ShaderStage::Fragment.keyword()) {
                Section::Stage(ShaderStage::Fragment)
            } else {
                tracing::warn!(line, "directive names no known stage; discarding section");
                Section::Discarding
            };
            continue;
        }

        if let Section::Stage(stage) = section {
            let target = match stage {
                ShaderStage::Vertex => &mut sources.vertex,
                ShaderStage::Fragment => &mut sources.fragment,
            };
            target.push_str(line);
            target.push('\n');
        }
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn splits_vertex_then_fragment() {
        let sources = split_source(
            "#shader vertex\nvoid main() {}\n#shader fragment\nvoid main() { discard; }\n",
        );
        assert_eq!(sources.vertex, "void main() {}\n");
        assert_eq!(sources.fragment, "void main() { discard; }\n");
        assert!(sources.missing_stages().is_empty());
    }

    #[test]
    fn section_order_does_not_matter() {
        let sources = split_source("#shader fragment\nF\n#shader vertex\nV\n");
        assert_eq!(sources.vertex, "V\n");
        assert_eq!(sources.fragment, "F\n");
    }

    #[test]
    fn input_without_directives_yields_empty_stages() {
        let sources = split_source("void main() {}\n// no markers here\n");
        assert_eq!(sources.vertex, "");
        assert_eq!(sources.fragment, "");
        assert_eq!(
            sources.missing_stages(),
            vec![ShaderStage::Vertex, ShaderStage::Fragment]
        );
    }

    #[test]
    fn empty_section_stays_length_zero() {
        let sources = split_source("#shader vertex\n#shader fragment\nF\n");
        assert_eq!(sources.vertex.len(), 0);
        assert_eq!(sources.fragment, "F\n");
        assert_eq!(sources.missing_stages(), vec![ShaderStage::Vertex]);
    }

    #[test]
    fn lines_before_first_directive_are_dropped() {
        let sources = split_source("preamble\n#shader vertex\nV\n");
        assert_eq!(sources.vertex, "V\n");
        assert!(!sources.vertex.contains("preamble"));
    }

    #[test]
    fn splits_two_line_vertex_and_one_line_fragment() {
        let sources = split_source("#shader vertex\nA\nB\n#shader fragment\nC\n");
        assert_eq!(sources.vertex, "A\nB\n");
        assert_eq!(sources.fragment, "C\n");
    }

    #[test]
    fn directive_matches_anywhere_in_line() {
        // Matching is substring-based, so decorated directives still switch
        // sections.
        let sources = split_source("// #shader vertex section\nV\n");
        assert_eq!(sources.vertex, "V\n");
    }

    #[test]
    fn unknown_stage_directive_discards_following_lines() {
        let sources = split_source("#shader vertex\nV\n#shader geometry\nG\n#shader fragment\nF\n");
        assert_eq!(sources.vertex, "V\n");
        assert_eq!(sources.fragment, "F\n");
    }

    #[test]
    fn repeated_calls_are_independent() {
        let first = split_source("#shader vertex\nV\n");
        let second = split_source("#shader fragment\nF\n");
        assert_eq!(first.vertex, "V\n");
        assert_eq!(second.vertex, "");
        assert_eq!(second.fragment, "F\n");
    }

    #[test]
    fn stage_accessor_matches_fields() {
        let sources = split_source("#shader vertex\nV\n#shader fragment\nF\n");
        assert_eq!(sources.stage(ShaderStage::Vertex), sources.vertex);
        assert_eq!(sources.stage(ShaderStage::Fragment), sources.fragment);
    }

    #[test]
    fn from_path_reads_and_splits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.shader");
        fs::write(&path, "#shader vertex\nV\n#shader fragment\nF\n").unwrap();

        let sources = StageSources::from_path(&path).expect("load combined source");
        assert_eq!(sources.vertex, "V\n");
        assert_eq!(sources.fragment, "F\n");
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.shader");

        let err = StageSources::from_path(&path).unwrap_err();
        match err {
            SourceError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
        }
    }
}
