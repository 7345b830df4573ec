//! Per-stage GLSL compilation with aggregated diagnostics.
//!
//! Each stage is compiled through wgpu's naga GLSL front-end inside a
//! validation error scope, so a malformed shader surfaces its diagnostic
//! log instead of poisoning the device. A stage that fails to compile never
//! reaches pipeline creation: failures from both stages are collected and
//! returned as a single [`BuildError`].

use std::borrow::Cow;

use thiserror::Error;
use wgpu::naga::ShaderStage as NagaStage;

use shadersrc::{ShaderStage, StageSources};

/// Diagnostic log for one stage that failed to compile.
#[derive(Debug)]
pub struct StageFailure {
    pub stage: ShaderStage,
    pub log: String,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("combined source declares no {} stage", stage_list(.0))]
    MissingStages(Vec<ShaderStage>),

    #[error("shader compilation failed in the {} stage", failed_stage_list(.0))]
    Compile(Vec<StageFailure>),

    #[error("pipeline validation failed: {0}")]
    Link(String),
}

fn stage_list(stages: &[ShaderStage]) -> String {
    stages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

fn failed_stage_list(failures: &[StageFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.stage.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Compiled modules for a complete vertex/fragment pair.
pub(crate) struct ProgramModules {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

/// Rejects sources whose stage sections are absent, so the error names the
/// source file instead of surfacing as a GLSL diagnostic about empty input.
pub(crate) fn ensure_stages_present(sources: &StageSources) -> Result<(), BuildError> {
    let missing = sources.missing_stages();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(BuildError::MissingStages(missing))
    }
}

/// Compiles both stages, refusing to hand back modules unless every stage
/// succeeded.
pub(crate) fn compile_program(
    device: &wgpu::Device,
    sources: &StageSources,
) -> Result<ProgramModules, BuildError> {
    ensure_stages_present(sources)?;

    let mut failures = Vec::new();
    let mut compile = |stage: ShaderStage| match compile_stage(device, stage, sources.stage(stage))
    {
        Ok(module) => Some(module),
        Err(failure) => {
            failures.push(failure);
            None
        }
    };

    let vertex = compile(ShaderStage::Vertex);
    let fragment = compile(ShaderStage::Fragment);

    match (vertex, fragment) {
        (Some(vertex), Some(fragment)) => Ok(ProgramModules { vertex, fragment }),
        _ => Err(BuildError::Compile(failures)),
    }
}

/// Compiles a single stage, capturing the naga diagnostic on failure.
fn compile_stage(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule, StageFailure> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.keyword()),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Borrowed(source),
            stage: naga_stage(stage),
            defines: &[],
        },
    });

    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        let log = error.to_string();
        tracing::error!(stage = %stage, "shader compilation failed:\n{log}");
        return Err(StageFailure { stage, log });
    }

    Ok(module)
}

fn naga_stage(stage: ShaderStage) -> NagaStage {
    match stage {
        ShaderStage::Vertex => NagaStage::Vertex,
        ShaderStage::Fragment => NagaStage::Fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadersrc::split_source;

    #[test]
    fn missing_stage_check_names_the_absent_stage() {
        let sources = split_source("#shader vertex\nvoid main() {}\n");
        let err = ensure_stages_present(&sources).unwrap_err();
        assert_eq!(err.to_string(), "combined source declares no fragment stage");
    }

    #[test]
    fn missing_stage_check_accepts_complete_sources() {
        let sources = split_source("#shader vertex\nV\n#shader fragment\nF\n");
        assert!(ensure_stages_present(&sources).is_ok());
    }

    #[test]
    fn compile_error_lists_every_failed_stage() {
        let err = BuildError::Compile(vec![
            StageFailure {
                stage: ShaderStage::Vertex,
                log: "expected ';'".into(),
            },
            StageFailure {
                stage: ShaderStage::Fragment,
                log: "unknown identifier".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "shader compilation failed in the vertex and fragment stage"
        );
    }
}
