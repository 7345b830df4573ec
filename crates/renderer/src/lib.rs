//! Renderer crate for triview.
//!
//! The module glues the desktop window, `wgpu` rendering pipeline, and
//! combined-source shader compilation together. The overall flow is:
//!
//! ```text
//!   CLI / triview
//!         │ RendererConfig
//!         ▼
//!   Renderer::run ──▶ WindowState ──▶ winit event loop ──▶ render_frame()
//!                          │
//!                          └─▶ GpuState ──▶ split source ──▶ compile stages
//!                                                │
//!                                                └─▶ TrianglePipeline
//! ```
//!
//! `GpuState` owns all GPU resources (surface, device, pipeline, vertex
//! buffer), while `Renderer` is the thin entry point the binary drives. The
//! combined source file is split into its vertex and fragment stages at
//! startup and compiled as GLSL through the naga front-end; a failure in
//! either stage aborts the build with the stage-tagged diagnostics instead
//! of reaching pipeline creation.

mod compile;
mod gpu;
mod types;
mod window;

pub use compile::{BuildError, StageFailure};
pub use types::RendererConfig;

use anyhow::Result;

/// High-level entry point that owns the chosen configuration.
///
/// The heavy lifting lives inside the `gpu` module; `Renderer` simply opens
/// the window path and forwards the request.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Builds a renderer for the supplied configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it closes or setup fails.
    pub fn run(&mut self) -> Result<()> {
        window::run(&self.config)
    }
}
