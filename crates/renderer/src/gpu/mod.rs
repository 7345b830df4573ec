//! GPU orchestration for the triangle viewer.
//!
//! - `context` owns wgpu instance/surface/device wiring and knows how to
//!   reconfigure the swapchain when the window resizes.
//! - `pipeline` compiles the combined source pair into a render pipeline
//!   and uploads the static triangle vertex buffer.
//! - `state` glues both together and exposes the `GpuState` API used by
//!   `window`.

mod context;
mod pipeline;
mod state;

pub(crate) use state::GpuState;
