use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use shadersrc::StageSources;

use crate::types::RendererConfig;

use super::context::GpuContext;
use super::pipeline::TrianglePipeline;

/// Aggregates every GPU resource needed to present a frame.
pub(crate) struct GpuState {
    context: GpuContext,
    pipeline: TrianglePipeline,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Creates the device, loads and compiles the combined source, and
    /// builds the triangle pipeline targeting the surface.
    pub(crate) fn new<T>(
        target: &T,
        initial_size: PhysicalSize<u32>,
        config: &RendererConfig,
    ) -> Result<Self>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let context = GpuContext::new(target, initial_size)?;

        let sources = StageSources::from_path(&config.source_path).with_context(|| {
            format!(
                "failed to load combined shader source at {}",
                config.source_path.display()
            )
        })?;
        tracing::debug!(
            vertex_bytes = sources.vertex.len(),
            fragment_bytes = sources.fragment.len(),
            "split combined shader source"
        );

        let pipeline = TrianglePipeline::new(&context.device, context.surface_format, &sources)
            .with_context(|| {
                format!(
                    "failed to build GPU program from {}",
                    config.source_path.display()
                )
            })?;

        Ok(Self {
            context,
            pipeline,
            clear_color: config.wgpu_clear_color(),
        })
    }

    /// Current swapchain size in physical pixels.
    pub(crate) fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    pub(crate) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
    }

    /// Records and submits one frame: clear, draw the triangle, present.
    pub(crate) fn render_frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("triangle pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.pipeline.pipeline);
            render_pass.set_vertex_buffer(0, self.pipeline.vertex_buffer.slice(..));
            render_pass.draw(0..self.pipeline.vertex_count, 0..1);
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        tracing::trace!(
            width = self.context.size.width,
            height = self.context.size.height,
            "presented frame"
        );
        Ok(())
    }
}
