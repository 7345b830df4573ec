use std::path::PathBuf;

/// Immutable configuration passed to the renderer at start-up.
///
/// `RendererConfig` mirrors CLI flags and tells the renderer which combined
/// source file to compile, how large the window should be, and how to clear
/// the frame.
#[derive(Clone, Debug)]
pub struct RendererConfig {
    /// Window size in physical pixels.
    pub surface_size: (u32, u32),
    /// Path to the combined vertex/fragment source file.
    pub source_path: PathBuf,
    /// Window title.
    pub title: String,
    /// Clear color applied before the draw, RGB in `0.0..=1.0`.
    pub clear_color: [f64; 3],
}

impl RendererConfig {
    pub(crate) fn wgpu_clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.clear_color[0],
            g: self.clear_color[1],
            b: self.clear_color[2],
            a: 1.0,
        }
    }
}

impl Default for RendererConfig {
    /// Provides the stock 640x480 window with no source selected.
    fn default() -> Self {
        Self {
            surface_size: (640, 480),
            source_path: PathBuf::new(),
            title: "Hello World".to_string(),
            clear_color: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_matches_stock_dimensions() {
        let config = RendererConfig::default();
        assert_eq!(config.surface_size, (640, 480));
        assert_eq!(config.title, "Hello World");
    }

    #[test]
    fn clear_color_is_opaque() {
        let config = RendererConfig {
            clear_color: [0.25, 0.5, 0.75],
            ..RendererConfig::default()
        };
        let color = config.wgpu_clear_color();
        assert_eq!(color.r, 0.25);
        assert_eq!(color.g, 0.5);
        assert_eq!(color.b, 0.75);
        assert_eq!(color.a, 1.0);
    }
}
