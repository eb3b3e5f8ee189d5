// File: crates/graph-render-skia/src/lib.rs
// Summary: Draws an animation frame (committed polyline + frontier marker) with Skia and encodes PNG.

use anyhow::Result;
use graph_core::{Frame, GraphConfig, Rgba, Viewport};
use skia_safe as skia;
use tracing::debug;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Rgba,
}

impl RenderOptions {
    /// Surface matching the graph's viewport, rounded up to whole pixels.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            width: (viewport.width.ceil() as i32).max(1),
            height: (viewport.height.ceil() as i32).max(1),
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 1024, height: 640, background: Rgba::WHITE }
    }
}

#[inline]
pub fn to_skia_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Paints frames using the style half of a [`GraphConfig`].
pub struct FrameRenderer {
    line: skia::Paint,
    marker: skia::Paint,
    marker_radius: f32,
}

impl FrameRenderer {
    pub fn new(config: &GraphConfig) -> Self {
        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(config.line_thickness_px);
        line.set_color(to_skia_color(config.line_color));

        let mut marker = skia::Paint::default();
        marker.set_anti_alias(true);
        marker.set_style(skia::paint::Style::StrokeAndFill);
        marker.set_color(to_skia_color(config.marker_color));

        Self { line, marker, marker_radius: config.marker_radius_px }
    }

    /// Draw `frame` onto an existing canvas. The canvas is not cleared.
    pub fn draw(&self, canvas: &skia::Canvas, frame: &Frame<'_>) {
        if let Some((first, rest)) = frame.polyline.split_first() {
            let mut path = skia::Path::new();
            path.move_to((first.x, first.y));
            for p in rest {
                path.line_to((p.x, p.y));
            }
            canvas.draw_path(&path, &self.line);
        }

        if let Some(m) = frame.marker {
            canvas.draw_circle((m.x, m.y), self.marker_radius, &self.marker);
        }
    }

    /// Render `frame` on a fresh CPU raster surface and return PNG bytes.
    pub fn render_to_png_bytes(&self, frame: &Frame<'_>, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(opts.background));
        self.draw(canvas, frame);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(
            points = frame.polyline.len(),
            marker = frame.marker.is_some(),
            bytes = data.as_bytes().len(),
            "rendered frame"
        );
        Ok(data.as_bytes().to_vec())
    }

    /// Render `frame` to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        frame: &Frame<'_>,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(frame, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}
