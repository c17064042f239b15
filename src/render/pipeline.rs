use crate::ast::node::NodeId;
use crate::ast::store::NodeStore;
use crate::eval::evaluator::evaluate_as_color;
use crate::foundation::core::Canvas;
use crate::foundation::error::RandomartResult;

/// Rendered image: straight-alpha RGBA8, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Counters collected while rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Pixels evaluated.
    pub pixels: u64,
    /// Most value nodes a single pixel's evaluation allocated.
    pub peak_nodes_per_pixel: usize,
}

/// Evaluate `root` once per pixel of `canvas` and pack the colors.
///
/// All-or-nothing: the first evaluation failure aborts the render and no buffer is returned.
pub fn render_frame(
    store: &mut NodeStore,
    root: NodeId,
    canvas: Canvas,
) -> RandomartResult<FrameRGBA> {
    render_frame_with_stats(store, root, canvas).map(|(frame, _)| frame)
}

/// [`render_frame`] plus [`RenderStats`].
///
/// Per-pixel value nodes are rewound after each pixel, so the store ends where it started.
#[tracing::instrument(skip(store), fields(width = canvas.width, height = canvas.height))]
pub fn render_frame_with_stats(
    store: &mut NodeStore,
    root: NodeId,
    canvas: Canvas,
) -> RandomartResult<(FrameRGBA, RenderStats)> {
    let mut data = Vec::with_capacity(canvas.pixel_count() * 4);
    let mut stats = RenderStats::default();
    let mark = store.mark();
    let base = store.len();

    for py in 0..canvas.height {
        let ny = canvas.normalized_y(py);
        for px in 0..canvas.width {
            let nx = canvas.normalized_x(px);
            let color = evaluate_as_color(store, root, nx, ny);
            stats.peak_nodes_per_pixel = stats.peak_nodes_per_pixel.max(store.len() - base);
            store.rewind(mark);

            let color = color.inspect_err(|e| {
                tracing::debug!(px, py, error = %e, "pixel evaluation failed");
            })?;
            data.extend_from_slice(&color.to_rgba8());
            stats.pixels += 1;
        }
    }

    tracing::debug!(
        pixels = stats.pixels,
        peak_nodes_per_pixel = stats.peak_nodes_per_pixel,
        "render finished"
    );

    Ok((
        FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
        },
        stats,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
