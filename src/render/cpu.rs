use crate::foundation::core::{Rect, Rgba8};
use crate::render::context::{BlendMode, RenderContext};

#[derive(Clone, Copy, Debug)]
struct PaintState {
    alpha: f64,
    blend: BlendMode,
    fill: Rgba8,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            blend: BlendMode::Normal,
            fill: Rgba8::rgb(0, 0, 0),
        }
    }
}

/// CPU raster implementation of [`RenderContext`] over a premultiplied RGBA8
/// buffer.
///
/// Each surface owns an independent `CpuContext`; nothing here is shared.
#[derive(Debug)]
pub struct CpuContext {
    width: u32,
    height: u32,
    scale: f64,
    pixels: Vec<u8>,
    state: PaintState,
    stack: Vec<PaintState>,
}

impl Default for CpuContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuContext {
    /// Create an empty (0x0) context; [`resize`](RenderContext::resize) gives
    /// it a backing buffer.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            scale: 1.0,
            pixels: Vec::new(),
            state: PaintState::default(),
            stack: Vec::new(),
        }
    }

    /// Backing buffer width in device pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Backing buffer height in device pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device-pixel scale applied to drawing coordinates.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Raw premultiplied RGBA8 pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One premultiplied pixel; out-of-bounds reads return transparent.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Readback into a straight-alpha [`image::RgbaImage`] frame grab.
    pub fn to_image(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (i, px) in self.pixels.chunks_exact(4).enumerate() {
            let x = (i as u32) % self.width;
            let y = (i as u32) / self.width;
            img.put_pixel(x, y, image::Rgba(unpremul([px[0], px[1], px[2], px[3]])));
        }
        img
    }
}

impl RenderContext for CpuContext {
    fn resize(&mut self, width: u32, height: u32, scale: f64) {
        self.width = width;
        self.height = height;
        self.scale = if scale > 0.0 { scale } else { 1.0 };
        self.pixels = vec![0; (width as usize) * (height as usize) * 4];
        self.state = PaintState::default();
        self.stack.clear();
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
        }
    }

    fn global_alpha(&self) -> f64 {
        self.state.alpha
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.state.fill = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let x0 = ((rect.x0 * self.scale).round() as i64).clamp(0, i64::from(self.width));
        let y0 = ((rect.y0 * self.scale).round() as i64).clamp(0, i64::from(self.height));
        let x1 = ((rect.x1 * self.scale).round() as i64).clamp(0, i64::from(self.width));
        let y1 = ((rect.y1 * self.scale).round() as i64).clamp(0, i64::from(self.height));
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let src = self.state.fill.to_premul(self.state.alpha);
        if src[3] == 0 && src[0] == 0 && src[1] == 0 && src[2] == 0 {
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
                let dst = [
                    self.pixels[i],
                    self.pixels[i + 1],
                    self.pixels[i + 2],
                    self.pixels[i + 3],
                ];
                let out = match self.state.blend {
                    BlendMode::Normal => over(dst, src),
                    BlendMode::Additive => add_sat(dst, src),
                };
                self.pixels[i..i + 4].copy_from_slice(&out);
            }
        }
    }
}

/// Premultiplied source-over: `out = src + dst * (1 - src.a)`.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Saturating per-channel add (additive compositing).
fn add_sat(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = dst[i].saturating_add(src[i]);
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn unpremul(px: [u8; 4]) -> [u8; 4] {
    let a = px[3];
    if a == 0 {
        return [0; 4];
    }
    let mut out = [0u8; 4];
    for i in 0..3 {
        out[i] = (((u32::from(px[i]) * 255) + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
    }
    out[3] = a;
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
