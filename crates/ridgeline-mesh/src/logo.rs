//! The 2D block-letter logo sketch: fifteen colored quads forming a
//! bordered capital I, plus the sin/cos "jiggle" deformation driven by the
//! animation phase.

use glam::Vec2;

/// Border color (dark blue), straight from the course logo palette.
pub const BORDER_COLOR: [f32; 4] = [0.074, 0.160, 0.294, 1.0];
/// Fill color (orange).
pub const FILL_COLOR: [f32; 4] = [0.909, 0.290, 0.152, 1.0];
/// Amplitude of the jiggle offset applied to every vertex.
pub const JIGGLE_AMPLITUDE: f32 = 0.07;

/// Axis-aligned rectangle with a flat color, the building block of the logo.
#[derive(Clone, Copy, Debug)]
struct Rect {
    min: Vec2,
    max: Vec2,
    color: [f32; 4],
}

const fn border(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
    Rect {
        min: Vec2::new(x0, y0),
        max: Vec2::new(x1, y1),
        color: BORDER_COLOR,
    }
}

const fn fill(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
    Rect {
        min: Vec2::new(x0, y0),
        max: Vec2::new(x1, y1),
        color: FILL_COLOR,
    }
}

/// The logo's rectangles: top bar, stem, bottom bar, and the border pieces
/// around them.
const LOGO_RECTS: [Rect; 15] = [
    border(-0.65, 0.85, 0.65, 0.95),
    fill(-0.55, 0.55, 0.55, 0.85),
    border(-0.65, 0.45, -0.55, 0.85),
    border(0.55, 0.45, 0.65, 0.85),
    border(-0.55, 0.45, -0.33, 0.55),
    border(0.33, 0.45, 0.55, 0.55),
    border(0.33, -0.45, 0.43, 0.45),
    border(-0.43, -0.45, -0.33, 0.45),
    fill(-0.33, -0.55, 0.33, 0.55),
    border(0.33, -0.55, 0.55, -0.45),
    border(-0.55, -0.55, -0.33, -0.45),
    border(-0.65, -0.85, -0.55, -0.45),
    border(0.55, -0.85, 0.65, -0.45),
    border(-0.65, -0.95, 0.65, -0.85),
    fill(-0.55, -0.85, 0.55, -0.55),
];

/// The logo as flat triangle lists: two triangles per rectangle, with one
/// color entry per vertex.
pub struct LogoSketch {
    base: Vec<Vec2>,
    colors: Vec<[f32; 4]>,
}

impl LogoSketch {
    /// Build the logo's base (undeformed) geometry.
    pub fn new() -> Self {
        let mut base = Vec::with_capacity(LOGO_RECTS.len() * 6);
        let mut colors = Vec::with_capacity(LOGO_RECTS.len() * 6);
        for rect in LOGO_RECTS {
            let (lo, hi) = (rect.min, rect.max);
            base.extend_from_slice(&[
                Vec2::new(lo.x, hi.y),
                Vec2::new(hi.x, hi.y),
                Vec2::new(lo.x, lo.y),
                Vec2::new(hi.x, hi.y),
                Vec2::new(hi.x, lo.y),
                Vec2::new(lo.x, lo.y),
            ]);
            colors.extend(std::iter::repeat_n(rect.color, 6));
        }
        Self { base, colors }
    }

    /// Undeformed vertex positions, six per rectangle.
    pub fn base_positions(&self) -> &[Vec2] {
        &self.base
    }

    /// Per-vertex colors, index-aligned with the positions.
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Number of vertices in the triangle list.
    pub fn vertex_count(&self) -> usize {
        self.base.len()
    }

    /// Positions for one animation frame: the whole logo offset by
    /// `(sin(phase), cos(phase)) · JIGGLE_AMPLITUDE`.
    pub fn jiggled(&self, phase: f32) -> Vec<Vec2> {
        let offset = Vec2::new(phase.sin(), phase.cos()) * JIGGLE_AMPLITUDE;
        self.base.iter().map(|&v| v + offset).collect()
    }
}

impl Default for LogoSketch {
    fn default() -> Self {
        Self::new()
    }
}
