// Simple color struct: 8-bit RGB channels plus a floating point alpha in [0, 1],
// and the fixed palette the dust particles are colored from

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color { r, g, b, a }
    }

    // Same color channels, alpha replaced (and clamped into [0, 1])
    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            a: alpha.max(0.0).min(1.0),
            ..self
        }
    }

    // CSS representation handed to the canvas, e.g. "rgba(59, 130, 246, 0.6)"
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const PALETTE: [Color; 6] = [
    Color::rgba(59, 130, 246, 0.6),  // blue
    Color::rgba(147, 51, 234, 0.6),  // purple
    Color::rgba(236, 72, 153, 0.6),  // pink
    Color::rgba(34, 197, 94, 0.6),   // green
    Color::rgba(251, 191, 36, 0.6),  // yellow
    Color::rgba(239, 68, 68, 0.6),   // red
];
