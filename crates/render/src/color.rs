/// Opaque RGB color; alpha travels separately on fill calls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Grid-line color for far-hemisphere cells (#778da9).
pub const GRID_FAR: Color = Color::new(0x77, 0x8d, 0xa9);

/// Grid-line color for near-hemisphere cells (#e0e1dd).
pub const GRID_NEAR: Color = Color::new(0xe0, 0xe1, 0xdd);

/// Translucent fill for front-facing cells and the pick highlight.
pub const CELL_FILL: Color = Color::new(255, 255, 0);

/// Fixed alpha for the picked-cell overlay.
pub const HIGHLIGHT_ALPHA: f64 = 0.3;
