use crate::core::Color;

pub const CYAN: Color = Color::from_hex(0x06b6d4);
pub const INDIGO: Color = Color::from_hex(0x6366f1);
pub const VIOLET: Color = Color::from_hex(0x8b5cf6);
pub const ERROR_RED: Color = Color::from_hex(0xef4444);

/// Stops of the page background gradient, top to bottom
pub const BACKGROUND: [Color; 3] = [
    Color::from_hex(0x0f1419),
    Color::from_hex(0x1a1f35),
    Color::from_hex(0x2d1b69),
];

/// Tints the hero shapes are drawn from
pub const SHAPE_TINTS: [Color; 3] = [CYAN, INDIGO, VIOLET];

/// The two accents nodes and particles pick between
pub const ACCENTS: [Color; 2] = [CYAN, INDIGO];
