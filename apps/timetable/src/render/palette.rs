use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to the 0.0..=1.0 range PDF colour operators expect.
    pub fn unit(&self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Warm taupe: headings and category labels.
pub const PRIMARY: Rgb = Rgb(0x8B, 0x73, 0x55);
/// Soft sage: section rules.
pub const SECONDARY: Rgb = Rgb(0xA8, 0xC8, 0xB8);
/// Warm beige: day focus labels.
pub const ACCENT: Rgb = Rgb(0xD4, 0xA5, 0x74);
pub const DARK: Rgb = Rgb(0x2C, 0x2C, 0x2C);
pub const MEDIUM: Rgb = Rgb(0x66, 0x66, 0x66);
pub const LIGHT: Rgb = Rgb(0x88, 0x88, 0x88);
/// Warm off-white page and banner background.
pub const BACKGROUND: Rgb = Rgb(0xF8, 0xF6, 0xF2);
pub const BORDER: Rgb = Rgb(0xE8, 0xDE, 0xCD);
pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
