//! RGB color type, the swatch palette, and hue conversion.

/// Represents an opaque RGB color with 8-bit components.
///
/// # Examples
///
/// ```
/// use rainbowboard::draw::Color;
/// let orange = Color::new(255, 165, 0);
/// assert_eq!(orange.hex_name(), "#ffa500");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts a hue in degrees to a fully saturated, full-value color.
    ///
    /// Hues outside 0-359 wrap around, so 360 is red again.
    pub fn from_hue(hue: u32) -> Self {
        let h = (hue % 360) as f64 / 60.0;
        let sector = h.floor() as u32;
        let f = h - h.floor();
        let rise = (255.0 * f).round() as u8;
        let fall = (255.0 * (1.0 - f)).round() as u8;

        match sector {
            0 => Self::new(255, rise, 0),
            1 => Self::new(fall, 255, 0),
            2 => Self::new(0, 255, rise),
            3 => Self::new(0, fall, 255),
            4 => Self::new(rise, 0, 255),
            _ => Self::new(255, 0, fall),
        }
    }

    /// Returns the color as a lowercase `#rrggbb` string.
    pub fn hex_name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the components scaled to Cairo's 0.0-1.0 range.
    pub fn to_cairo(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

// ============================================================================
// Palette
// ============================================================================

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const MAGENTA: Color = Color::new(255, 0, 255);
pub const GRAY: Color = Color::new(160, 160, 164);
pub const DARK_RED: Color = Color::new(128, 0, 0);
pub const DARK_GREEN: Color = Color::new(0, 128, 0);
pub const DARK_BLUE: Color = Color::new(0, 0, 128);
pub const LIGHT_GRAY: Color = Color::new(192, 192, 192);
pub const ORANGE: Color = Color::new(255, 165, 0);

/// Quick-pick swatches in toolbar order.
pub const PALETTE: [Color; 14] = [
    BLACK, WHITE, RED, GREEN, BLUE, YELLOW, CYAN, MAGENTA, GRAY, DARK_RED, DARK_GREEN, DARK_BLUE,
    LIGHT_GRAY, ORANGE,
];
