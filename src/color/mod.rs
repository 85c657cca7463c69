mod palette;

pub use palette::Palette;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Channel-wise saturating sum of two colors
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Multiply every channel by `k`, saturating at 255
pub const fn scale_color(color: Rgb, k: u8) -> Rgb {
    Rgb {
        r: color.r.saturating_mul(k),
        g: color.g.saturating_mul(k),
        b: color.b.saturating_mul(k),
    }
}

/// Build a color from channels given in wire order (green, red, blue)
pub const fn from_grb(green: u8, red: u8, blue: u8) -> Rgb {
    Rgb {
        r: red,
        g: green,
        b: blue,
    }
}

/// Channels in the order the board expects them on the wire
pub const fn to_grb(color: Rgb) -> [u8; 3] {
    [color.g, color.r, color.b]
}
