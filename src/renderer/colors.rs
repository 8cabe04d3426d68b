//! Colors for game elements (linear RGBA, 0-1)

pub type Rgba = [f32; 4];

pub const PLAYER: Rgba = [72.0 / 255.0, 1.0, 206.0 / 255.0, 1.0];
pub const PLAYER_GUIDE: Rgba = [72.0 / 255.0, 1.0, 206.0 / 255.0, 0.1];
pub const BULLET: Rgba = [0.0, 1.0, 1.0, 1.0];
pub const ENEMY: Rgba = [0.75, 0.25, 0.25, 1.0];
pub const SIGNAL_LIT: Rgba = [1.0, 1.0, 1.0, 0.2];
pub const SIGNAL_DIM: Rgba = [1.0, 1.0, 1.0, 0.05];
pub const TEXT: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Base of the generated background before noise and scanlines
pub const BACKGROUND: Rgba = [0.2, 0.4, 0.8, 1.0];

/// Convert HSL (hue in degrees, saturation and lightness 0-1) to RGBA
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Rgba {
    let hue = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let (r, g, b) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    [r + m, g + m, b + m, alpha]
}

/// Boss tint shifts with its horizontal position
pub fn boss(x: f32) -> Rgba {
    hsla(x % 360.0, 0.8, 0.35, 1.0)
}

/// Explosion ember at the given fade
pub fn ember(alpha: f32) -> Rgba {
    hsla(0.0, 0.8, 0.8, alpha.clamp(0.0, 1.0))
}
