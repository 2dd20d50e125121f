//! The colour value and its arithmetic

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An sRGB colour with straight alpha.
///
/// Every component lies in `0.0..=1.0`; constructors clamp their inputs and
/// map NaN to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub red: f64,
    /// Green component
    pub green: f64,
    /// Blue component
    pub blue: f64,
    /// Opacity, `1.0` being opaque
    pub alpha: f64,
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub(crate) fn to_byte(component: f64) -> u8 {
    (unit(component) * 255.0).round() as u8
}

impl Color {
    /// Fully transparent black.
    pub const CLEAR: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };
    /// Opaque black.
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);

    const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue, alpha: 1.0 }
    }

    /// Build a colour from unit components, clamping each one.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
            alpha: unit(alpha),
        }
    }

    /// Build a colour from 8-bit channels.
    ///
    /// Returns `None` when a channel is outside `0..=255`. `transparency`
    /// is clamped to `0.0..=1.0`.
    pub fn from_rgb(red: i32, green: i32, blue: i32, transparency: f64) -> Option<Self> {
        let channel = |value: i32| u8::try_from(value).ok().map(|v| f64::from(v) / 255.0);
        Some(Self::new(channel(red)?, channel(green)?, channel(blue)?, transparency))
    }

    /// Build a colour from the low 24 bits of `hex` (`0xRRGGBB`).
    pub fn from_hex(hex: u32, transparency: f64) -> Self {
        Self::from_hex6(hex & 0x00FF_FFFF, transparency)
    }

    /// `#RGB` packed as `0xRGB`; each nibble is scaled by 1/15.
    pub fn from_hex3(hex3: u16, alpha: f64) -> Self {
        let nibble = |shift: u16| f64::from((hex3 >> shift) & 0xF) / 15.0;
        Self::new(nibble(8), nibble(4), nibble(0), alpha)
    }

    /// `#RGBA` packed as `0xRGBA`.
    pub fn from_hex4(hex4: u16) -> Self {
        let nibble = |shift: u16| f64::from((hex4 >> shift) & 0xF) / 15.0;
        Self::new(nibble(12), nibble(8), nibble(4), nibble(0))
    }

    /// `#RRGGBB` packed as `0xRRGGBB`.
    pub fn from_hex6(hex6: u32, alpha: f64) -> Self {
        let byte = |shift: u32| f64::from((hex6 >> shift) & 0xFF) / 255.0;
        Self::new(byte(16), byte(8), byte(0), alpha)
    }

    /// `#RRGGBBAA` packed as `0xRRGGBBAA`.
    pub fn from_hex8(hex8: u32) -> Self {
        let byte = |shift: u32| f64::from((hex8 >> shift) & 0xFF) / 255.0;
        Self::new(byte(24), byte(16), byte(8), byte(0))
    }

    /// A random opaque colour.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let mut channel = || f64::from(rng.gen_range(0u8..=255)) / 255.0;
        Self::new(channel(), channel(), channel(), 1.0)
    }

    /// The complementary colour of `color`; see [`Color::complementary`].
    pub fn complementary_for(color: &Color) -> Self {
        color.complementary()
    }

    /// Opaque colour whose components are `sqrt(1 - c²)` of this one.
    pub fn complementary(&self) -> Self {
        let flip = |c: f64| (1.0 - c * c).max(0.0).sqrt();
        Self::new(flip(self.red), flip(self.green), flip(self.blue), 1.0)
    }

    /// Channels as bytes, rounded to the nearest value.
    pub fn rgb_components(&self) -> (u8, u8, u8) {
        (to_byte(self.red), to_byte(self.green), to_byte(self.blue))
    }

    /// Hue, saturation, brightness and alpha, all in `0.0..=1.0`.
    ///
    /// Hue is `0.0` for greys.
    pub fn hsba(&self) -> (f64, f64, f64, f64) {
        let (r, g, b) = (self.red, self.green, self.blue);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        (hue, saturation, max, self.alpha)
    }

    /// `#RRGGBB` in upper case.
    pub fn hex_string(&self) -> String {
        self.hex_string_with_alpha(false)
    }

    /// `#RRGGBBAA` when `include_alpha` is set, otherwise `#RRGGBB`.
    pub fn hex_string_with_alpha(&self, include_alpha: bool) -> String {
        let (r, g, b) = self.rgb_components();
        if include_alpha {
            format!("#{r:02X}{g:02X}{b:02X}{:02X}", to_byte(self.alpha))
        } else {
            format!("#{r:02X}{g:02X}{b:02X}")
        }
    }

    /// `#RGB` when every channel repeats its digit (`#FF8800` gives `#F80`).
    pub fn short_hex_string(&self) -> Option<String> {
        let (r, g, b) = self.rgb_components();
        let repeats = |byte: u8| (byte >> 4) == (byte & 0xF);
        if repeats(r) && repeats(g) && repeats(b) {
            Some(format!("#{:X}{:X}{:X}", r & 0xF, g & 0xF, b & 0xF))
        } else {
            None
        }
    }

    /// [`short_hex_string`](Self::short_hex_string), falling back to
    /// [`hex_string`](Self::hex_string).
    pub fn short_hex_or_hex_string(&self) -> String {
        self.short_hex_string().unwrap_or_else(|| self.hex_string())
    }

    /// `0xRRGGBB`; alpha is not included.
    pub fn to_u32(&self) -> u32 {
        let (r, g, b) = self.rgb_components();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Weighted mix of two colours, alpha included.
    ///
    /// Intensities are normalised by their sum. When one normalised level is
    /// not positive the other colour is returned unchanged.
    pub fn blend(color1: &Color, intensity1: f64, color2: &Color, intensity2: f64) -> Self {
        let total = intensity1 + intensity2;
        let level1 = intensity1 / total;
        let level2 = intensity2 / total;

        if level1.is_nan() || level1 <= 0.0 {
            return *color2;
        }
        if level2.is_nan() || level2 <= 0.0 {
            return *color1;
        }

        let mix = |a: f64, b: f64| level1 * a + level2 * b;
        Self::new(
            mix(color1.red, color2.red),
            mix(color1.green, color2.green),
            mix(color1.blue, color2.blue),
            mix(color1.alpha, color2.alpha),
        )
    }

    /// Add `percentage` to every channel, capped at `1.0`.
    pub fn lighten(&self, percentage: f64) -> Self {
        Self::new(
            self.red + percentage,
            self.green + percentage,
            self.blue + percentage,
            self.alpha,
        )
    }

    /// Subtract `percentage` from every channel, floored at `0.0`.
    pub fn darken(&self, percentage: f64) -> Self {
        self.lighten(-percentage)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::CLEAR
    }
}
