//! Packed-float color codec.
//!
//! A [`PackedColor`] is a single `f32` whose bit pattern stores four IPT_HQ
//! channels:
//!
//! - bits 0..8   intensity byte, mapping 0..=255 onto [0, 1]
//! - bits 8..16  protan byte, mapping 0..=255 onto [-1, 1]
//! - bits 16..24 tritan byte, mapping 0..=255 onto [-1, 1]
//! - bits 24..32 alpha, with the lowest alpha bit always cleared
//!
//! Clearing the low alpha bit keeps the exponent field from ever being all
//! ones, so a packed color can never be NaN or an infinity and always
//! compares bit-exactly. Packed values are immutable; every operation that
//! "changes" a color returns a new one.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::PaletteError;
use crate::space;

/// Mask that drops the lowest alpha bit when packing.
const ALPHA_MASK: u32 = 0xFE00_0000;

/// Byte quantization factor; truncation of `x * 255.999` maps 1.0 to 255.
const BYTE_SCALE: f32 = 255.999;

/// A color packed into the bit pattern of one `f32`.
#[derive(Clone, Copy, Debug)]
pub struct PackedColor(f32);

impl PackedColor {
    /// Reinterpret raw bits as a packed color.
    pub const fn from_bits(bits: u32) -> Self {
        PackedColor(f32::from_bits(bits))
    }

    /// The raw bit pattern of this packed color.
    pub const fn to_bits(self) -> u32 {
        self.0.to_bits()
    }

    /// The packed value as the carrier float itself.
    pub const fn as_f32(self) -> f32 {
        self.0
    }

    /// Pack IPT_HQ channels and alpha, saturating each byte.
    pub fn from_ipt(i: f32, p: f32, t: f32, alpha: f32) -> Self {
        let bi = quantize_unit(i);
        let bp = quantize_axis(p);
        let bt = quantize_axis(t);
        let ba = ((alpha * 255.0) as i32).clamp(0, 255) as u32;
        PackedColor::from_bits(bi | bp << 8 | bt << 16 | (ba << 24 & ALPHA_MASK))
    }

    /// Pack an sRGB color with channels in [0, 1].
    pub fn from_rgba(rgba: [f32; 4]) -> Self {
        let [i, p, t] = space::srgb_to_ipt([rgba[0], rgba[1], rgba[2]]);
        PackedColor::from_ipt(i, p, t, rgba[3])
    }

    /// Pack an RGBA8888 word (red in the top byte).
    pub fn from_rgba8888(rgba: u32) -> Self {
        PackedColor::from_rgba([
            (rgba >> 24 & 0xFF) as f32 / 255.0,
            (rgba >> 16 & 0xFF) as f32 / 255.0,
            (rgba >> 8 & 0xFF) as f32 / 255.0,
            (rgba & 0xFF) as f32 / 255.0,
        ])
    }

    /// Parse `"#RRGGBB"`, `"RRGGBB"`, `"#RRGGBBAA"`, or `"RRGGBBAA"`.
    pub fn from_hex(input: &str) -> Result<Self, PaletteError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        // from_str_radix tolerates a leading sign, which is not a hex digit.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidHex {
                input: input.to_string(),
                reason: "invalid digit found in string".to_string(),
            });
        }
        let word = u32::from_str_radix(digits, 16).map_err(|err| PaletteError::InvalidHex {
            input: input.to_string(),
            reason: err.to_string(),
        })?;
        match digits.len() {
            6 => Ok(PackedColor::from_rgba8888(word << 8 | 0xFF)),
            8 => Ok(PackedColor::from_rgba8888(word)),
            n => Err(PaletteError::InvalidHex {
                input: input.to_string(),
                reason: format!("expected 6 or 8 hex digits, found {}", n),
            }),
        }
    }

    /// Intensity (perceptual lightness) channel in [0, 1].
    pub fn intensity(self) -> f32 {
        (self.to_bits() & 0xFF) as f32 / 255.0
    }

    /// Protan (red–green axis) channel in [-1, 1].
    pub fn protan(self) -> f32 {
        (self.to_bits() >> 8 & 0xFF) as f32 / 255.0 * 2.0 - 1.0
    }

    /// Tritan (blue–yellow axis) channel in [-1, 1].
    pub fn tritan(self) -> f32 {
        (self.to_bits() >> 16 & 0xFF) as f32 / 255.0 * 2.0 - 1.0
    }

    /// Alpha in [0, 1], carried with 7-bit precision.
    pub fn alpha(self) -> f32 {
        (self.to_bits() >> 25) as f32 / 127.0
    }

    /// Whether the alpha byte is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.to_bits() & ALPHA_MASK == 0
    }

    /// Decode to sRGB channels in [0, 1], clamped to the gamut.
    pub fn to_rgba(self) -> [f32; 4] {
        let [r, g, b] = space::ipt_to_srgb([self.intensity(), self.protan(), self.tritan()]);
        [r, g, b, self.alpha()]
    }

    /// Decode to an RGBA8888 word (red in the top byte).
    pub fn to_rgba8888(self) -> u32 {
        let [r, g, b, a] = self.to_rgba();
        let r = (r * 255.0 + 0.5) as u32;
        let g = (g * 255.0 + 0.5) as u32;
        let b = (b * 255.0 + 0.5) as u32;
        let a = (a * 255.0 + 0.5) as u32;
        r << 24 | g << 16 | b << 8 | a
    }

    /// Hue of the decoded color as turns in [0, 1); red at 0, green near
    /// 1/3, blue near 2/3. Achromatic colors report 0.
    pub fn hue(self) -> f32 {
        let [r, g, b, _] = self.to_rgba();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta <= f32::EPSILON {
            return 0.0;
        }
        let sector = if (max - r).abs() < f32::EPSILON {
            ((g - b) / delta).rem_euclid(6.0)
        } else if (max - g).abs() < f32::EPSILON {
            ((b - r) / delta) + 2.0
        } else {
            ((r - g) / delta) + 4.0
        };
        (sector / 6.0).rem_euclid(1.0)
    }

    /// Saturation of the decoded color in [0, 1].
    pub fn saturation(self) -> f32 {
        let [r, g, b, _] = self.to_rgba();
        let max = r.max(g).max(b);
        if max <= f32::EPSILON {
            return 0.0;
        }
        (max - r.min(g).min(b)) / max
    }

    /// Perceptual lightness; for IPT_HQ this is the intensity channel.
    pub fn lightness(self) -> f32 {
        self.intensity()
    }

    /// Whether the stored IPT triple maps inside the sRGB cube.
    pub fn in_gamut(self) -> bool {
        let linear = space::ipt_to_linear([self.intensity(), self.protan(), self.tritan()]);
        // Byte quantization alone can push linear channels ~1.5% past the
        // cube near the bright corners; only larger excursions count as out
        // of gamut.
        const SLACK: f32 = 2.0e-2;
        linear
            .iter()
            .all(|&c| (-SLACK..=1.0 + SLACK).contains(&c))
    }

    /// Pull an out-of-gamut color toward the gray axis until it fits,
    /// keeping intensity and alpha. In-gamut colors are returned unchanged.
    pub fn limit_to_gamut(self) -> Self {
        if self.in_gamut() {
            return self;
        }
        let i = self.intensity();
        let p = self.protan();
        let t = self.tritan();
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        // Binary search on the chroma scale; 16 steps exceed byte precision.
        for _ in 0..16 {
            let mid = (lo + hi) * 0.5;
            let candidate = PackedColor::from_ipt(i, p * mid, t * mid, self.alpha());
            if candidate.in_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        PackedColor::from_ipt(i, p * lo, t * lo, self.alpha())
    }
}

impl PartialEq for PackedColor {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for PackedColor {}

impl Hash for PackedColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_rgba8888())
    }
}

fn quantize_unit(x: f32) -> u32 {
    ((x * BYTE_SCALE) as i32).clamp(0, 255) as u32
}

fn quantize_axis(x: f32) -> u32 {
    (((x * 0.5 + 0.5) * BYTE_SCALE) as i32).clamp(0, 255) as u32
}
