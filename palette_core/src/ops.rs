//! Perceptual operations over packed colors.
//!
//! This module provides the core color-space operations on [`PackedColor`]:
//! - [`mix`] - interpolation in IPT channels
//! - [`lighten`] / [`darken`] - intensity adjustment
//! - [`saturate`] / [`dull`] - chroma adjustment
//! - [`complement`] - reflection through the gray axis
//!
//! Packed colors are immutable values, so every operation returns a new
//! packed color. Chroma adjustments clamp protan and tritan back into
//! [-1, 1] before repacking.

use crate::packed::PackedColor;

/// Interpolate between two packed colors in IPT channels.
///
/// `amount` is the fraction of `b`; 0.0 returns `a`, 1.0 returns `b`.
/// Alpha interpolates along with the color channels.
pub fn mix(a: PackedColor, b: PackedColor, amount: f32) -> PackedColor {
    let amount = amount.clamp(0.0, 1.0);
    let lerp = |x: f32, y: f32| x + (y - x) * amount;
    PackedColor::from_ipt(
        lerp(a.intensity(), b.intensity()),
        lerp(a.protan(), b.protan()),
        lerp(a.tritan(), b.tritan()),
        lerp(a.alpha(), b.alpha()),
    )
}

/// Move intensity toward white by `amount` of the remaining headroom.
pub fn lighten(c: PackedColor, amount: f32) -> PackedColor {
    let amount = amount.clamp(0.0, 1.0);
    let i = c.intensity();
    PackedColor::from_ipt(i + (1.0 - i) * amount, c.protan(), c.tritan(), c.alpha())
}

/// Move intensity toward black by `amount` of its current value.
pub fn darken(c: PackedColor, amount: f32) -> PackedColor {
    let amount = amount.clamp(0.0, 1.0);
    PackedColor::from_ipt(
        c.intensity() * (1.0 - amount),
        c.protan(),
        c.tritan(),
        c.alpha(),
    )
}

/// Scale protan and tritan away from the gray axis by `1 + amount`.
///
/// The result may leave the sRGB gamut; callers that need a displayable
/// color should follow with [`PackedColor::limit_to_gamut`].
pub fn saturate(c: PackedColor, amount: f32) -> PackedColor {
    scale_chroma(c, 1.0 + amount.max(0.0))
}

/// Scale protan and tritan toward the gray axis by `1 - amount`.
pub fn dull(c: PackedColor, amount: f32) -> PackedColor {
    scale_chroma(c, 1.0 - amount.clamp(0.0, 1.0))
}

/// The perceptual complement: same intensity and alpha, chroma negated.
pub fn complement(c: PackedColor) -> PackedColor {
    PackedColor::from_ipt(c.intensity(), -c.protan(), -c.tritan(), c.alpha())
}

fn scale_chroma(c: PackedColor, factor: f32) -> PackedColor {
    PackedColor::from_ipt(
        c.intensity(),
        (c.protan() * factor).clamp(-1.0, 1.0),
        (c.tritan() * factor).clamp(-1.0, 1.0),
        c.alpha(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(r: f32, g: f32, b: f32) -> PackedColor {
        PackedColor::from_rgba([r, g, b, 1.0])
    }

    #[test]
    fn mix_endpoints_return_the_inputs() {
        let a = opaque(0.8, 0.1, 0.1);
        let b = opaque(0.1, 0.1, 0.8);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        let mid = mix(a, b, 0.5);
        assert!(mid.intensity() >= a.intensity().min(b.intensity()) - 1.0 / 255.0);
        assert!(mid.intensity() <= a.intensity().max(b.intensity()) + 1.0 / 255.0);
    }

    #[test]
    fn lighten_and_darken_move_intensity_monotonically() {
        let c = opaque(0.4, 0.5, 0.3);
        assert!(lighten(c, 0.5).intensity() > c.intensity());
        assert!(darken(c, 0.5).intensity() < c.intensity());
        assert_eq!(lighten(c, 0.0), c);
        assert_eq!(darken(c, 0.0), c);
        assert_eq!(lighten(c, 1.0).intensity(), 1.0);
        assert_eq!(darken(c, 1.0).intensity(), 0.0);
    }

    #[test]
    fn chroma_adjustments_preserve_intensity_and_alpha() {
        let c = opaque(0.7, 0.3, 0.2);
        for adjusted in [saturate(c, 0.5), dull(c, 0.5), complement(c)] {
            assert_eq!(adjusted.intensity(), c.intensity());
            assert_eq!(adjusted.alpha(), c.alpha());
        }
        assert!(dull(c, 1.0).saturation() < 0.05);
    }

    #[test]
    fn complement_is_an_involution_up_to_quantization() {
        let c = opaque(0.2, 0.6, 0.9);
        let back = complement(complement(c));
        assert!((back.protan() - c.protan()).abs() <= 2.0 / 255.0 * 2.0);
        assert!((back.tritan() - c.tritan()).abs() <= 2.0 / 255.0 * 2.0);
    }

    #[test]
    fn dull_moves_toward_gray() {
        let c = opaque(0.9, 0.2, 0.2);
        let duller = dull(c, 0.6);
        assert!(duller.protan().abs() < c.protan().abs());
        assert!(duller.saturation() < c.saturation());
    }
}
