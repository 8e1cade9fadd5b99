//! Deterministic color space conversions between sRGB and IPT_HQ.
//!
//! IPT_HQ is the higher-precision variant of the IPT perceptual space:
//! channels are shaped with a 2.0 gamma approximation on the RGB side and a
//! 0.43 power law on the LMS side before the Ebner & Fairchild IPT matrix is
//! applied. All transforms here are analytic with fixed parameters, so
//! results are identical across platforms.
//!
//! The module also provides fixed-parameter sRGB → CIELAB conversion (CIE
//! 1931 2° observer, D65 illuminant) and the ΔE94 difference metric used by
//! nearest-name search and by the palette integrity tests.

/// Exponent applied to LMS components on the forward path.
const SHAPE_EXPONENT: f32 = 0.43;

/// sRGB (after the 2.0 gamma expansion) to LMS cone responses.
const RGB_TO_LMS: [[f32; 3]; 3] = [
    [0.313_921, 0.639_468, 0.046_597],
    [0.151_693, 0.748_209, 0.100_004_4],
    [0.017_753, 0.109_468, 0.872_969],
];

/// Inverse of [`RGB_TO_LMS`].
const LMS_TO_RGB: [[f32; 3]; 3] = [
    [5.432_621_5, -4.679_068, 0.246_038],
    [-1.105_174_4, 2.311_184_3, -0.205_77],
    [0.028_106_3, -0.194_661_2, 1.166_315_5],
];

/// Shaped LMS to IPT (Ebner & Fairchild 1998).
const LMS_TO_IPT: [[f32; 3]; 3] = [
    [0.4, 0.4, 0.2],
    [4.455, -4.851, 0.396],
    [0.805_6, 0.357_2, -1.162_8],
];

/// Inverse of [`LMS_TO_IPT`].
const IPT_TO_LMS: [[f32; 3]; 3] = [
    [1.0, 0.097_568_9, 0.205_226_4],
    [1.0, -0.113_876_5, 0.133_217_2],
    [1.0, 0.032_615_1, -0.676_887_2],
];

const D65_WHITE_POINT: [f32; 3] = [0.95047, 1.0, 1.08883];
const LAB_EPSILON: f32 = 0.008_856_452; // 216/24389
const LAB_KAPPA: f32 = 903.296_3; // 24389/27
const K1: f32 = 0.045; // Graphic arts weighting for ΔE94
const K2: f32 = 0.015;

/// 2.0 gamma expansion used by the HQ variant in place of the piecewise
/// sRGB curve.
#[inline]
fn forward_gamma(x: f32) -> f32 {
    x * x
}

#[inline]
fn reverse_gamma(x: f32) -> f32 {
    x.sqrt()
}

/// Sign-preserving 0.43 power-law shaping of an LMS component.
#[inline]
fn forward_shape(t: f32) -> f32 {
    t.abs().powf(SHAPE_EXPONENT).copysign(t)
}

#[inline]
fn reverse_shape(t: f32) -> f32 {
    t.abs().powf(1.0 / SHAPE_EXPONENT).copysign(t)
}

#[inline]
fn mul_row(row: &[f32; 3], v: [f32; 3]) -> f32 {
    row[0] * v[0] + row[1] * v[1] + row[2] * v[2]
}

/// Convert an sRGB triple in [0, 1] to IPT_HQ channels.
///
/// Returns `[i, p, t]` with intensity in [0, 1]; protan and tritan stay
/// within [-1, 1] for every color inside the sRGB cube.
pub fn srgb_to_ipt(rgb: [f32; 3]) -> [f32; 3] {
    let gamma = [
        forward_gamma(rgb[0]),
        forward_gamma(rgb[1]),
        forward_gamma(rgb[2]),
    ];
    let lms = [
        forward_shape(mul_row(&RGB_TO_LMS[0], gamma)),
        forward_shape(mul_row(&RGB_TO_LMS[1], gamma)),
        forward_shape(mul_row(&RGB_TO_LMS[2], gamma)),
    ];
    [
        mul_row(&LMS_TO_IPT[0], lms),
        mul_row(&LMS_TO_IPT[1], lms),
        mul_row(&LMS_TO_IPT[2], lms),
    ]
}

/// Convert IPT_HQ channels back to an sRGB triple, clamping to the gamut.
pub fn ipt_to_srgb(ipt: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = ipt_to_linear(ipt);
    [
        reverse_gamma(r.clamp(0.0, 1.0)),
        reverse_gamma(g.clamp(0.0, 1.0)),
        reverse_gamma(b.clamp(0.0, 1.0)),
    ]
}

/// Convert IPT_HQ channels to gamma-expanded RGB without clamping.
///
/// Values outside [0, 1] indicate the IPT triple falls outside the sRGB
/// gamut; [`crate::packed::PackedColor::in_gamut`] relies on this.
pub(crate) fn ipt_to_linear(ipt: [f32; 3]) -> [f32; 3] {
    let lms = [
        reverse_shape(mul_row(&IPT_TO_LMS[0], ipt)),
        reverse_shape(mul_row(&IPT_TO_LMS[1], ipt)),
        reverse_shape(mul_row(&IPT_TO_LMS[2], ipt)),
    ];
    [
        mul_row(&LMS_TO_RGB[0], lms),
        mul_row(&LMS_TO_RGB[1], lms),
        mul_row(&LMS_TO_RGB[2], lms),
    ]
}

fn srgb_channel_to_linear(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_to_xyz(rgb: [f32; 3]) -> [f32; 3] {
    let r = srgb_channel_to_linear(rgb[0]);
    let g = srgb_channel_to_linear(rgb[1]);
    let b = srgb_channel_to_linear(rgb[2]);

    let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
    let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b;
    let z = 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b;

    [x, y, z]
}

fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

/// Convert an sRGB color in [0, 1] to CIELAB coordinates (L*, a*, b*).
pub fn srgb_to_lab(rgb: [f32; 3]) -> [f32; 3] {
    let xyz = srgb_to_xyz(rgb);
    let xr = xyz[0] / D65_WHITE_POINT[0];
    let yr = xyz[1] / D65_WHITE_POINT[1];
    let zr = xyz[2] / D65_WHITE_POINT[2];

    let fx = lab_f(xr);
    let fy = lab_f(yr);
    let fz = lab_f(zr);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [l, a, b]
}

/// Compute the CIE ΔE94 color difference between two sRGB colors in [0, 1].
///
/// Weighting factors kL, kC, and kH are fixed to 1.0. Application-specific
/// modifiers K1 and K2 follow the graphic arts standard (0.045, 0.015).
pub fn delta_e94(rgb_a: [f32; 3], rgb_b: [f32; 3]) -> f32 {
    let lab_a = srgb_to_lab(rgb_a);
    let lab_b = srgb_to_lab(rgb_b);

    let delta_l = lab_a[0] - lab_b[0];
    let c1 = (lab_a[1].powi(2) + lab_a[2].powi(2)).sqrt();
    let c2 = (lab_b[1].powi(2) + lab_b[2].powi(2)).sqrt();
    let delta_c = c1 - c2;

    let delta_a = lab_a[1] - lab_b[1];
    let delta_b = lab_a[2] - lab_b[2];
    let delta_h_sq = (delta_a * delta_a) + (delta_b * delta_b) - (delta_c * delta_c);
    let delta_h = delta_h_sq.max(0.0).sqrt();

    let s_c = 1.0 + K1 * c1;
    let s_h = 1.0 + K2 * c1;

    let term_l = delta_l;
    let term_c = delta_c / s_c;
    let term_h = delta_h / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_equal(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "{} !≈ {}", a, b);
    }

    #[test]
    fn white_maps_to_full_intensity() {
        let ipt = srgb_to_ipt([1.0, 1.0, 1.0]);
        approx_equal(ipt[0], 1.0, 1e-3);
        approx_equal(ipt[1], 0.0, 1e-2);
        approx_equal(ipt[2], 0.0, 1e-2);
    }

    #[test]
    fn black_maps_to_origin() {
        let ipt = srgb_to_ipt([0.0, 0.0, 0.0]);
        approx_equal(ipt[0], 0.0, 1e-6);
        approx_equal(ipt[1], 0.0, 1e-6);
        approx_equal(ipt[2], 0.0, 1e-6);
    }

    #[test]
    fn primaries_round_trip_through_ipt() {
        for rgb in [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [0.5, 0.5, 0.5],
        ] {
            let back = ipt_to_srgb(srgb_to_ipt(rgb));
            for c in 0..3 {
                approx_equal(back[c], rgb[c], 5e-3);
            }
        }
    }

    #[test]
    fn red_sits_on_positive_protan_axis() {
        let ipt = srgb_to_ipt([1.0, 0.0, 0.0]);
        assert!(ipt[1] > 0.4, "protan of red was {}", ipt[1]);
        let green = srgb_to_ipt([0.0, 1.0, 0.0]);
        assert!(green[1] < -0.3, "protan of green was {}", green[1]);
    }

    #[test]
    fn channels_stay_in_packing_range_across_gamut() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f32 / 4.0, g as f32 / 4.0, b as f32 / 4.0];
                    let ipt = srgb_to_ipt(rgb);
                    assert!((0.0..=1.0).contains(&ipt[0]), "i out of range: {:?}", ipt);
                    assert!((-1.0..=1.0).contains(&ipt[1]), "p out of range: {:?}", ipt);
                    assert!((-1.0..=1.0).contains(&ipt[2]), "t out of range: {:?}", ipt);
                }
            }
        }
    }

    #[test]
    fn srgb_to_lab_reference_white() {
        let lab = srgb_to_lab([1.0, 1.0, 1.0]);
        approx_equal(lab[0], 100.0, 1e-3);
        approx_equal(lab[1], 0.0, 1e-3);
        approx_equal(lab[2], 0.0, 1e-3);
    }

    #[test]
    fn delta_e94_zero_for_identical_colors() {
        let diff = delta_e94([0.2, 0.4, 0.6], [0.2, 0.4, 0.6]);
        approx_equal(diff, 0.0, 1e-3);
    }

    #[test]
    fn delta_e94_matches_reference_pair() {
        // Pure red vs. pure green difference using the fixed ΔE94 parameters.
        let diff = delta_e94([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        approx_equal(diff, 73.430, 1e-3);
    }
}
