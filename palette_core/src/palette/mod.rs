//! The named palette: lookup tables and ordered views.
//!
//! Colors are defined as `(name, RGBA8888)` pairs in [`data`] and packed
//! through the IPT_HQ codec the first time any table is touched; after that
//! every view is a cheap borrow of process-wide state. Three name orderings
//! are exposed:
//!
//! - [`names`] - lexicographic
//! - [`names_by_hue`] - transparent first, then achromatic entries by
//!   intensity, then chromatic entries by (hue, intensity)
//! - [`names_by_lightness`] - by intensity
//!
//! All three are permutations of the same name set.

pub mod data;


use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::packed::PackedColor;
use crate::space;

pub use data::{PaletteDef, ENTRIES};

/// The fully transparent packed value, the recommended lookup default.
///
/// Bit pattern `0x007F_7F00`: zero intensity and alpha, chroma on the gray
/// axis.
pub const TRANSPARENT: PackedColor = PackedColor::from_bits(0x007F_7F00);

/// Saturation at or below which an entry sorts with the grays.
const GRAY_SATURATION: f32 = 0.05;

static NAMED: OnceLock<HashMap<&'static str, PackedColor>> = OnceLock::new();
static LIST: OnceLock<Vec<PackedColor>> = OnceLock::new();
static NAMES: OnceLock<Vec<&'static str>> = OnceLock::new();
static NAMES_BY_HUE: OnceLock<Vec<&'static str>> = OnceLock::new();
static NAMES_BY_LIGHTNESS: OnceLock<Vec<&'static str>> = OnceLock::new();

fn named_map() -> &'static HashMap<&'static str, PackedColor> {
    NAMED.get_or_init(|| {
        let map: HashMap<_, _> = ENTRIES
            .iter()
            .map(|def| (def.name, PackedColor::from_rgba8888(def.rgba)))
            .collect();
        tracing::debug!("packed {} palette colors", map.len());
        map
    })
}

/// Look up a packed color by exact name.
pub fn named(name: &str) -> Option<PackedColor> {
    named_map().get(name).copied()
}

/// Look up a packed color by exact name, with a caller-supplied default.
///
/// [`TRANSPARENT`] is the recommended default:
///
/// ```
/// use palette_core::palette::{lookup, TRANSPARENT};
///
/// let ocean = lookup("Ocean Blue", TRANSPARENT);
/// assert!(ocean.alpha() > 0.99);
/// assert!(lookup("No Such Color", TRANSPARENT).is_transparent());
/// ```
pub fn lookup(name: &str, default: PackedColor) -> PackedColor {
    named(name).unwrap_or(default)
}

/// Packed values in declaration order.
pub fn list() -> &'static [PackedColor] {
    LIST.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|def| PackedColor::from_rgba8888(def.rgba))
            .collect()
    })
}

/// All palette names in lexicographic order.
pub fn names() -> &'static [&'static str] {
    NAMES
        .get_or_init(|| {
            let mut names: Vec<&'static str> = ENTRIES.iter().map(|def| def.name).collect();
            names.sort_unstable();
            names
        })
        .as_slice()
}

/// All palette names ordered by hue.
///
/// Fully transparent entries come first, then achromatic entries ordered by
/// intensity, then chromatic entries ordered by hue with intensity breaking
/// ties.
pub fn names_by_hue() -> &'static [&'static str] {
    NAMES_BY_HUE
        .get_or_init(|| {
            let mut names: Vec<&'static str> = ENTRIES.iter().map(|def| def.name).collect();
            names.sort_by(|a, b| hue_order(color_of(a), color_of(b)));
            names
        })
        .as_slice()
}

/// All palette names ordered by intensity, darkest first.
pub fn names_by_lightness() -> &'static [&'static str] {
    NAMES_BY_LIGHTNESS
        .get_or_init(|| {
            let mut names: Vec<&'static str> = ENTRIES.iter().map(|def| def.name).collect();
            names.sort_by(|a, b| {
                let ca = color_of(a);
                let cb = color_of(b);
                ca.intensity()
                    .total_cmp(&cb.intensity())
                    .then_with(|| a.cmp(b))
            });
            names
        })
        .as_slice()
}

/// The palette name whose color is nearest to `rgb` under ΔE94.
///
/// Transparent entries are skipped. Returns the name and its distance.
pub fn closest_name(rgb: [f32; 3]) -> (&'static str, f32) {
    let mut best: (&'static str, f32) = ("", f32::INFINITY);
    for def in ENTRIES {
        let packed = lookup(def.name, TRANSPARENT);
        if packed.is_transparent() {
            continue;
        }
        let [r, g, b, _] = packed.to_rgba();
        let diff = space::delta_e94(rgb, [r, g, b]);
        if diff < best.1 {
            best = (def.name, diff);
        }
    }
    best
}

fn color_of(name: &str) -> PackedColor {
    lookup(name, TRANSPARENT)
}

fn hue_order(a: PackedColor, b: PackedColor) -> Ordering {
    match (a.is_transparent(), b.is_transparent()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    let gray_a = a.saturation() <= GRAY_SATURATION;
    let gray_b = b.saturation() <= GRAY_SATURATION;
    match (gray_a, gray_b) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.intensity().total_cmp(&b.intensity()),
        (false, false) => a
            .hue()
            .total_cmp(&b.hue())
            .then_with(|| a.intensity().total_cmp(&b.intensity())),
    }
}
