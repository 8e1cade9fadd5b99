//! Synchronization with an external UI color registry.
//!
//! UI toolkits keep their own name → color table; [`ColorRegistry`] is the
//! seam a toolkit adapts so the palette can be copied in. Registry colors
//! are plain sRGB channel quadruples - the packed IPT_HQ form stays inside
//! this crate.

use std::collections::HashMap;

use crate::palette::{self, TRANSPARENT};

/// A mutable, name-keyed color table owned by some UI framework.
pub trait ColorRegistry {
    /// Names currently present, in no particular order.
    fn names(&self) -> Vec<String>;

    /// Fetch a color's sRGB channels.
    fn get(&self, name: &str) -> Option<[f32; 4]>;

    /// Insert or overwrite a color.
    fn set(&mut self, name: &str, rgba: [f32; 4]);
}

/// Overwrite every registry entry whose name the palette knows.
///
/// Registry names missing from the palette are set to transparent, matching
/// the lookup default; no names are added or removed.
pub fn edit_known_colors<R: ColorRegistry>(registry: &mut R) {
    let mut unknown = 0usize;
    for name in registry.names() {
        let packed = match palette::named(&name) {
            Some(packed) => packed,
            None => {
                unknown += 1;
                TRANSPARENT
            }
        };
        registry.set(&name, packed.to_rgba());
    }
    if unknown > 0 {
        tracing::debug!("reset {} unknown registry names to transparent", unknown);
    }
}

/// Insert one registry entry per palette color, overwriting on collision.
pub fn append_to_known_colors<R: ColorRegistry>(registry: &mut R) {
    for def in palette::ENTRIES {
        let packed = palette::lookup(def.name, TRANSPARENT);
        registry.set(def.name, packed.to_rgba());
    }
    tracing::debug!("copied {} palette colors into the registry", palette::ENTRIES.len());
}

/// HashMap-backed registry for tests and the probe binary.
#[derive(Debug, Default, Clone)]
pub struct SimpleRegistry {
    colors: HashMap<String, [f32; 4]>,
}

impl SimpleRegistry {
    pub fn new() -> Self {
        SimpleRegistry::default()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, [f32; 4])> {
        self.colors.iter().map(|(name, rgba)| (name.as_str(), *rgba))
    }
}

impl ColorRegistry for SimpleRegistry {
    fn names(&self) -> Vec<String> {
        self.colors.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> Option<[f32; 4]> {
        self.colors.get(name).copied()
    }

    fn set(&mut self, name: &str, rgba: [f32; 4]) {
        self.colors.insert(name.to_string(), rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ENTRIES;

    #[test]
    fn append_produces_one_entry_per_palette_color() {
        let mut registry = SimpleRegistry::new();
        append_to_known_colors(&mut registry);
        assert_eq!(registry.len(), ENTRIES.len());
        for def in ENTRIES {
            let rgba = registry.get(def.name).expect("name missing after append");
            let expected = palette::lookup(def.name, TRANSPARENT).to_rgba();
            assert_eq!(rgba, expected);
        }
    }

    #[test]
    fn edit_rewrites_only_existing_names() {
        let mut registry = SimpleRegistry::new();
        registry.set("Red", [0.0, 0.0, 0.0, 1.0]);
        registry.set("Framework Accent", [0.1, 0.2, 0.3, 1.0]);

        edit_known_colors(&mut registry);

        assert_eq!(registry.len(), 2, "edit must not add names");
        let red = registry.get("Red").unwrap();
        assert!(red[0] > 0.9 && red[1] < 0.1, "Red was not refreshed: {:?}", red);
        // Unknown to the palette: reset to the transparent default, which
        // decodes to a near-black transparent, never a chromatic color.
        let accent = registry.get("Framework Accent").unwrap();
        assert_eq!(accent[3], 0.0);
        for channel in &accent[..3] {
            assert!(*channel < 0.02, "fallback is not achromatic: {:?}", accent);
        }
    }

    #[test]
    fn append_overwrites_stale_values() {
        let mut registry = SimpleRegistry::new();
        registry.set("Ocean Blue", [1.0, 1.0, 1.0, 1.0]);
        append_to_known_colors(&mut registry);
        let ocean = registry.get("Ocean Blue").unwrap();
        assert!(ocean[2] > ocean[1], "Ocean Blue should stay blue: {:?}", ocean);
    }
}
