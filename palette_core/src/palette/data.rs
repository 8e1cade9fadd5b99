//! Palette definitions - single source of truth for the named colors.
//!
//! Each entry pairs a human-readable name with its RGBA8888 value; the
//! packed IPT_HQ form is derived through the codec when the lookup tables
//! are first built. Names are unique, case- and spacing-sensitive.
//! `Transparent` comes first; the web block and the pigment block are each
//! alphabetical in declaration order.

/// Definition of a single palette color.
#[derive(Debug, Clone, Copy)]
pub struct PaletteDef {
    /// Unique human-readable name, e.g. "Ocean Blue".
    pub name: &'static str,
    /// RGBA8888 value (red in the top byte).
    pub rgba: u32,
}

const fn def(name: &'static str, rgba: u32) -> PaletteDef {
    PaletteDef { name, rgba }
}

/// Complete palette in declaration order.
pub const ENTRIES: &[PaletteDef] = &[
    def("Transparent", 0x0000_0000),
    // Web color block.
    def("Alice Blue", 0xF0F8FFFF),
    def("Antique White", 0xFAEBD7FF),
    def("Aqua", 0x00FFFFFF),
    def("Aquamarine", 0x7FFFD4FF),
    def("Azure", 0xF0FFFFFF),
    def("Beige", 0xF5F5DCFF),
    def("Bisque", 0xFFE4C4FF),
    def("Black", 0x000000FF),
    def("Blanched Almond", 0xFFEBCDFF),
    def("Blue", 0x0000FFFF),
    def("Blue Violet", 0x8A2BE2FF),
    def("Brown", 0xA52A2AFF),
    def("Burlywood", 0xDEB887FF),
    def("Cadet Blue", 0x5F9EA0FF),
    def("Chartreuse", 0x7FFF00FF),
    def("Chocolate", 0xD2691EFF),
    def("Coral", 0xFF7F50FF),
    def("Cornflower Blue", 0x6495EDFF),
    def("Cornsilk", 0xFFF8DCFF),
    def("Crimson", 0xDC143CFF),
    def("Cyan", 0x00FFFFFF),
    def("Dark Blue", 0x00008BFF),
    def("Dark Cyan", 0x008B8BFF),
    def("Dark Goldenrod", 0xB8860BFF),
    def("Dark Gray", 0xA9A9A9FF),
    def("Dark Green", 0x006400FF),
    def("Dark Khaki", 0xBDB76BFF),
    def("Dark Magenta", 0x8B008BFF),
    def("Dark Olive Green", 0x556B2FFF),
    def("Dark Orange", 0xFF8C00FF),
    def("Dark Orchid", 0x9932CCFF),
    def("Dark Red", 0x8B0000FF),
    def("Dark Salmon", 0xE9967AFF),
    def("Dark Sea Green", 0x8FBC8FFF),
    def("Dark Slate Blue", 0x483D8BFF),
    def("Dark Slate Gray", 0x2F4F4FFF),
    def("Dark Turquoise", 0x00CED1FF),
    def("Dark Violet", 0x9400D3FF),
    def("Deep Pink", 0xFF1493FF),
    def("Deep Sky Blue", 0x00BFFFFF),
    def("Dim Gray", 0x696969FF),
    def("Dodger Blue", 0x1E90FFFF),
    def("Firebrick", 0xB22222FF),
    def("Floral White", 0xFFFAF0FF),
    def("Forest Green", 0x228B22FF),
    def("Fuchsia", 0xFF00FFFF),
    def("Gainsboro", 0xDCDCDCFF),
    def("Ghost White", 0xF8F8FFFF),
    def("Gold", 0xFFD700FF),
    def("Goldenrod", 0xDAA520FF),
    def("Gray", 0x808080FF),
    def("Green", 0x008000FF),
    def("Green Yellow", 0xADFF2FFF),
    def("Honeydew", 0xF0FFF0FF),
    def("Hot Pink", 0xFF69B4FF),
    def("Indian Red", 0xCD5C5CFF),
    def("Indigo", 0x4B0082FF),
    def("Ivory", 0xFFFFF0FF),
    def("Khaki", 0xF0E68CFF),
    def("Lavender", 0xE6E6FAFF),
    def("Lavender Blush", 0xFFF0F5FF),
    def("Lawn Green", 0x7CFC00FF),
    def("Lemon Chiffon", 0xFFFACDFF),
    def("Light Blue", 0xADD8E6FF),
    def("Light Coral", 0xF08080FF),
    def("Light Cyan", 0xE0FFFFFF),
    def("Light Goldenrod", 0xFAFAD2FF),
    def("Light Gray", 0xD3D3D3FF),
    def("Light Green", 0x90EE90FF),
    def("Light Pink", 0xFFB6C1FF),
    def("Light Salmon", 0xFFA07AFF),
    def("Light Sea Green", 0x20B2AAFF),
    def("Light Sky Blue", 0x87CEFAFF),
    def("Light Slate Gray", 0x778899FF),
    def("Light Steel Blue", 0xB0C4DEFF),
    def("Light Yellow", 0xFFFFE0FF),
    def("Lime", 0x00FF00FF),
    def("Lime Green", 0x32CD32FF),
    def("Linen", 0xFAF0E6FF),
    def("Magenta", 0xFF00FFFF),
    def("Maroon", 0x800000FF),
    def("Medium Aquamarine", 0x66CDAAFF),
    def("Medium Blue", 0x0000CDFF),
    def("Medium Orchid", 0xBA55D3FF),
    def("Medium Purple", 0x9370DBFF),
    def("Medium Sea Green", 0x3CB371FF),
    def("Medium Slate Blue", 0x7B68EEFF),
    def("Medium Spring Green", 0x00FA9AFF),
    def("Medium Turquoise", 0x48D1CCFF),
    def("Medium Violet Red", 0xC71585FF),
    def("Midnight Blue", 0x191970FF),
    def("Mint Cream", 0xF5FFFAFF),
    def("Misty Rose", 0xFFE4E1FF),
    def("Moccasin", 0xFFE4B5FF),
    def("Navajo White", 0xFFDEADFF),
    def("Navy", 0x000080FF),
    def("Old Lace", 0xFDF5E6FF),
    def("Olive", 0x808000FF),
    def("Olive Drab", 0x6B8E23FF),
    def("Orange", 0xFFA500FF),
    def("Orange Red", 0xFF4500FF),
    def("Orchid", 0xDA70D6FF),
    def("Pale Goldenrod", 0xEEE8AAFF),
    def("Pale Green", 0x98FB98FF),
    def("Pale Turquoise", 0xAFEEEEFF),
    def("Pale Violet Red", 0xDB7093FF),
    def("Papaya Whip", 0xFFEFD5FF),
    def("Peach Puff", 0xFFDAB9FF),
    def("Peru", 0xCD853FFF),
    def("Pink", 0xFFC0CBFF),
    def("Plum", 0xDDA0DDFF),
    def("Powder Blue", 0xB0E0E6FF),
    def("Purple", 0x800080FF),
    def("Rebecca Purple", 0x663399FF),
    def("Red", 0xFF0000FF),
    def("Rosy Brown", 0xBC8F8FFF),
    def("Royal Blue", 0x4169E1FF),
    def("Saddle Brown", 0x8B4513FF),
    def("Salmon", 0xFA8072FF),
    def("Sandy Brown", 0xF4A460FF),
    def("Sea Green", 0x2E8B57FF),
    def("Seashell", 0xFFF5EEFF),
    def("Sienna", 0xA0522DFF),
    def("Silver", 0xC0C0C0FF),
    def("Sky Blue", 0x87CEEBFF),
    def("Slate Blue", 0x6A5ACDFF),
    def("Slate Gray", 0x708090FF),
    def("Snow", 0xFFFAFAFF),
    def("Spring Green", 0x00FF7FFF),
    def("Steel Blue", 0x4682B4FF),
    def("Tan", 0xD2B48CFF),
    def("Teal", 0x008080FF),
    def("Thistle", 0xD8BFD8FF),
    def("Tomato", 0xFF6347FF),
    def("Turquoise", 0x40E0D0FF),
    def("Violet", 0xEE82EEFF),
    def("Wheat", 0xF5DEB3FF),
    def("White", 0xFFFFFFFF),
    def("White Smoke", 0xF5F5F5FF),
    def("Yellow", 0xFFFF00FF),
    def("Yellow Green", 0x9ACD32FF),
    // Pigment and artist color block.
    def("Amber", 0xFFBF00FF),
    def("Amethyst", 0x9966CCFF),
    def("Apricot", 0xFBCEB1FF),
    def("Asparagus", 0x87A96BFF),
    def("Burgundy", 0x800020FF),
    def("Burnt Orange", 0xCC5500FF),
    def("Burnt Sienna", 0xE97451FF),
    def("Burnt Umber", 0x8A3324FF),
    def("Byzantium", 0x702963FF),
    def("Cardinal", 0xC41E3AFF),
    def("Carmine", 0x960018FF),
    def("Celadon", 0xACE1AFFF),
    def("Cerise", 0xDE3163FF),
    def("Cerulean", 0x007BA7FF),
    def("Champagne", 0xF7E7CEFF),
    def("Charcoal", 0x36454FFF),
    def("Citron", 0x9FA91FFF),
    def("Claret", 0x7F1734FF),
    def("Cobalt Blue", 0x0047ABFF),
    def("Copper", 0xB87333FF),
    def("Coral Pink", 0xF88379FF),
    def("Cream", 0xFFFDD0FF),
    def("Denim", 0x1560BDFF),
    def("Ecru", 0xC2B280FF),
    def("Eggplant", 0x614051FF),
    def("Eggshell", 0xF0EAD6FF),
    def("Emerald", 0x50C878FF),
    def("Fallow", 0xC19A6BFF),
    def("Fern Green", 0x4F7942FF),
    def("Flax", 0xEEDC82FF),
    def("Gamboge", 0xE49B0FFF),
    def("Glaucous", 0x6082B6FF),
    def("Gunmetal", 0x2A3439FF),
    def("Harlequin", 0x3FFF00FF),
    def("Heliotrope", 0xDF73FFFF),
    def("Iceberg", 0x71A6D2FF),
    def("Jade", 0x00A86BFF),
    def("Jasmine", 0xF8DE7EFF),
    def("Lapis Lazuli", 0x26619CFF),
    def("Mahogany", 0xC04000FF),
    def("Malachite", 0x0BDA51FF),
    def("Mauve", 0xE0B0FFFF),
    def("Mustard", 0xFFDB58FF),
    def("Ocean Blue", 0x4F42B5FF),
    def("Ochre", 0xCC7722FF),
    def("Olivine", 0x9AB973FF),
    def("Pear", 0xD1E231FF),
    def("Periwinkle", 0xCCCCFFFF),
    def("Persimmon", 0xEC5800FF),
    def("Pine Green", 0x01796FFF),
    def("Prussian Blue", 0x003153FF),
    def("Puce", 0xCC8899FF),
    def("Pumpkin", 0xFF7518FF),
    def("Raspberry", 0xE30B5CFF),
    def("Raw Umber", 0x826644FF),
    def("Russet", 0x80461BFF),
    def("Rust", 0xB7410EFF),
    def("Saffron", 0xF4C430FF),
    def("Sage", 0xBCB88AFF),
    def("Sapphire", 0x0F52BAFF),
    def("Scarlet", 0xFF2400FF),
    def("Sepia", 0x704214FF),
    def("Shamrock", 0x009E60FF),
    def("Smalt", 0x003399FF),
    def("Straw", 0xE4D96FFF),
    def("Taupe", 0x483C32FF),
    def("Terracotta", 0xE2725BFF),
    def("Tyrian Purple", 0x66023CFF),
    def("Ultramarine", 0x3F00FFFF),
    def("Vermilion", 0xE34234FF),
    def("Viridian", 0x40826DFF),
    def("Wine", 0x722F37FF),
    def("Wisteria", 0xC9A0DCFF),
    def("Zaffre", 0x0014A8FF),
];
