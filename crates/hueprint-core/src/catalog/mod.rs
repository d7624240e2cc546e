//! Color reference catalog
//!
//! A fixed table mapping exact RGB triples to canonical color names. The table
//! is compiled into the binary, read-only, and safe for unsynchronized
//! concurrent reads. Entry order matters: the classifier's nearest-name scan
//! keeps the first of equally distant entries, so reordering changes results.

use crate::color::Rgb;


/// The full reference table. Grouped by family; grays and accent colors last.
static ENTRIES: [(Rgb, &str); 102] = [
    // Reds
    (Rgb::new(255, 0, 0), "Red"),
    (Rgb::new(220, 20, 60), "Crimson"),
    (Rgb::new(178, 34, 34), "Firebrick"),
    (Rgb::new(139, 0, 0), "Dark Red"),
    (Rgb::new(255, 99, 71), "Tomato"),
    (Rgb::new(255, 69, 0), "Red Orange"),
    (Rgb::new(255, 160, 122), "Light Salmon"),
    (Rgb::new(250, 128, 114), "Salmon"),
    (Rgb::new(233, 150, 122), "Dark Salmon"),
    (Rgb::new(240, 128, 128), "Light Coral"),
    (Rgb::new(205, 92, 92), "Indian Red"),
    (Rgb::new(255, 182, 193), "Light Pink"),
    (Rgb::new(255, 192, 203), "Pink"),
    (Rgb::new(255, 20, 147), "Deep Pink"),
    (Rgb::new(199, 21, 133), "Medium Violet Red"),
    // Oranges
    (Rgb::new(255, 165, 0), "Orange"),
    (Rgb::new(255, 140, 0), "Dark Orange"),
    (Rgb::new(255, 127, 80), "Coral"),
    (Rgb::new(255, 218, 185), "Peach Puff"),
    (Rgb::new(255, 228, 196), "Bisque"),
    (Rgb::new(255, 222, 173), "Navajo White"),
    (Rgb::new(245, 222, 179), "Wheat"),
    (Rgb::new(222, 184, 135), "Burlywood"),
    (Rgb::new(210, 180, 140), "Tan"),
    // Yellows
    (Rgb::new(255, 255, 0), "Yellow"),
    (Rgb::new(255, 255, 224), "Light Yellow"),
    (Rgb::new(255, 250, 205), "Lemon Chiffon"),
    (Rgb::new(250, 250, 210), "Light Goldenrod Yellow"),
    (Rgb::new(255, 239, 213), "Papaya Whip"),
    (Rgb::new(255, 228, 181), "Moccasin"),
    (Rgb::new(238, 232, 170), "Pale Goldenrod"),
    (Rgb::new(240, 230, 140), "Khaki"),
    (Rgb::new(189, 183, 107), "Dark Khaki"),
    (Rgb::new(255, 215, 0), "Gold"),
    (Rgb::new(218, 165, 32), "Goldenrod"),
    (Rgb::new(184, 134, 11), "Dark Goldenrod"),
    // Greens
    (Rgb::new(0, 255, 0), "Lime"),
    (Rgb::new(0, 128, 0), "Green"),
    (Rgb::new(34, 139, 34), "Forest Green"),
    (Rgb::new(0, 100, 0), "Dark Green"),
    (Rgb::new(173, 255, 47), "Green Yellow"),
    (Rgb::new(127, 255, 0), "Chartreuse"),
    (Rgb::new(124, 252, 0), "Lawn Green"),
    (Rgb::new(50, 205, 50), "Lime Green"),
    (Rgb::new(152, 251, 152), "Pale Green"),
    (Rgb::new(144, 238, 144), "Light Green"),
    (Rgb::new(0, 250, 154), "Medium Spring Green"),
    (Rgb::new(0, 255, 127), "Spring Green"),
    (Rgb::new(60, 179, 113), "Medium Sea Green"),
    (Rgb::new(46, 139, 87), "Sea Green"),
    (Rgb::new(32, 178, 170), "Light Sea Green"),
    (Rgb::new(0, 139, 139), "Dark Cyan"),
    // Blues
    (Rgb::new(0, 0, 255), "Blue"),
    (Rgb::new(0, 0, 139), "Dark Blue"),
    (Rgb::new(0, 0, 205), "Medium Blue"),
    (Rgb::new(65, 105, 225), "Royal Blue"),
    (Rgb::new(100, 149, 237), "Cornflower Blue"),
    (Rgb::new(176, 196, 222), "Light Steel Blue"),
    (Rgb::new(176, 224, 230), "Powder Blue"),
    (Rgb::new(173, 216, 230), "Light Blue"),
    (Rgb::new(135, 206, 250), "Light Sky Blue"),
    (Rgb::new(135, 206, 235), "Sky Blue"),
    (Rgb::new(0, 191, 255), "Deep Sky Blue"),
    (Rgb::new(30, 144, 255), "Dodger Blue"),
    (Rgb::new(70, 130, 180), "Steel Blue"),
    (Rgb::new(95, 158, 160), "Cadet Blue"),
    // Purples
    (Rgb::new(128, 0, 128), "Purple"),
    (Rgb::new(75, 0, 130), "Indigo"),
    (Rgb::new(72, 61, 139), "Dark Slate Blue"),
    (Rgb::new(106, 90, 205), "Slate Blue"),
    (Rgb::new(123, 104, 238), "Medium Slate Blue"),
    (Rgb::new(147, 112, 219), "Medium Purple"),
    (Rgb::new(138, 43, 226), "Blue Violet"),
    (Rgb::new(148, 0, 211), "Dark Violet"),
    (Rgb::new(153, 50, 204), "Dark Orchid"),
    (Rgb::new(186, 85, 211), "Medium Orchid"),
    (Rgb::new(221, 160, 221), "Plum"),
    (Rgb::new(238, 130, 238), "Violet"),
    (Rgb::new(255, 0, 255), "Magenta"),
    (Rgb::new(218, 112, 214), "Orchid"),
    // Browns
    (Rgb::new(165, 42, 42), "Brown"),
    (Rgb::new(139, 69, 19), "Saddle Brown"),
    (Rgb::new(160, 82, 45), "Sienna"),
    (Rgb::new(205, 133, 63), "Peru"),
    (Rgb::new(245, 245, 220), "Beige"),
    (Rgb::new(244, 164, 96), "Sandy Brown"),
    (Rgb::new(188, 143, 143), "Rosy Brown"),
    // Grays
    (Rgb::new(0, 0, 0), "Black"),
    (Rgb::new(105, 105, 105), "Dim Gray"),
    (Rgb::new(128, 128, 128), "Gray"),
    (Rgb::new(169, 169, 169), "Dark Gray"),
    (Rgb::new(192, 192, 192), "Silver"),
    (Rgb::new(211, 211, 211), "Light Gray"),
    (Rgb::new(220, 220, 220), "Gainsboro"),
    (Rgb::new(245, 245, 245), "White Smoke"),
    (Rgb::new(255, 255, 255), "White"),
    // Cyan and accent colors
    (Rgb::new(0, 255, 255), "Cyan"),
    (Rgb::new(127, 255, 212), "Aquamarine"),
    (Rgb::new(240, 255, 255), "Azure"),
    (Rgb::new(245, 255, 250), "Mint Cream"),
    (Rgb::new(240, 255, 240), "Honeydew"),
    (Rgb::new(255, 105, 180), "Hot Pink"),
];

/// Exact-match lookup. Returns `None` for colors not in the table.
pub fn lookup_exact(color: Rgb) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|(entry, _)| *entry == color)
        .map(|(_, name)| *name)
}

/// All catalog entries in scan order.
pub fn entries() -> &'static [(Rgb, &'static str)] {
    &ENTRIES
}

/// Number of entries in the catalog.
pub fn len() -> usize {
    ENTRIES.len()
}
