//! Toolkit color names (lowercase, no spaces) to sRGB bytes.
//!
//! `gray`, `green`, `maroon` and `purple` use the web values rather than the
//! X11 ones.

pub(super) fn lookup(name: &str) -> Option<[u8; 3]> {
    let rgb = match name {
        "black" => [0x00, 0x00, 0x00],
        "white" => [0xff, 0xff, 0xff],
        "red" => [0xff, 0x00, 0x00],
        "green" => [0x00, 0x80, 0x00],
        "lime" => [0x00, 0xff, 0x00],
        "blue" => [0x00, 0x00, 0xff],
        "yellow" => [0xff, 0xff, 0x00],
        "cyan" | "aqua" => [0x00, 0xff, 0xff],
        "magenta" | "fuchsia" => [0xff, 0x00, 0xff],
        "orange" => [0xff, 0xa5, 0x00],
        "darkorange" => [0xff, 0x8c, 0x00],
        "purple" => [0x80, 0x00, 0x80],
        "maroon" => [0x80, 0x00, 0x00],
        "navy" | "navyblue" => [0x00, 0x00, 0x80],
        "olive" => [0x80, 0x80, 0x00],
        "teal" => [0x00, 0x80, 0x80],
        "silver" => [0xc0, 0xc0, 0xc0],
        "gray" | "grey" => [0x80, 0x80, 0x80],
        "lightgray" | "lightgrey" => [0xd3, 0xd3, 0xd3],
        "darkgray" | "darkgrey" => [0xa9, 0xa9, 0xa9],
        "gray85" | "grey85" => [0xd9, 0xd9, 0xd9],
        "brown" => [0xa5, 0x2a, 0x2a],
        "pink" => [0xff, 0xc0, 0xcb],
        "gold" => [0xff, 0xd7, 0x00],
        "violet" => [0xee, 0x82, 0xee],
        "indigo" => [0x4b, 0x00, 0x82],
        "skyblue" => [0x87, 0xce, 0xeb],
        "lightblue" => [0xad, 0xd8, 0xe6],
        "darkblue" => [0x00, 0x00, 0x8b],
        "darkgreen" => [0x00, 0x64, 0x00],
        "lightgreen" => [0x90, 0xee, 0x90],
        "darkred" => [0x8b, 0x00, 0x00],
        "salmon" => [0xfa, 0x80, 0x72],
        "tomato" => [0xff, 0x63, 0x47],
        "coral" => [0xff, 0x7f, 0x50],
        "khaki" => [0xf0, 0xe6, 0x8c],
        "beige" => [0xf5, 0xf5, 0xdc],
        "ivory" => [0xff, 0xff, 0xf0],
        "turquoise" => [0x40, 0xe0, 0xd0],
        "steelblue" => [0x46, 0x82, 0xb4],
        "royalblue" => [0x41, 0x69, 0xe1],
        _ => return None,
    };
    Some(rgb)
}
