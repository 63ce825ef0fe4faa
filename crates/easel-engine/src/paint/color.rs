use std::fmt;

use super::named;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

/// Error returned by [`Color::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name \"{}\"", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl Color {
    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied linear color from straight sRGB bytes (`0`–`255`).
    ///
    /// The sRGB transfer function is removed so the value blends correctly on an
    /// sRGB surface.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
            a as f32 / 255.0,
        )
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha linear components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Parses a toolkit color spec.
    ///
    /// Accepted forms:
    /// - `#rgb`, `#rrggbb`, `#rrrrggggbbbb` (4, 8 or 16 bits per channel)
    /// - a color name such as `"blue"` or `"Light Gray"` (case and spaces ignored)
    pub fn parse(spec: &str) -> Result<Self, ColorParseError> {
        let spec = spec.trim();
        let err = || ColorParseError(spec.to_string());

        if let Some(hex) = spec.strip_prefix('#') {
            let [r, g, b] = parse_hex(hex).ok_or_else(err)?;
            return Ok(Self::from_srgb_u8(r, g, b, 255));
        }

        let key: String = spec
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        let [r, g, b] = named::lookup(&key).ok_or_else(err)?;
        Ok(Self::from_srgb_u8(r, g, b, 255))
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Keeps the most significant byte of each channel.
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digits = match hex.len() {
        3 | 6 | 9 | 12 => hex.len() / 3,
        _ => return None,
    };

    let mut out = [0u8; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        let chunk = &hex[i * digits..(i + 1) * digits];
        let v = u16::from_str_radix(chunk, 16).ok()?;
        *slot = match digits {
            1 => (v as u8) * 0x11,
            2 => v as u8,
            3 => (v >> 4) as u8,
            _ => (v >> 8) as u8,
        };
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn parse_short_hex() {
        assert_eq!(Color::parse("#fff"), Ok(Color::white()));
        assert_eq!(Color::parse("#000"), Ok(Color::black()));
    }

    #[test]
    fn parse_long_hex_matches_name() {
        assert_eq!(Color::parse("#0000ff"), Color::parse("blue"));
        assert_eq!(Color::parse("#00000000ffff"), Color::parse("blue"));
    }

    #[test]
    fn parse_rejects_bad_hex() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gg0000").is_err());
        assert!(Color::parse("#").is_err());
    }

    // ── names ─────────────────────────────────────────────────────────────

    #[test]
    fn names_are_case_and_space_insensitive() {
        assert_eq!(Color::parse("Light Gray"), Color::parse("lightgray"));
        assert_eq!(Color::parse("ORANGE"), Color::parse("orange"));
    }

    #[test]
    fn green_uses_web_value() {
        // green is #008000, not #00ff00.
        let green = Color::parse("green").unwrap();
        assert!(approx(green.r, 0.0));
        assert!(approx(green.g, srgb_to_linear(128.0 / 255.0)));
        assert!(approx(green.b, 0.0));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = Color::parse("notacolor").unwrap_err();
        assert_eq!(err.to_string(), "unknown color name \"notacolor\"");
    }

    // ── transfer ──────────────────────────────────────────────────────────

    #[test]
    fn srgb_mid_gray_is_darker_in_linear() {
        let c = Color::from_srgb_u8(128, 128, 128, 255);
        assert!(c.r > 0.2 && c.r < 0.23);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
        let (r, g, _, a) = c.to_straight();
        assert!(approx(r, 1.0) && approx(g, 0.5) && approx(a, 0.5));
    }
}
