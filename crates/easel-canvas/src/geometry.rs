use std::fmt;
use std::str::FromStr;

/// Window geometry in Tk's `WIDTHxHEIGHT[+X+Y]` form, in logical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    /// Screen position of the window's top-left corner, when given.
    pub position: Option<(i32, i32)>,
}

/// Error returned by [`Geometry::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    Empty,
    /// The string does not follow `WxH[+X+Y]`.
    Malformed(String),
    /// Width or height is zero.
    ZeroSize(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Empty => write!(f, "empty geometry string"),
            GeometryError::Malformed(s) => {
                write!(f, "bad geometry specifier \"{s}\" (expected WxH or WxH+X+Y)")
            }
            GeometryError::ZeroSize(s) => write!(f, "geometry \"{s}\" has zero width or height"),
        }
    }
}

impl std::error::Error for GeometryError {}

impl Geometry {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height, position: None }
    }

    pub fn parse(spec: &str) -> Result<Self, GeometryError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(GeometryError::Empty);
        }
        let malformed = || GeometryError::Malformed(spec.to_string());

        let (size, offsets) = match spec.find('+') {
            Some(i) => (&spec[..i], Some(&spec[i + 1..])),
            None => (spec, None),
        };

        let (w, h) = size.split_once(['x', 'X']).ok_or_else(malformed)?;
        let width: u32 = w.parse().map_err(|_| malformed())?;
        let height: u32 = h.parse().map_err(|_| malformed())?;
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroSize(spec.to_string()));
        }

        // Offsets are `+X+Y`; a value may itself be negative (`+-5+10`).
        let position = match offsets {
            None => None,
            Some(rest) => {
                let (x, y) = rest.split_once('+').ok_or_else(malformed)?;
                let x: i32 = x.parse().map_err(|_| malformed())?;
                let y: i32 = y.parse().map_err(|_| malformed())?;
                Some((x, y))
            }
        };

        Ok(Self { width, height, position })
    }
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Geometry::parse(s)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if let Some((x, y)) = self.position {
            write!(f, "+{x}+{y}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_only() {
        assert_eq!(Geometry::parse("450x300"), Ok(Geometry::new(450, 300)));
    }

    #[test]
    fn size_with_position() {
        let g = Geometry::parse("450x300+20+40").unwrap();
        assert_eq!(g.position, Some((20, 40)));
        assert_eq!(g.to_string(), "450x300+20+40");
    }

    #[test]
    fn negative_offset_value() {
        let g: Geometry = "10x10+-5+7".parse().unwrap();
        assert_eq!(g.position, Some((-5, 7)));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Geometry::parse(" 450x300 "), Ok(Geometry::new(450, 300)));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["450", "450x", "x300", "450x300+20", "axb", "450*300"] {
            assert!(
                matches!(Geometry::parse(bad), Err(GeometryError::Malformed(_))),
                "{bad} should be malformed"
            );
        }
    }

    #[test]
    fn rejects_empty_and_zero() {
        assert_eq!(Geometry::parse(""), Err(GeometryError::Empty));
        assert!(matches!(Geometry::parse("0x300"), Err(GeometryError::ZeroSize(_))));
    }
}
