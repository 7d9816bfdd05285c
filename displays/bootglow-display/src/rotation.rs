//! Screen rotation
//!
//! Drawing happens in logical coordinates. The mapping below turns them
//! into physical framebuffer coordinates; for 90 and 270 degrees the
//! logical width and height are the physical ones swapped.

/// Display rotation, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Parse a rotation from degrees, only right angles are accepted
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Whether logical and physical dimensions are transposed
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Logical size for a physical size
    pub fn logical_size(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Map a logical coordinate to a physical one
    ///
    /// `(x, y)` must lie inside the logical area `lw` x `lh`.
    pub fn map(self, x: u32, y: u32, lw: u32, lh: u32) -> (u32, u32) {
        match self {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (y, lw - x - 1),
            Rotation::Deg180 => (lw - x - 1, lh - y - 1),
            Rotation::Deg270 => (lh - y - 1, x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    #[test]
    fn test_degrees() {
        for rotation in ALL {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Some(rotation));
        }
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::from_degrees(360), None);
    }

    #[test]
    fn test_logical_size() {
        assert_eq!(Rotation::Deg0.logical_size(800, 480), (800, 480));
        assert_eq!(Rotation::Deg90.logical_size(800, 480), (480, 800));
        assert_eq!(Rotation::Deg180.logical_size(800, 480), (800, 480));
        assert_eq!(Rotation::Deg270.logical_size(800, 480), (480, 800));
    }

    #[test]
    fn test_corners() {
        // Physical 4x2, so 90/270 have a 2x4 logical area
        assert_eq!(Rotation::Deg90.map(0, 0, 2, 4), (0, 1));
        assert_eq!(Rotation::Deg90.map(1, 3, 2, 4), (3, 0));
        assert_eq!(Rotation::Deg180.map(0, 0, 4, 2), (3, 1));
        assert_eq!(Rotation::Deg270.map(0, 0, 2, 4), (3, 0));
        assert_eq!(Rotation::Deg270.map(1, 3, 2, 4), (0, 1));
    }

    proptest! {
        #[test]
        fn prop_mapping_is_bijective(pw in 1u32..24, ph in 1u32..24) {
            for rotation in ALL {
                let (lw, lh) = rotation.logical_size(pw, ph);
                let mut seen = HashSet::new();
                for y in 0..lh {
                    for x in 0..lw {
                        let (px, py) = rotation.map(x, y, lw, lh);
                        prop_assert!(px < pw && py < ph);
                        prop_assert!(seen.insert((px, py)));
                    }
                }
                prop_assert_eq!(seen.len() as u32, pw * ph);
            }
        }

        #[test]
        fn prop_zero_is_identity(x in 0u32..1000, y in 0u32..1000) {
            prop_assert_eq!(Rotation::Deg0.map(x, y, 1000, 1000), (x, y));
        }
    }
}
