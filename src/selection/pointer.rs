//! Pointer coordinates.

/// Pointer position in normalized device coordinates.
///
/// Both axes run from -1 to 1 across the interactive surface, with +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerCoords {
    pub x: f32,
    pub y: f32,
}

impl PointerCoords {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalize a pixel position given the surface's top-left corner and size.
    ///
    /// ```rust
    /// use menuflow::selection::PointerCoords;
    ///
    /// let centre = PointerCoords::from_client(356.0, 356.0, 100.0, 100.0, 512.0, 512.0);
    /// assert_eq!(centre, PointerCoords::new(0.0, 0.0));
    /// ```
    pub fn from_client(
        client_x: f32,
        client_y: f32,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            x: ((client_x - left) / width) * 2.0 - 1.0,
            y: -((client_y - top) / height) * 2.0 + 1.0,
        }
    }

    /// Scene position for a view that spans `half_extent` units from its centre.
    pub fn to_scene(self, half_extent: f32) -> (f32, f32) {
        (self.x * half_extent, self.y * half_extent)
    }

    pub fn from_scene(x: f32, y: f32, half_extent: f32) -> Self {
        Self {
            x: x / half_extent,
            y: y / half_extent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        let top_left = PointerCoords::from_client(0.0, 0.0, 0.0, 0.0, 512.0, 512.0);
        let bottom_right = PointerCoords::from_client(512.0, 512.0, 0.0, 0.0, 512.0, 512.0);

        assert_eq!(top_left, PointerCoords::new(-1.0, 1.0));
        assert_eq!(bottom_right, PointerCoords::new(1.0, -1.0));
    }

    #[test]
    fn scene_mapping_inverts() {
        let pointer = PointerCoords::new(0.5, -0.25);
        let (x, y) = pointer.to_scene(200.0);

        assert_eq!((x, y), (100.0, -50.0));
        assert_eq!(PointerCoords::from_scene(x, y, 200.0), pointer);
    }
}
