//! Pixel rectangles.

/// An axis-aligned pixel rectangle with exclusive right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Bounds {
    pub const fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Grow the rectangle to include the pixel at (x, y).
    pub fn include(&mut self, x: u32, y: u32) {
        self.x1 = self.x1.min(x);
        self.y1 = self.y1.min(y);
        self.x2 = self.x2.max(x + 1);
        self.y2 = self.y2.max(y + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let b = Bounds::new(2, 3, 10, 7);
        assert_eq!(b.width(), 8);
        assert_eq!(b.height(), 4);
    }

    #[test]
    fn test_inverted_edges_have_zero_size() {
        let b = Bounds::new(4, 5, 3, 5);
        assert_eq!((b.width(), b.height()), (0, 0));
    }

    #[test]
    fn test_include_grows() {
        let mut b = Bounds::new(5, 5, 6, 6);
        b.include(2, 8);
        assert_eq!(b, Bounds::new(2, 5, 6, 9));
    }
}
