use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GridSizeError {
    #[error("grid size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Resolution of a sampled field. An axis with a single sample has no step;
/// its only sample sits on the lower parameter bound.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major index of `point`, or `None` outside the grid.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.contains_point(point)
            .then(|| point.y as usize * self.width as usize + point.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_new_valid() {
        let size = GridSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.len(), 480_000);
        assert!(!size.is_empty());
    }

    #[test]
    fn test_grid_size_must_be_positive() {
        assert_eq!(
            GridSize::new(0, 0),
            Err(GridSizeError::InvalidSize { width: 0, height: 0 })
        );
        assert_eq!(
            GridSize::new(10, 0),
            Err(GridSizeError::InvalidSize { width: 10, height: 0 })
        );
        assert_eq!(
            GridSize::new(0, 10),
            Err(GridSizeError::InvalidSize { width: 0, height: 10 })
        );
        assert!(GridSize::new(1, 1).is_ok());
        assert!(GridSize::new(2, 1).is_ok());
    }

    #[test]
    fn test_grid_size_contains_point() {
        let size = GridSize::new(4, 3).unwrap();

        assert!(size.contains_point(Point { x: 0, y: 0 }));
        assert!(size.contains_point(Point { x: 3, y: 2 }));
        assert!(!size.contains_point(Point { x: 4, y: 0 }));
        assert!(!size.contains_point(Point { x: 0, y: 3 }));
    }

    #[test]
    fn test_grid_size_index_is_row_major() {
        let size = GridSize::new(4, 3).unwrap();

        assert_eq!(size.index_of(Point { x: 0, y: 0 }), Some(0));
        assert_eq!(size.index_of(Point { x: 3, y: 0 }), Some(3));
        assert_eq!(size.index_of(Point { x: 0, y: 1 }), Some(4));
        assert_eq!(size.index_of(Point { x: 3, y: 2 }), Some(11));
        assert_eq!(size.index_of(Point { x: 4, y: 2 }), None);
    }
}
