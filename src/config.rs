use glam::IVec2;

use crate::HullError;

/// Dimensions of the integer grid that points live on.
///
/// Valid cells have `1 <= x <= width` and `1 <= y <= height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    width: i32,
    height: i32,
}

impl GridConfig {
    /// A `width` by `height` grid.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::InvalidGrid`] unless both sides are at least one.
    pub const fn new(width: i32, height: i32) -> Result<Self, HullError> {
        if width < 1 || height < 1 {
            return Err(HullError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    /// An `n` by `n` grid.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::InvalidGrid`] if `n` is less than one.
    #[inline]
    pub const fn square(n: i32) -> Result<Self, HullError> {
        Self::new(n, n)
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` if `cell` lies on the grid.
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        (1..=self.width).contains(&cell.x) && (1..=self.height).contains(&cell.y)
    }

    /// Number of cells on the grid.
    #[inline]
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
        }
    }
}

#[cfg(test)]
mod test {
    use glam::ivec2;

    use super::*;

    #[test]
    fn bounds_are_one_based() {
        let grid = GridConfig::new(4, 3).unwrap();
        assert!(grid.contains(ivec2(1, 1)));
        assert!(grid.contains(ivec2(4, 3)));
        assert!(!grid.contains(ivec2(0, 1)));
        assert!(!grid.contains(ivec2(5, 3)));
        assert!(!grid.contains(ivec2(4, 4)));
        assert_eq!(grid.area(), 12);
    }

    #[test]
    fn default_grid() {
        assert_eq!(GridConfig::default(), GridConfig::square(30).unwrap());
    }

    #[test]
    fn rejects_empty_sides() {
        assert_eq!(
            GridConfig::new(0, 5),
            Err(HullError::InvalidGrid {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            GridConfig::square(-3),
            Err(HullError::InvalidGrid {
                width: -3,
                height: -3
            })
        );
    }

    #[test]
    fn largest_grid_area_fits() {
        let grid = GridConfig::square(i32::MAX).unwrap();
        assert_eq!(grid.area(), i64::from(i32::MAX) * i64::from(i32::MAX));
        assert!(grid.contains(ivec2(i32::MAX, i32::MAX)));
    }
}
