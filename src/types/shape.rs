//! 2D grid shape and the canonical cell-to-offset mapping.

use std::fmt;

use crate::error::{FieldError, Result};
use crate::types::{CellRegion, Corner};

/// Extent of a cell-centred 2D grid.
///
/// Cell `(x, y)` with `0 <= x < nx` and `0 <= y < ny` lives at linear
/// offset `y * nx + x`. Every field and operator in the crate uses this
/// mapping, so a scalar and a vector field of the same shape address the
/// same cell with the same index.
///
/// # Example
///
/// ```
/// use gridfield::types::Shape2D;
///
/// let shape = Shape2D::new(4, 3);
/// assert_eq!(shape.cell_count(), 12);
/// assert_eq!(shape.index(1, 2), 9);
/// assert_eq!(shape.coords(9), (1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shape2D {
    /// Number of cells in x-direction (row length)
    nx: usize,
    /// Number of cells in y-direction (row count)
    ny: usize,
}

impl Shape2D {
    /// Create a new grid shape.
    ///
    /// # Panics
    ///
    /// Panics if either extent is zero or `nx * ny` overflows.
    pub fn new(nx: usize, ny: usize) -> Self {
        match Self::try_new(nx, ny) {
            Ok(shape) => shape,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a new grid shape, reporting zero or overflowing extents.
    pub fn try_new(nx: usize, ny: usize) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(FieldError::EmptyShape { nx, ny });
        }
        if nx.checked_mul(ny).is_none() {
            return Err(FieldError::ShapeOverflow { nx, ny });
        }
        Ok(Self { nx, ny })
    }

    /// Create a square shape (same extent in both directions).
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Number of cells in x-direction.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of cells in y-direction.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Linear offset of cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.nx && y < self.ny, "cell ({x}, {y}) outside {self}");
        y * self.nx + x
    }

    /// Inverse of [`index`](Self::index): linear offset to `(x, y)`.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.nx, index / self.nx)
    }

    /// Whether `(x, y)` lies on the grid.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.nx && y < self.ny
    }

    /// Whether the grid is large enough for the edge/interior/corner
    /// stencils, i.e. every region's open interval is non-empty.
    #[inline]
    pub fn supports_stencil(&self) -> bool {
        self.nx >= 3 && self.ny >= 3
    }

    /// Whether `(x, y)` is on the outermost ring of cells.
    #[inline]
    pub fn is_boundary(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.nx || y + 1 == self.ny
    }

    /// Classify a cell by the stencil that applies to it.
    ///
    /// `y = 0` is the top row. Edge checks come first and exclude the
    /// corners, which are reported separately.
    pub fn region(&self, x: usize, y: usize) -> CellRegion {
        let x_inner = x > 0 && x + 1 < self.nx;
        let y_inner = y > 0 && y + 1 < self.ny;

        if y == 0 && x_inner {
            CellRegion::Top
        } else if y + 1 == self.ny && x_inner {
            CellRegion::Bottom
        } else if x == 0 && y_inner {
            CellRegion::Left
        } else if x + 1 == self.nx && y_inner {
            CellRegion::Right
        } else if x_inner && y_inner {
            CellRegion::Interior
        } else {
            let corner = match (x == 0, y == 0) {
                (true, true) => Corner::TopLeft,
                (false, true) => Corner::TopRight,
                (true, false) => Corner::BottomLeft,
                (false, false) => Corner::BottomRight,
            };
            CellRegion::Corner(corner)
        }
    }

    /// Return as tuple (nx, ny).
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }
}

impl fmt::Display for Shape2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.nx, self.ny)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Shape2D {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RawShape {
            nx: usize,
            ny: usize,
        }

        let raw = RawShape::deserialize(deserializer)?;
        Self::try_new(raw.nx, raw.ny).map_err(serde::de::Error::custom)
    }
}

impl From<(usize, usize)> for Shape2D {
    fn from((nx, ny): (usize, usize)) -> Self {
        Self::new(nx, ny)
    }
}

impl From<Shape2D> for (usize, usize) {
    fn from(shape: Shape2D) -> Self {
        (shape.nx, shape.ny)
    }
}
