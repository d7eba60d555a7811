//! Stencil regions of a structured grid.
//!
//! Row `y = 0` is the top edge and column `x = 0` the left edge.

use crate::types::Shape2D;

/// Which finite-difference stencil applies to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellRegion {
    /// Both neighbours exist on both axes.
    Interior,
    /// `y = 0`, excluding corners.
    Top,
    /// `y = ny - 1`, excluding corners.
    Bottom,
    /// `x = 0`, excluding corners.
    Left,
    /// `x = nx - 1`, excluding corners.
    Right,
    /// One of the four extremal cells.
    Corner(Corner),
}

impl CellRegion {
    /// Whether the cell lies on the outer ring.
    pub fn is_boundary(self) -> bool {
        !matches!(self, CellRegion::Interior)
    }
}

/// The four corner cells of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in the order they are resolved.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::TopRight,
        Corner::BottomRight,
    ];

    /// Cell coordinates of this corner.
    pub fn cell(self, shape: Shape2D) -> (usize, usize) {
        let (xr, yb) = (shape.nx() - 1, shape.ny() - 1);
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (xr, 0),
            Corner::BottomLeft => (0, yb),
            Corner::BottomRight => (xr, yb),
        }
    }

    /// The two edge cells adjacent to this corner: the horizontal
    /// neighbour (on the top or bottom edge) and the vertical neighbour
    /// (on the left or right edge).
    ///
    /// Returns `None` unless [`Shape2D::supports_stencil`] holds; on
    /// narrower grids those cells are corners themselves or off the grid.
    pub fn neighbors(self, shape: Shape2D) -> Option<[(usize, usize); 2]> {
        if !shape.supports_stencil() {
            return None;
        }
        let (x, y) = self.cell(shape);
        let x_in = if x == 0 { 1 } else { x - 1 };
        let y_in = if y == 0 { 1 } else { y - 1 };
        Some([(x_in, y), (x, y_in)])
    }
}
