//! Double-buffered, fixed-shape storage for per-cell values.
//!
//! A `GridField<T>` owns two contiguous buffers of `cell_count` values:
//! the *active* buffer, which readers and the GPU upload path see, and a
//! *back* buffer that an iterative update can compute into before
//! publishing it with [`GridField::swap`]. Both buffers always have the
//! same length and the shape never changes after construction.

use std::ops::{Index, IndexMut};

use bytemuck::Pod;

use crate::error::{FieldError, Result};
use crate::types::Shape2D;

/// Selects one of the two buffers of a [`GridField`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferSlot {
    /// The published buffer returned by [`GridField::data`].
    #[default]
    Active,
    /// The scratch buffer returned by [`GridField::back_buffer`].
    Back,
}

/// Fixed-shape grid of `T` with an active and a back buffer.
///
/// `T: Pod` keeps the active buffer viewable as raw bytes
/// ([`as_bytes`](Self::as_bytes)) and gives every element type a
/// well-defined all-zero value, which is what construction and
/// [`clear`](Self::clear) write.
///
/// # Example
///
/// ```
/// use gridfield::field::ScalarField;
///
/// let mut f = ScalarField::new(4, 3);
/// f.set(1, 2, 5.0);
/// assert_eq!(f.data()[2 * 4 + 1], 5.0);
///
/// // Compute into the back buffer, then publish
/// f.back_buffer_mut().fill(1.0);
/// f.swap();
/// assert!(f.data().iter().all(|&v| v == 1.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridField<T> {
    shape: Shape2D,
    active: Vec<T>,
    back: Vec<T>,
}

impl<T: Pod> GridField<T> {
    /// Allocate a zero-filled field of `width × height` cells.
    ///
    /// # Panics
    ///
    /// Panics if the field would have no cells.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(field) => field,
            Err(e) => panic!("{e}"),
        }
    }

    /// Allocate a zero-filled field, reporting an empty shape.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        Shape2D::try_new(width, height).map(Self::with_shape)
    }

    /// Allocate a zero-filled field of the given shape.
    pub fn with_shape(shape: Shape2D) -> Self {
        let n = shape.cell_count();
        Self {
            shape,
            active: vec![T::zeroed(); n],
            back: vec![T::zeroed(); n],
        }
    }

    /// Wrap existing values as the active buffer; the back buffer is zeroed.
    ///
    /// `data` must hold exactly one value per cell, in `y * nx + x` order.
    pub fn from_vec(shape: Shape2D, data: Vec<T>) -> Result<Self> {
        if data.len() != shape.cell_count() {
            return Err(FieldError::LengthMismatch {
                expected: shape.cell_count(),
                actual: data.len(),
            });
        }
        Ok(Self::from_active(shape, data))
    }

    /// Build a field by evaluating `f(x, y)` at every cell.
    ///
    /// # Panics
    ///
    /// Panics if the field would have no cells.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let shape = Shape2D::new(width, height);
        let mut active = Vec::with_capacity(shape.cell_count());
        for y in 0..shape.ny() {
            for x in 0..shape.nx() {
                active.push(f(x, y));
            }
        }
        Self::from_active(shape, active)
    }

    pub(crate) fn from_active(shape: Shape2D, active: Vec<T>) -> Self {
        debug_assert_eq!(active.len(), shape.cell_count());
        let back = vec![T::zeroed(); active.len()];
        Self {
            shape,
            active,
            back,
        }
    }

    /// Grid shape.
    #[inline]
    pub fn shape(&self) -> Shape2D {
        self.shape
    }

    /// Number of cells in x-direction.
    #[inline]
    pub fn width(&self) -> usize {
        self.shape.nx()
    }

    /// Number of cells in y-direction.
    #[inline]
    pub fn height(&self) -> usize {
        self.shape.ny()
    }

    /// Number of cells (length of each buffer).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.active.len()
    }

    /// Size of one buffer in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of_val(self.active.as_slice())
    }

    /// Active buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.active
    }

    /// Active buffer, mutable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.active
    }

    /// Back buffer.
    #[inline]
    pub fn back_buffer(&self) -> &[T] {
        &self.back
    }

    /// Back buffer, mutable.
    #[inline]
    pub fn back_buffer_mut(&mut self) -> &mut [T] {
        &mut self.back
    }

    /// Raw bytes of the active buffer, for texture / vertex buffer upload.
    ///
    /// The view stays valid and unchanged until a mutating method is called.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.active)
    }

    /// Value at cell `(x, y)` of the active buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.active[self.shape.index(x, y)]
    }

    /// Write cell `(x, y)` of the active buffer.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let i = self.shape.index(x, y);
        self.active[i] = value;
    }

    /// Iterate over the active buffer as `(x, y, value)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let shape = self.shape;
        self.active.iter().enumerate().map(move |(i, v)| {
            let (x, y) = shape.coords(i);
            (x, y, v)
        })
    }

    /// Broadcast `value` to every cell of the active buffer.
    pub fn fill(&mut self, value: T) {
        self.fill_slot(value, BufferSlot::Active);
    }

    /// Broadcast `value` to every cell of the selected buffer.
    pub fn fill_slot(&mut self, value: T, slot: BufferSlot) {
        self.buffer_mut(slot).fill(value);
    }

    /// Zero every cell of the active buffer.
    pub fn clear(&mut self) {
        self.clear_slot(BufferSlot::Active);
    }

    /// Zero every cell of the selected buffer.
    ///
    /// Writes `T::zeroed()` per cell; for `f32` and `Vec2` the all-zero bit
    /// pattern is the logical zero.
    pub fn clear_slot(&mut self, slot: BufferSlot) {
        bytemuck::fill_zeroes(self.buffer_mut(slot));
    }

    /// Exchange the active and back buffers without copying.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.active, &mut self.back);
        log::trace!("swapped buffers of {} field", self.shape);
    }

    /// Copy `other`'s active buffer into this field's active buffer.
    ///
    /// # Panics
    ///
    /// Panics if the cell counts differ; nothing is written in that case.
    pub fn copy_from(&mut self, other: &GridField<T>) {
        if let Err(e) = self.try_copy_from(other) {
            panic!("{e}");
        }
    }

    /// Copy `other`'s active buffer into this field's active buffer,
    /// reporting a cell count mismatch instead of panicking.
    pub fn try_copy_from(&mut self, other: &GridField<T>) -> Result<()> {
        if other.cell_count() != self.cell_count() {
            return Err(FieldError::SizeMismatch {
                expected: self.cell_count(),
                actual: other.cell_count(),
            });
        }
        self.active.copy_from_slice(&other.active);
        log::trace!("copied {} cells from {} field", self.cell_count(), other.shape);
        Ok(())
    }

    fn buffer_mut(&mut self, slot: BufferSlot) -> &mut [T] {
        match slot {
            BufferSlot::Active => &mut self.active,
            BufferSlot::Back => &mut self.back,
        }
    }
}

impl<T: Pod> Index<(usize, usize)> for GridField<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.active[self.shape.index(x, y)]
    }
}

impl<T: Pod> IndexMut<(usize, usize)> for GridField<T> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        let i = self.shape.index(x, y);
        &mut self.active[i]
    }
}
