use std::collections::VecDeque;

use crate::CellSize;

/// The port through which the engine reads geometry and reorders content.
///
/// A host is the scroll container plus its cell collection: it owns the content offset, the
/// content extent and the cells themselves. The engine never keeps a cell beyond a single
/// call; cells only pass through `push`/`pop`/`unshift_front`/`shift_front`.
///
/// Offsets follow the usual anchored-position convention: the content sits at `0.0` when the
/// first cell is aligned with the viewport start and moves toward negative x as the index
/// grows, so index `i` rests at `-cell_width * i`.
pub trait SnapHost {
    type Cell;

    fn cell_size(&self) -> CellSize;
    fn viewport_width(&self) -> f32;

    fn content_offset(&self) -> f32;
    fn set_content_offset(&mut self, offset: f32);
    /// Called with `cell_width * cell_count` whenever the collection length changes.
    fn set_content_width(&mut self, width: f32);

    fn cell_count(&self) -> usize;
    fn push_cell(&mut self, cell: Self::Cell);
    fn pop_cell(&mut self) -> Option<Self::Cell>;
    fn unshift_cell(&mut self, cell: Self::Cell);
    fn shift_cell(&mut self) -> Option<Self::Cell>;
    fn move_last_to_first(&mut self);
    fn move_first_to_last(&mut self);

    /// Stops any host-side scrolling momentum before the engine takes over the offset.
    fn stop_movement(&mut self) {}
}

/// An in-memory [`SnapHost`] backed by a `VecDeque`.
///
/// Useful for tests, simulations, and hosts that keep their cell models in memory and render
/// from [`Strip::cells`] + [`Strip::content_offset`].
#[derive(Clone, Debug)]
pub struct Strip<C> {
    cells: VecDeque<C>,
    cell_size: CellSize,
    viewport_width: f32,
    content_offset: f32,
    content_width: f32,
}

impl<C> Strip<C> {
    pub fn new(cell_size: CellSize, viewport_width: f32) -> Self {
        Self {
            cells: VecDeque::new(),
            cell_size,
            viewport_width,
            content_offset: 0.0,
            content_width: 0.0,
        }
    }

    pub fn with_cells(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.cells.extend(cells);
        self.content_width = self.cell_size.width() * self.cells.len() as f32;
        self
    }

    pub fn cells(&self) -> &VecDeque<C> {
        &self.cells
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
    }
}

impl<C> SnapHost for Strip<C> {
    type Cell = C;

    fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn content_offset(&self) -> f32 {
        self.content_offset
    }

    fn set_content_offset(&mut self, offset: f32) {
        self.content_offset = offset;
    }

    fn set_content_width(&mut self, width: f32) {
        self.content_width = width;
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn push_cell(&mut self, cell: C) {
        self.cells.push_back(cell);
    }

    fn pop_cell(&mut self) -> Option<C> {
        self.cells.pop_back()
    }

    fn unshift_cell(&mut self, cell: C) {
        self.cells.push_front(cell);
    }

    fn shift_cell(&mut self) -> Option<C> {
        self.cells.pop_front()
    }

    fn move_last_to_first(&mut self) {
        if let Some(cell) = self.cells.pop_back() {
            self.cells.push_front(cell);
        }
    }

    fn move_first_to_last(&mut self) {
        if let Some(cell) = self.cells.pop_front() {
            self.cells.push_back(cell);
        }
    }
}
