//! Region geometry: the 27 fixed nine-cell groups a board is checked against.

/// The three kinds of region. Every cell belongs to exactly one of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionKind {
    Row,
    Col,
    Box,
}

impl RegionKind {
    pub(crate) fn index(self) -> usize {
        match self {
            RegionKind::Row => 0,
            RegionKind::Col => 1,
            RegionKind::Box => 2,
        }
    }
}

/// Index of the 3x3 box containing `(r, c)`.
pub fn box_index(r: usize, c: usize) -> usize {
    (r / 3) * 3 + (c / 3)
}

/// The 9 coordinates making up row `r`, in a fixed order.
pub fn row_cells(r: usize) -> [(usize, usize); 9] {
    core::array::from_fn(|c| (r, c))
}

/// The 9 coordinates making up column `c`, in a fixed order.
pub fn col_cells(c: usize) -> [(usize, usize); 9] {
    core::array::from_fn(|r| (r, c))
}

/// The 9 coordinates making up box `box_idx` (0..9, left-to-right, top-to-bottom).
pub fn box_cells(box_idx: usize) -> [(usize, usize); 9] {
    let start_row = (box_idx / 3) * 3;
    let start_col = (box_idx % 3) * 3;
    core::array::from_fn(|i| (start_row + i / 3, start_col + i % 3))
}

/// The 9 cells of region `(kind, idx)`.
pub fn region_cells(kind: RegionKind, idx: usize) -> [(usize, usize); 9] {
    match kind {
        RegionKind::Row => row_cells(idx),
        RegionKind::Col => col_cells(idx),
        RegionKind::Box => box_cells(idx),
    }
}

/// Position (0..9) of `(r, c)` within region `(kind, idx)`'s fixed cell ordering.
pub fn position_in_region(kind: RegionKind, idx: usize, r: usize, c: usize) -> usize {
    match kind {
        RegionKind::Row => c,
        RegionKind::Col => r,
        RegionKind::Box => {
            let start_row = (idx / 3) * 3;
            let start_col = (idx % 3) * 3;
            (r - start_row) * 3 + (c - start_col)
        }
    }
}

/// The `(kind, region_index)` of all three regions containing `(r, c)`.
pub fn regions_containing(r: usize, c: usize) -> [(RegionKind, usize); 3] {
    [
        (RegionKind::Row, r),
        (RegionKind::Col, c),
        (RegionKind::Box, box_index(r, c)),
    ]
}

/// All 27 regions on the board, each as its 9 cell coordinates.
pub fn all_regions() -> impl Iterator<Item = [(usize, usize); 9]> {
    (0..9)
        .map(row_cells)
        .chain((0..9).map(col_cells))
        .chain((0..9).map(box_cells))
}
