//! Per-cell observation of the distance recurrences.
//!
//! Every general-case computation reports each cell it fills to a
//! [`CellObserver`]. The default [`NoopObserver`] compiles down to nothing;
//! [`LogObserver`] forwards cells to the `log` facade at trace level, and any
//! `FnMut(&CellTrace)` closure can be used to collect cells in tests.

/// The terms that produced one cell of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellTrace {
    pub row: usize,
    pub col: usize,
    /// `0` when the two elements match, `1` otherwise.
    pub substitution_cost: usize,
    pub deletion: usize,
    pub insertion: usize,
    pub substitution: usize,
    /// Only present when the last two elements of both prefixes are swapped.
    pub transposition: Option<usize>,
    /// The minimum that was stored in the cell.
    pub value: usize,
}

pub trait CellObserver {
    fn on_cell(&mut self, cell: &CellTrace);
}

impl<F> CellObserver for F
where
    F: FnMut(&CellTrace),
{
    fn on_cell(&mut self, cell: &CellTrace) {
        self(cell)
    }
}

/// Discards every cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CellObserver for NoopObserver {
    #[inline(always)]
    fn on_cell(&mut self, _cell: &CellTrace) {}
}

/// Emits every cell with `log::trace!` under the `editdistance::trace` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl CellObserver for LogObserver {
    fn on_cell(&mut self, cell: &CellTrace) {
        log::trace!(
            target: "editdistance::trace",
            "[i={},j={},c={},d={},ins={},s={},t={:?},t[i,j]={}]",
            cell.row,
            cell.col,
            cell.substitution_cost,
            cell.deletion,
            cell.insertion,
            cell.substitution,
            cell.transposition,
            cell.value
        );
    }
}
