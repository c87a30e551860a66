//! Row-space partitioning: which contiguous band of A/C each rank owns.

/// A contiguous band of matrix rows owned by exactly one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub count: usize,
}

impl RowRange {
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Pure partitioning of `total_rows` rows of A across `procs` processes.
///
/// The row count is divided by the *total* process count (coordinator
/// included): every worker gets `total_rows / procs` rows, and the
/// coordinator absorbs its own share plus the remainder. The coordinator's
/// band starts at `rows_per_worker * (procs - 1)`, which provably equals the
/// `L - (rows + extra)` form (with `L = rows*W + extra` the two expressions
/// are identical) and by construction leaves no gap after the last worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    total_rows: usize,
    procs: usize,
    rows_per_worker: usize,
}

impl Plan {
    /// * `total_rows`: row count of A (and C).
    /// * `procs`: total process count, coordinator included. Must be >= 1.
    pub fn new(total_rows: usize, procs: usize) -> Self {
        assert!(procs >= 1, "need at least the coordinator process");
        Plan {
            total_rows,
            procs,
            rows_per_worker: total_rows / procs,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Number of worker processes (may be zero).
    pub fn workers(&self) -> usize {
        self.procs - 1
    }

    pub fn rows_per_worker(&self) -> usize {
        self.rows_per_worker
    }

    /// Band owned by the worker at `rank` (1 <= rank < procs).
    ///
    /// When `total_rows < procs` the band is empty; an empty band is a valid
    /// assignment, not an error.
    pub fn worker_range(&self, rank: usize) -> RowRange {
        assert!(
            rank >= 1 && rank < self.procs,
            "rank {rank} is not a worker rank"
        );
        RowRange {
            start: self.rows_per_worker * (rank - 1),
            count: self.rows_per_worker,
        }
    }

    /// Leftover band the coordinator multiplies itself: everything after the
    /// last worker's band, i.e. `rows_per_worker + total_rows % procs` rows.
    /// With no workers this is the whole matrix.
    pub fn coordinator_range(&self) -> RowRange {
        let start = self.rows_per_worker * (self.procs - 1);
        RowRange {
            start,
            count: self.total_rows - start,
        }
    }
}
