//! Distributed dense matrix multiply C = A×B over point-to-point message
//! passing: rank 0 partitions the row space of A among the other ranks,
//! ships every worker the full B plus its A row-band, collects the C bands
//! and multiplies the leftover tail of rows itself.
//!
//! Run under an MPI launcher, e.g. `mpirun -np 4 matrix-mul-rows`.

pub mod channel;
pub mod matrix;
pub mod plan;
pub mod root;
pub mod worker;

pub type NumberType = f64;

/// Rank of the coordinating process.
pub const ROOT_RANK: i32 = 0;

/// Tag for coordinator-to-worker transmissions (shape header, B, A band).
pub const FORWARD_TAG: i32 = 100;
/// Tag for worker-to-coordinator result transmissions (C band).
pub const RESULT_TAG: i32 = 101;

/// Matrix dimensions shared by every process: A is `a_rows`×`inner`,
/// B is `inner`×`b_cols`, C is `a_rows`×`b_cols`.
///
/// Built once at startup from the command line (mpirun hands every rank the
/// same argv) and passed by value into each component. The coordinator also
/// sends it as a header so a misconfigured worker fails loudly instead of
/// computing garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub a_rows: usize,
    pub inner: usize,
    pub b_cols: usize,
}

impl Shape {
    pub fn header(&self) -> [u64; 3] {
        [self.a_rows as u64, self.inner as u64, self.b_cols as u64]
    }
}
