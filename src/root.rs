use log::{debug, info};

use crate::channel::{Channel, ExchangeError};
use crate::matrix::{self, Matrix};
use crate::plan::Plan;
use crate::{Shape, FORWARD_TAG, RESULT_TAG};

/// The overall work of the root process: generate the inputs, distribute
/// row bands of A plus the full B to the workers, collect their C bands and
/// multiply the leftover tail locally.
///
/// With no workers in the system, everything is computed locally.
///
/// * `channel`: message-passing channel to the workers.
/// * `shape`: matrix dimensions shared by every rank.
pub fn root_workflow<C: Channel>(channel: &C, shape: Shape) -> Result<Matrix, ExchangeError> {
    let a = Matrix::random(shape.a_rows, shape.inner, 1.5..10.5);
    let b = Matrix::random(shape.inner, shape.b_cols, 2.5..22.5);

    let plan = Plan::new(shape.a_rows, channel.size() as usize);
    distribute_and_collect(channel, &plan, &a, &b)
}

/// Runs the coordinator side of the exchange with the given inputs: one
/// shape header, the full B and the assigned A band go out to each worker in
/// rank order, then the C bands come back in the same order, each received
/// straight into its offset of the full C buffer. The leftover band is
/// multiplied here after all results are in.
///
/// * `plan`: row partition; must be built from the same process count the
///   workers see.
/// * `a`: full left input, `plan.total_rows()` rows.
/// * `b`: full right input.
pub fn distribute_and_collect<C: Channel>(
    channel: &C,
    plan: &Plan,
    a: &Matrix,
    b: &Matrix,
) -> Result<Matrix, ExchangeError> {
    let mut c = Matrix::zeros(a.rows(), b.cols());
    let header = Shape {
        a_rows: a.rows(),
        inner: a.cols(),
        b_cols: b.cols(),
    }
    .header();

    info!(
        "distributing {} rows to each of {} workers",
        plan.rows_per_worker(),
        plan.workers()
    );

    for rank in 1..=plan.workers() {
        let band = plan.worker_range(rank);
        channel.send(&header, rank as i32, FORWARD_TAG)?;
        channel.send(b.as_slice(), rank as i32, FORWARD_TAG)?;
        channel.send(a.row_band(band), rank as i32, FORWARD_TAG)?;
        debug!("sent rows [{}, {}) to rank {rank}", band.start, band.end());
    }

    for rank in 1..=plan.workers() {
        let band = plan.worker_range(rank);
        channel.recv(c.row_band_mut(band), rank as i32, RESULT_TAG)?;
        debug!(
            "collected rows [{}, {}) from rank {rank}",
            band.start,
            band.end()
        );
    }

    let leftover = plan.coordinator_range();
    info!(
        "multiplying leftover rows [{}, {}) locally",
        leftover.start,
        leftover.end()
    );
    matrix::multiply_band(a.row_band(leftover), b, c.row_band_mut(leftover));

    Ok(c)
}
