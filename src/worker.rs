use log::debug;

use crate::channel::{Channel, ExchangeError};
use crate::matrix::{self, Matrix};
use crate::plan::Plan;
use crate::{Shape, FORWARD_TAG, RESULT_TAG, ROOT_RANK};

/// The worker side of the exchange: receive the full B and this rank's A
/// band from the root, multiply, send the C band back.
///
/// The shape header arrives first; a worker whose own configuration
/// disagrees with it bails out before touching any matrix data. A rank whose
/// assigned band is empty still participates (it receives B and the header)
/// and completes without sending a result buffer.
pub fn worker_workflow<C: Channel>(channel: &C, shape: Shape) -> Result<(), ExchangeError> {
    let plan = Plan::new(shape.a_rows, channel.size() as usize);
    let band = plan.worker_range(channel.rank() as usize);

    let mut header = [0u64; 3];
    channel.recv(&mut header, ROOT_RANK, FORWARD_TAG)?;
    if header != shape.header() {
        return Err(ExchangeError::ShapeMismatch {
            local: shape.header(),
            remote: header,
        });
    }

    let mut b = Matrix::zeros(shape.inner, shape.b_cols);
    channel.recv(b.as_mut_slice(), ROOT_RANK, FORWARD_TAG)?;

    let mut a_band = Matrix::zeros(band.count, shape.inner);
    channel.recv(a_band.as_mut_slice(), ROOT_RANK, FORWARD_TAG)?;
    debug!(
        "rank {} received rows [{}, {})",
        channel.rank(),
        band.start,
        band.end()
    );

    let mut c_band = Matrix::zeros(band.count, shape.b_cols);
    matrix::multiply_band(a_band.as_slice(), &b, c_band.as_mut_slice());

    channel.send(c_band.as_slice(), ROOT_RANK, RESULT_TAG)?;
    debug!("rank {} reported its result band", channel.rank());

    Ok(())
}
