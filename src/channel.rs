use mpi::topology::SimpleCommunicator;
use mpi::traits::*;
use thiserror::Error;

/// Failure of the coordinator/worker exchange. All variants are fatal for
/// the run; there is no retry or partial-result path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("channel transfer failed: {0}")]
    Channel(String),
    #[error("matrix shape disagrees with coordinator: local {local:?}, coordinator {remote:?}")]
    ShapeMismatch { local: [u64; 3], remote: [u64; 3] },
}

/// Blocking point-to-point message passing between ranks, FIFO per
/// (source, destination, tag) stream.
///
/// Sending or receiving an empty buffer is a legal no-op: no message crosses
/// the channel and `Ok(())` is returned. Both peers plan the same row
/// partition, so the skips line up.
pub trait Channel {
    fn rank(&self) -> i32;
    fn size(&self) -> i32;

    fn send<T: Equivalence + Copy>(
        &self,
        buf: &[T],
        dest: i32,
        tag: i32,
    ) -> Result<(), ExchangeError>;

    fn recv<T: Equivalence + Copy>(
        &self,
        buf: &mut [T],
        source: i32,
        tag: i32,
    ) -> Result<(), ExchangeError>;
}

/// The real transport: blocking MPI sends and receives over the world
/// communicator. MPI's default error handler aborts the whole job on a
/// transport failure, so this implementation never returns `Err` itself;
/// the `Result` surface is for other channel implementations.
pub struct MpiChannel {
    world: SimpleCommunicator,
}

impl MpiChannel {
    pub fn new(world: SimpleCommunicator) -> Self {
        MpiChannel { world }
    }
}

impl Channel for MpiChannel {
    fn rank(&self) -> i32 {
        self.world.rank()
    }

    fn size(&self) -> i32 {
        self.world.size()
    }

    fn send<T: Equivalence + Copy>(
        &self,
        buf: &[T],
        dest: i32,
        tag: i32,
    ) -> Result<(), ExchangeError> {
        if buf.is_empty() {
            return Ok(());
        }
        self.world.process_at_rank(dest).send_with_tag(buf, tag);
        Ok(())
    }

    fn recv<T: Equivalence + Copy>(
        &self,
        buf: &mut [T],
        source: i32,
        tag: i32,
    ) -> Result<(), ExchangeError> {
        if buf.is_empty() {
            return Ok(());
        }
        let _status = self
            .world
            .process_at_rank(source)
            .receive_into_with_tag(buf, tag);
        Ok(())
    }
}
