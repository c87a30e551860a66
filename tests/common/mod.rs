use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Condvar, Mutex};

use matrix_mul_rows::channel::{Channel, ExchangeError};
use mpi::traits::Equivalence;

type Key = (i32, i32, i32); // (source, destination, tag)

#[derive(Default)]
struct Queues {
    messages: Mutex<HashMap<Key, VecDeque<Vec<u8>>>>,
    delivered: Condvar,
}

/// In-memory stand-in for the MPI transport: blocking FIFO delivery per
/// (source, destination, tag) stream, one endpoint per simulated rank. Lets
/// the exchange roles run on plain threads without an MPI launcher.
#[derive(Clone)]
pub struct LocalChannel {
    queues: Arc<Queues>,
    rank: i32,
    size: i32,
}

impl LocalChannel {
    /// One connected endpoint per rank in 0..size.
    pub fn pool(size: i32) -> Vec<LocalChannel> {
        let queues = Arc::new(Queues::default());
        (0..size)
            .map(|rank| LocalChannel {
                queues: queues.clone(),
                rank,
                size,
            })
            .collect()
    }
}

impl Channel for LocalChannel {
    fn rank(&self) -> i32 {
        self.rank
    }

    fn size(&self) -> i32 {
        self.size
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
        let bytes = unsafe {
            std::slice::from_raw_parts(buf.as_ptr() as *const u8, std::mem::size_of_val(buf))
        }
        .to_vec();

        let mut messages = self.queues.messages.lock().unwrap();
        messages
            .entry((self.rank, dest, tag))
            .or_default()
            .push_back(bytes);
        self.queues.delivered.notify_all();
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
        let key = (source, self.rank, tag);
        let expected = std::mem::size_of_val(&*buf);

        let mut messages = self.queues.messages.lock().unwrap();
        loop {
            if let Some(bytes) = messages.get_mut(&key).and_then(|queue| queue.pop_front()) {
                if bytes.len() != expected {
                    return Err(ExchangeError::Channel(format!(
                        "expected {expected} bytes from rank {source} on tag {tag}, got {}",
                        bytes.len()
                    )));
                }
                unsafe {
                    std::ptr::copy_nonoverlapping(
                        bytes.as_ptr(),
                        buf.as_mut_ptr() as *mut u8,
                        expected,
                    );
                }
                return Ok(());
            }
            messages = self.queues.delivered.wait(messages).unwrap();
        }
    }
}
