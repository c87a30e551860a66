use clap::Parser;

use matrix_mul_rows::channel::{Channel, MpiChannel};
use matrix_mul_rows::{root, worker, Shape, ROOT_RANK};

/// Distributed dense matrix multiply: run under mpirun, rank 0 coordinates.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Rows of A (and of C).
    #[arg(short = 'l', long, default_value_t = 303)]
    a_rows: usize,

    /// Columns of A / rows of B.
    #[arg(short = 'n', long, default_value_t = 203)]
    inner: usize,

    /// Columns of B (and of C).
    #[arg(short = 'm', long, default_value_t = 123)]
    b_cols: usize,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let shape = Shape {
        a_rows: args.a_rows,
        inner: args.inner,
        b_cols: args.b_cols,
    };

    let universe = mpi::initialize().expect("failed to initialize the MPI world");
    let channel = MpiChannel::new(universe.world());

    let start_time = mpi::time();

    if channel.rank() == ROOT_RANK {
        match root::root_workflow(&channel, shape) {
            Ok(c) => {
                if shape.a_rows > 0 && shape.b_cols > 0 {
                    println!(
                        "rank={} c0={}; clm={}",
                        channel.rank(),
                        c.get(0, 0),
                        c.get(shape.a_rows - 1, shape.b_cols - 1)
                    );
                }
                println!("It took {} seconds to finish!", mpi::time() - start_time);
            }
            Err(e) => {
                eprintln!("rank {} failed: {e}", channel.rank());
                std::process::exit(1);
            }
        }
    } else if let Err(e) = worker::worker_workflow(&channel, shape) {
        eprintln!("rank {} failed: {e}", channel.rank());
        std::process::exit(1);
    }
}
