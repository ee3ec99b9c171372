//! Random grid path search demo.
//!
//! Run: cargo run --bin gridstar -- [rows] [cols] [obstacles] [seed]
//!
//! Set `RUST_LOG=debug` to see search statistics.

use gridstar_demos::{parse_args, run};

fn main() {
    env_logger::init();

    let result = parse_args(std::env::args().skip(1)).and_then(|cfg| run(&cfg));
    match result {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
