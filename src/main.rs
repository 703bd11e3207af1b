use std::{env, process::ExitCode, time::Instant};

use log::{debug, info};
use pai::{display_error, parse};

fn main() -> ExitCode {
    if let Err(error) = simple_logger::init() {
        eprintln!("Failed to initialise logging: {}", error);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("Usage: pai <input>...");
        return ExitCode::from(2);
    }

    info!("Starting pai v{} ...", env!("CARGO_PKG_VERSION"));

    for source in &args {
        let start = Instant::now();
        let parsed = parse(source);
        debug!("Parsed {:?} in {:?}", source, start.elapsed());

        match parsed {
            Ok(nodes) => {
                println!("{}", source);
                for (index, node) in nodes.iter().enumerate() {
                    println!("  {}: {}", index, node);
                }
            }
            Err(error) => {
                eprint!("{}", display_error(&error, source));
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
