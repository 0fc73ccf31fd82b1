//! Find and draw a path on a map file or a random map.
//!
//! Run: cargo run --bin gridstar -- --seed 7 --density 30
//!      RUST_LOG=debug cargo run --bin gridstar -- --map maze.txt

use clap::Parser;
use gridstar_demos::{Args, load_map, run_query, summary};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let report = match load_map(&args).and_then(|map| run_query(map, &args)) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", report.rendered);
        println!("{}", summary(&report));
    }
}
