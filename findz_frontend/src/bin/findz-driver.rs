use clap::Parser;

use findz_frontend::logging::setup_logger;
use findz_frontend::report::{render_json, render_text, run_checks, SAMPLE_QUERIES, SAMPLE_SEQ};
use findz_frontend::DriverArgs;

fn main() {
    let args = DriverArgs::parse();
    setup_logger(args.verbose).expect("failed to initialize fern");

    let report = run_checks(&SAMPLE_SEQ, &SAMPLE_QUERIES);
    if args.json {
        let dump = render_json(&report).expect("failed to serialize report");
        println!("{dump}");
    } else {
        for line in render_text(&report) {
            println!("{line}");
        }
    }
}
