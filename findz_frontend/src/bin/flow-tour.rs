use colored::Colorize;

use findz_frontend::logging::setup_logger;
use findz_frontend::tour;

fn main() {
    setup_logger(false).expect("failed to initialize fern");

    println!("{}", "Starting control-flow tour.".blue().bold());
    for line in tour::run() {
        println!("{line}");
    }
}
