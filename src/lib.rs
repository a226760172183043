pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod packages;
pub mod project_identity;
pub mod registry;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run ghost CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling (mark cancellation so in-flight child failures
    //    surface as an interrupt instead of a generic error)
    ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & Run. Usage errors exit 1; --help/--version exit 0.
    let args = match cli::args::Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            exit(if err.use_stderr() { 1 } else { 0 });
        }
    };
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
