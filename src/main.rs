use std::process::ExitCode;

use clap::Parser;
use clipstash_lib::bootstrap::tracing::init_tracing_subscriber;
use clipstash_lib::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing_subscriber(cli.verbose) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(clipstash_lib::run(cli))
}
