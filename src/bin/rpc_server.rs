//! Remote dispatch server demo.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use commstyles::rpc;
use tracing_subscriber::EnvFilter;

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => return, // No tracing
        1 => "info",
        2 => "debug",
        _ => "trace", // 3 or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("commstyles={}", level)))
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser)]
#[command(author, version, about = "Remote dispatch server", long_about = None)]
struct Args {
    /// Address to bind the dispatch endpoint to
    #[arg(short, long, default_value = "127.0.0.1:9001")]
    bind: String,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let registry = Arc::new(rpc::demo_registry(&args.bind));

    println!("Dispatch server on http://{}/rpc", args.bind);
    println!("Methods: {}", registry.method_names().join(", "));

    if let Err(err) = rpc::serve(registry, &args.bind).await {
        eprintln!("Server failed on {}: {}", args.bind, err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
