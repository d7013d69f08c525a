//! Dialogue server demo — serves exactly one client, then exits.

use std::process::ExitCode;

use clap::Parser;
use commstyles::dialogue::DialogueServer;
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
#[command(author, version, about = "Dialogue server", long_about = None)]
struct Args {
    /// Address to bind the socket to
    #[arg(short, long, default_value = "127.0.0.1:9000")]
    bind: String,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let server = match DialogueServer::bind(&args.bind).await {
        Ok(server) => server,
        Err(err) => {
            eprintln!("Could not bind {}: {}", args.bind, err);
            return ExitCode::FAILURE;
        }
    };

    println!("Dialogue server on {} (one connection, then exit)", args.bind);
    match server.serve_one().await {
        Ok(summary) => {
            println!("Client disconnected after {} message(s)", summary.messages);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Dialogue failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
