//! Scripted dialogue client demo — the fixed two-message exchange.

use std::process::ExitCode;

use clap::Parser;
use commstyles::dialogue::DialogueClient;
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
#[command(author, version, about = "Dialogue client", long_about = None)]
struct Args {
    /// Address of the dialogue server
    #[arg(short, long, default_value = "127.0.0.1:9000")]
    server: String,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut client = match DialogueClient::connect(&args.server).await {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Could not connect to {}: {}", args.server, err);
            eprintln!("Is the server running? Try: dialogue_server --bind {}", args.server);
            return ExitCode::FAILURE;
        }
    };

    for message in ["I am Client", "Nice to meet you!"] {
        println!("-> {}", message);
        match client.exchange(message).await {
            Ok(reply) => println!("<- {}", reply),
            Err(err) => {
                eprintln!("Exchange failed: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    println!("Dialogue complete.");
    ExitCode::SUCCESS
}
