//! Scripted remote dispatch client demo.
//!
//! Calls each of the server's demo methods once and prints the results.

use std::process::ExitCode;

use clap::Parser;
use commstyles::rpc::RpcClient;
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
#[command(author, version, about = "Remote dispatch client", long_about = None)]
struct Args {
    /// Base URL of the dispatch server
    #[arg(short, long, default_value = "http://127.0.0.1:9001")]
    server: String,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let client = RpcClient::new(&args.server);
    println!("Calling {} ...", args.server);

    let result = async {
        println!("greet(\"Ali\")      -> {}", client.greet("Ali").await?);
        println!("add(5, 7)         -> {}", client.add(5.0, 7.0).await?);
        println!("multiply(6, 7)    -> {}", client.multiply(6.0, 7.0).await?);
        println!("echo(\"ping\")      -> {}", client.echo("ping").await?);
        println!("server_info()     -> {}", client.server_info().await?);
        println!("list_methods()    -> {:?}", client.list_methods().await?);
        Ok::<_, commstyles::rpc::CallError>(())
    }
    .await;

    if let Err(err) = result {
        eprintln!("Call failed: {}", err);
        eprintln!("Is the server running? Try: rpc_server --bind 127.0.0.1:9001");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
