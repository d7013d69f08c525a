//! Book store REST server demo.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use commstyles::{rest, BookStore};
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
#[command(author, version, about = "Book store REST server", long_about = None)]
struct Args {
    /// Address to bind the HTTP service to
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    bind: String,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    println!("Book store service on http://{}", args.bind);
    println!("  GET    /books       - all books");
    println!("  GET    /books/:id   - one book");
    println!("  POST   /books       - create a book");
    println!("  PUT    /books/:id   - update a book");
    println!("  DELETE /books/:id   - delete a book");

    let store = Arc::new(BookStore::seeded());
    if let Err(err) = rest::serve(store, &args.bind).await {
        eprintln!("Server failed on {}: {}", args.bind, err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
