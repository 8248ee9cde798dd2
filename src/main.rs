mod cli;
mod demo;
mod routes;
mod server;

use tradescore::error::AppError;

async fn run() -> Result<(), AppError> {
    cli::run().await
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
