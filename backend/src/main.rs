use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use ledger_backend::config::{version_info, Cli, Command, ServeArgs};
use ledger_backend::logging::init_tracing;
use ledger_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Version => {
            let info = version_info();
            println!(
                "version: {}\nrevision: {}\nbuild: {}",
                info.version, info.revision, info.build
            );
            Ok(())
        }
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    init_tracing(args.log_format);

    let app_state = initialize_backend(&args).await?;
    let app = create_router(app_state, &args.cors_origin)?;

    let addr = args.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
