use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod controllers;
mod extract;
mod routes;

#[derive(Parser)]
#[command(name = "acadia", about = "Academy management backend")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    bootstrap::register().await;

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", addr, e));

    tracing::info!(%addr, "listening");

    axum::serve(listener, routes::router())
        .await
        .expect("server error");
}
