use au3lsp::create_service;
use tower_lsp::Server;

/// Environment variable selecting the log level (error, warn, info, debug, trace).
const LOG_ENV: &str = "AU3LSP_LOG";

#[tokio::main]
async fn main() {
    // stdout carries the protocol, so logs go to stderr.
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting au3lsp");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_service();
    Server::new(stdin, stdout, socket).serve(service).await;
}
