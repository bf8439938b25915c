use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_server::requests::{
    RequestError, RequestHandler, parse_make_base_document, parse_process_document,
};
use transit_server::store::{Snapshot, StoreError, load_base};
use transit_server::web::{AppState, ConfigError, ServerConfig, create_router};

const USAGE: &str = "Usage: transit-server [make_base|process_requests|serve]";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write response: {0}")]
    Stdout(#[source] io::Error),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("server error: {0}")]
    Server(#[source] io::Error),
}

fn main() -> ExitCode {
    // stdout carries the JSON responses
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mode = std::env::args().nth(1);
    let result = match mode.as_deref() {
        Some("make_base") => make_base(),
        Some("process_requests") => process_requests(),
        Some("serve") => serve(),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn read_stdin() -> Result<String, CliError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(CliError::Stdin)?;
    Ok(input)
}

fn make_base() -> Result<(), CliError> {
    let doc = parse_make_base_document(&read_stdin()?)?;
    let path = doc.serialization_settings.file.clone();
    let snapshot = Snapshot::from(doc);

    // Reject inputs that would fail to load later
    let base = snapshot.restore()?;
    info!(
        stops = base.catalogue().stops().len(),
        buses = base.catalogue().buses().len(),
        "Base built"
    );

    snapshot.save(&path)?;
    Ok(())
}

fn process_requests() -> Result<(), CliError> {
    let doc = parse_process_document(&read_stdin()?)?;
    let base = load_base(&doc.serialization_settings.file)?;

    let responses = RequestHandler::new(&base).handle_all(&doc.stat_requests);
    info!(count = responses.len(), "Requests processed");

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &responses)
        .map_err(|e| CliError::Stdout(e.into()))?;
    writeln!(stdout).map_err(CliError::Stdout)?;
    Ok(())
}

fn serve() -> Result<(), CliError> {
    let config = ServerConfig::from_env()?;
    let base = load_base(&config.base_path)?;
    let app = create_router(AppState::new(base));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Server)?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(config.addr)
            .await
            .map_err(CliError::Server)?;
        info!(addr = %config.addr, "Server running");
        info!("Endpoints:");
        info!("  GET  /health");
        info!("  POST /requests");
        info!("  GET  /route?from=&to=");
        info!("  GET  /map");
        info!("  GET  /map.svg");

        axum::serve(listener, app).await.map_err(CliError::Server)
    })
}
