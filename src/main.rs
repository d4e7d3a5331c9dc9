use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use clap::Parser;
use humansize::{format_size, BINARY};
use shopapp_lib::{
    server::{start_api_server, ServerState},
    Settings,
};
use shopapp_proto::{
    ApiRoute, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_UPLOAD_DIR, MAX_FILE_SIZE, MAX_REQUEST_SIZE,
};
use simple_logger::SimpleLogger;

#[derive(Parser)]
struct Args {
    /// Address the http server binds to
    #[arg(long, env = "SHOPAPP_HOST", default_value = DEFAULT_HOST)]
    host: IpAddr,

    /// Port of the http server
    #[arg(long, env = "SHOPAPP_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory product images are saved to
    #[arg(long, env = "SHOPAPP_UPLOAD_DIR", default_value = DEFAULT_UPLOAD_DIR)]
    upload_dir: PathBuf,

    /// Maximum size of a single uploaded image in bytes
    #[arg(long, env = "SHOPAPP_MAX_FILE_SIZE", default_value_t = MAX_FILE_SIZE)]
    max_file_size: u64,

    /// Maximum size of a whole request body in bytes
    #[arg(long, env = "SHOPAPP_MAX_REQUEST_SIZE", default_value_t = MAX_REQUEST_SIZE)]
    max_request_size: usize,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            upload_dir: self.upload_dir.clone(),
            max_file_size: self.max_file_size,
            max_request_size: self.max_request_size,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let args: Args = Args::parse();
    let settings = args.settings();
    if settings.max_file_size > settings.max_request_size as u64 {
        log::warn!(
            "max file size {} exceeds max request size {}, oversized images are rejected by the body limit",
            format_size(settings.max_file_size, BINARY),
            format_size(settings.max_request_size, BINARY)
        );
    }
    log::info!(
        "Image limit: {}, request limit: {}",
        format_size(settings.max_file_size, BINARY),
        format_size(settings.max_request_size, BINARY)
    );

    let (running_tx, mut running_rx) = tokio::sync::mpsc::channel::<()>(1);
    ctrlc::set_handler(move || {
        running_tx.blocking_send(()).ok();
    })?;
    let shutdown = async move {
        running_rx.recv().await;
        log::info!("Shutting down");
    };

    for route in [ApiRoute::Categories, ApiRoute::Products] {
        log::debug!("{}", route.target_raw(args.host.to_string(), args.port, false));
    }

    let state = Arc::new(ServerState::new(settings));
    start_api_server(SocketAddr::new(args.host, args.port), state, shutdown).await?;
    Ok(())
}
