use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use shopapp_proto::ApiRoute;
use tokio::net::TcpListener;

use crate::{ingest::ImageIngestor, Settings};

use self::controller::*;

mod controller;
mod error;
mod multipart;

pub use multipart::ProductForm;

pub type SharedServerState = Arc<ServerState>;

pub struct ServerState {
    pub settings: Settings,
    pub ingestor: ImageIngestor,
}

impl ServerState {
    pub fn new(settings: Settings) -> Self {
        let ingestor = ImageIngestor::new(&settings);
        Self { settings, ingestor }
    }
}

pub fn router(state: SharedServerState) -> Router {
    let body_limit = state.settings.max_request_size;
    Router::new()
        .route(
            &ApiRoute::Categories.path(),
            get(get_all_categories).post(create_category),
        )
        .route(
            &ApiRoute::Category.path(),
            put(update_category).delete(delete_category),
        )
        .route(
            &ApiRoute::Products.path(),
            get(get_all_products).post(create_product),
        )
        .route(
            &ApiRoute::Product.path(),
            get(get_product_by_id).delete(delete_product),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub async fn start_api_server<F>(
    addr: SocketAddr,
    state: SharedServerState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    log::info!(
        "Storing product images in {:?}",
        state.ingestor.upload_dir()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
