use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wellness_chat::adapters::http::{chat_routes, ChatHandlers};
use wellness_chat::adapters::random::ThreadRandomSource;
use wellness_chat::adapters::storage::{InMemoryProfileStore, LocalPictureStorage};
use wellness_chat::application::handlers::{
    ComposeReplyHandler, PickDailyTipsHandler, UpdateProfileHandler,
};
use wellness_chat::config::AppConfig;
use wellness_chat::domain::{ContentLibrary, KnowledgeBase};
use wellness_chat::ports::{PictureStorage, ProfileStore, RandomSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    info!("Starting Wellness Chat...");

    let picture_storage = LocalPictureStorage::new(
        &config.storage.upload_dir,
        config.storage.public_prefix.clone(),
        config.storage.max_upload_bytes,
        config.storage.allowed_extensions_list(),
    );
    picture_storage.ensure_upload_dir().await?;
    info!(dir = %config.storage.upload_dir, "Upload directory ready");

    let profile_store: Arc<dyn ProfileStore> = Arc::new(InMemoryProfileStore::new());
    let pictures: Arc<dyn PictureStorage> = Arc::new(picture_storage);
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandomSource::new());

    let update_profile = Arc::new(UpdateProfileHandler::new(
        profile_store.clone(),
        pictures.clone(),
    ));
    let compose_reply = Arc::new(ComposeReplyHandler::new(
        KnowledgeBase::standard(),
        ContentLibrary::new(),
        random.clone(),
    ));
    let pick_tips = Arc::new(PickDailyTipsHandler::new(
        ContentLibrary::new(),
        random.clone(),
    ));

    let handlers = ChatHandlers::new(profile_store, update_profile, compose_reply, pick_tips);

    let router = chat_routes(handlers, config.storage.max_upload_bytes)
        .nest_service("/static", ServeDir::new(&config.storage.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));
    info!("Router created with static mount at /static");

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
