use std::sync::Arc;

use course_hub::api::router;
use course_hub::config::AppConfig;
use course_hub::state::AppState;
use course_hub::store::CourseStore;
use course_hub::upload::{HttpLectureUploader, LectureUploader, NoopLectureUploader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_hub=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let uploader: Arc<dyn LectureUploader> = if config.upload_enabled {
        Arc::new(HttpLectureUploader::new(config.upload_endpoint.clone()))
    } else {
        Arc::new(NoopLectureUploader)
    };

    let store = CourseStore::new().with_semester(config.semester.clone());
    info!("loaded {} seed courses", store.len());

    let state = AppState::new(store, uploader);
    let app = router(state);

    info!("listening on http://{}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
