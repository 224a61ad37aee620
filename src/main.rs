pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::{AppConfig, StorageBackend};
use crate::modules::content::adapter::outgoing::AccentVariable;
use crate::modules::content::application::ContentRepository;
use crate::modules::editor::adapter::outgoing::TimestampIdGenerator;
use crate::modules::editor::application::{CmsContext, EditorSession, SharedCms};
use crate::modules::storage::adapter::outgoing::{FileKeyValueStore, InMemoryKeyValueStore};
use crate::modules::storage::application::ports::outgoing::KeyValueStore;
use crate::modules::storage::application::PersistentStore;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    /// Content repository plus the single admin editing session.
    pub cms: SharedCms,
    pub accent: Arc<AccentVariable>,
    /// Raw backend, used by the readiness probe.
    pub store: Arc<dyn KeyValueStore>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;

    let store: Arc<dyn KeyValueStore> = match config.storage {
        StorageBackend::File => {
            info!(data_dir = %config.data_dir.display(), "Using file-backed content store");
            Arc::new(FileKeyValueStore::open(&config.data_dir)?)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory content store; edits are lost on restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let accent = Arc::new(AccentVariable::new());
    let repository = ContentRepository::load(PersistentStore::new(Arc::clone(&store)), accent.clone())?;
    let session = EditorSession::new(Arc::new(TimestampIdGenerator::new()));

    let state = AppState {
        cms: CmsContext::new(repository, session).shared(),
        accent,
        store,
    };

    let admin_enabled = config.admin_enabled;
    if admin_enabled {
        if config.is_production() {
            warn!("⚠️  Admin editor routes are ENABLED in production; they are unauthenticated");
        } else {
            info!("Admin editor routes enabled for environment: {}", config.environment);
        }
    }

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes);

        if admin_enabled {
            app = app.configure(admin_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public content
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_theme_handler);
}

#[cfg(not(tarpaulin_include))]
fn admin_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::editor::adapter::incoming::web::routes::*;

    // Schema
    cfg.service(crate::modules::schema::adapter::incoming::web::routes::get_schema_handler);
    // Session
    cfg.service(get_session_handler);
    cfg.service(select_tab_handler);
    cfg.service(select_record_handler);
    cfg.service(update_draft_handler);
    cfg.service(submit_draft_handler);
    // Deletion
    cfg.service(request_delete_handler);
    cfg.service(confirm_delete_handler);
    cfg.service(cancel_delete_handler);
    // Bulk JSON
    cfg.service(enter_bulk_json_handler);
    cfg.service(edit_bulk_json_handler);
    cfg.service(apply_bulk_json_handler);
    // Ordering; the section route must precede the `{tab}` route
    cfg.service(move_section_handler);
    cfg.service(move_record_handler);
    // Reset
    cfg.service(reset_content_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
