//! Headless entry point: checks the backend, loads user data and prints
//! catalog and library summaries.

use std::process::ExitCode;
use std::sync::Arc;

use stemlab::app::{App, NoticeLevel, Screen};
use stemlab::config::ClientConfig;
use stemlab::core::{ApiService, Result};
use stemlab::logging::{self, LogConfig};
use stemlab::query::categories;
use stemlab::services::api::ApiClient;
use stemlab::services::storage::{FileStorage, LocalStorage};

#[tokio::main]
async fn main() -> ExitCode {
    let log_config = LogConfig::from_env();
    let _guard = logging::init(&log_config);

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "stemlab failed");
            eprintln!("stemlab: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = ClientConfig::from_env()?;
    let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::open(config.storage_file())?);
    tracing::info!(
        backend_url = %config.backend_url,
        timeout_secs = config.timeout.as_secs(),
        storage = %config.storage_file().display(),
        "Configuration loaded"
    );

    let client = ApiClient::new(&config, storage.clone())?;
    let health = client.health_check().await?;
    println!("Backend {} is {}", config.backend_url, health.status);

    let mut app = App::from_client(client, storage);

    app.store.load().await;
    app.on_tick();
    let user = app.store.snapshot();
    match (&user.load_error, &user.preferences, &user.stats) {
        (Some(error), _, _) => println!("User data unavailable: {}", error),
        (None, Some(preferences), Some(stats)) => {
            println!(
                "Skill level {}, themes [{}], {} ideas generated",
                preferences.skill_level,
                preferences.selected_themes.join(", "),
                stats.ideas_generated
            );
        }
        _ => {}
    }
    println!("{} components selected", user.selected_components.len());

    app.navigate(Screen::ComponentBrowser);
    app.process_next_event().await;
    {
        let state = app.state.read();
        let catalog = &state.browser.catalog.items;
        println!(
            "Catalog: {} components in {}",
            catalog.len(),
            categories(catalog)[1..].join(", ")
        );
    }

    app.navigate(Screen::IdeasLibrary);
    app.process_next_event().await;
    let stats = app.library_stats();
    println!(
        "Library: {} ideas ({} favourites; {} beginner, {} intermediate, {} advanced)",
        stats.total, stats.favorites, stats.beginner, stats.intermediate, stats.advanced
    );

    for notice in app.state.write().take_notices() {
        if notice.level == NoticeLevel::Error {
            eprintln!("{}", notice.message);
        }
    }

    Ok(())
}
