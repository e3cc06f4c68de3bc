//! User Service Library
//!
//! Registers users through a hexagonal "create user" use case:
//! - `http` is the inbound adapter (axum)
//! - `service` holds the application service
//! - `ports` declares the outbound traits
//! - `repository` and `events` implement them
//! - `composition` binds one adapter per port at startup

pub mod composition;
pub mod config;
pub mod events;
pub mod http;
pub mod infra;
pub mod ports;
pub mod repository;
pub mod service;

use std::net::SocketAddr;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::http::create_router;
use crate::infra::Database;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = composition::build_state(&config).await?;

    // Build router
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = config.service.addr().parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
