use actix_web::{App, HttpServer, middleware::Logger};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, filter::LevelFilter};

use application_intake::{
    api::{self, ApiSettings},
    cli::{Cli, Command},
    config::Config,
    db::{self, ApplicationStore, PgApplicationStore},
    shutdown::ShutdownCoordinator,
};

/// Console output plus one daily-rotated file per level under `log_dir`,
/// e.g. logs/info.log.2025-01-01, logs/error.log.2025-01-01
fn init_tracing(log_dir: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(log_dir, "info.log");
    let warn_file = tracing_appender::rolling::daily(log_dir, "warn.log");
    let error_file = tracing_appender::rolling::daily(log_dir, "error.log");
    let debug_file = tracing_appender::rolling::daily(log_dir, "debug.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let warn_layer = tracing_subscriber::fmt::layer()
        .with_writer(warn_file)
        .with_ansi(false)
        .with_filter(LevelFilter::WARN);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let debug_layer = tracing_subscriber::fmt::layer()
        .with_writer(debug_file)
        .with_ansi(false)
        .with_filter(LevelFilter::DEBUG);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(warn_layer)
        .with(error_layer)
        .with(debug_layer)
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().expect("Failed to load configuration");

    std::fs::create_dir_all(&config.log_dir).expect("Failed to create logs directory");
    init_tracing(&config.log_dir);

    let pool = db::connection::get_connection(&config.database_url, config.max_db_connections)
        .await
        .expect("Failed to connect to database");
    info!("Database connection pool established");

    db::migrations::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if cli.resolved_command() == Command::Migrate {
        pool.close().await;
        info!("Migrations applied, exiting");
        return Ok(());
    }

    info!("Starting application-intake");
    info!("Configuration loaded successfully:");
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Max database connections: {}", config.max_db_connections);
    info!("  - Expose database errors: {}", config.expose_database_errors);

    let store: Arc<dyn ApplicationStore> = Arc::new(PgApplicationStore::new(pool.clone()));
    let settings = ApiSettings::from(&config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(api::configure(store.clone(), settings))
    });

    info!("Server starting on http://{}:{}", config.host, config.port);

    let server = server
        .bind((config.host.as_str(), config.port))?
        .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task, pool)
        .wait_for_shutdown()
        .await
}
