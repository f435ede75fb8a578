//! Reusable flow API server runtime.
//!
//! Provides [`ServerHandle`] that encapsulates the full server lifecycle:
//! metrics recorder, database pool, REST API, and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};

use crate::application::FlowService;
use crate::config::AppConfig;
use crate::domain::FlowRepository;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};
use crate::{create_api_router, init_database, DatabaseConfig, SeaOrmFlowRepository};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the flow API.
#[derive(Default)]
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running flow API.
///
/// # Examples
///
/// ```rust,no_run
/// use flow_api::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is bound to.
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the flow API with the given options.
    ///
    /// This will:
    /// 1. Install the Prometheus metrics recorder
    /// 2. Open the database pool
    /// 3. Start the REST API server (with Swagger UI)
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        info!("Starting flow API...");

        let prometheus_handle = prometheus_handle();

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig {
            url: app_cfg.database.connection_url(),
            pool: app_cfg.database.pool.clone(),
        };
        let db = init_database(&db_config).await?;

        // ── Repositories & Services ────────────────────────────
        let repo: Arc<dyn FlowRepository> = Arc::new(SeaOrmFlowRepository::new(db.clone()));
        let flow_service = Arc::new(FlowService::new(repo));

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(flow_service, &app_cfg, prometheus_handle);

        let api_addr = app_cfg.server.address();
        let listener = tokio::net::TcpListener::bind(&api_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 Flow API started.");

        Ok(Self {
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for shutdown, let in-flight requests drain, then close the pool.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            api_task,
            ..
        } = self;

        let drained = shutdown
            .drain(async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;
        if !drained {
            warn!("Closing database pool with requests still in flight");
        }

        if let Err(e) = db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 Flow API shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down flow API...");
        self.trigger_shutdown();
        self.wait().await;
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// The global metrics recorder can only be installed once per process;
/// later starts reuse it. Falls back to a detached recorder if another
/// recorder is already installed.
fn prometheus_handle() -> PrometheusHandle {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("📊 Prometheus metrics recorder installed");
                handle
            }
            Err(e) => {
                warn!("Prometheus recorder not installed ({}); /metrics will be empty", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;

    fn test_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 0;
        cfg.server.shutdown_timeout = 5;
        cfg.database.url = "sqlite::memory:".to_string();
        cfg.database.pool = PoolConfig {
            max_connections: 1,
            min_connections: 1,
            ..PoolConfig::default()
        };
        cfg
    }

    #[tokio::test]
    async fn starts_and_shuts_down() {
        let handle = ServerHandle::start(ServerOptions {
            config: test_config(),
        })
        .await
        .unwrap();
        assert_ne!(handle.local_addr.port(), 0);

        let signal = handle.shutdown_signal();
        handle.shutdown().await;
        assert!(signal.is_triggered());
    }

    #[tokio::test]
    async fn rejects_invalid_config() {
        let mut cfg = test_config();
        cfg.pagination.default_size = 0;
        assert!(ServerHandle::start(ServerOptions { config: cfg }).await.is_err());
    }
}
