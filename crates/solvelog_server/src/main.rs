//! solvelog HTTP service entry point.
//!
//! # Responsibility
//! - Assemble configuration, logging, store and LLM handle.
//! - Bind the listener and serve until the process is stopped.

use log::{error, info, warn};
use solvelog_core::db::open_db;
use solvelog_server::config::Config;
use solvelog_server::llm::GeminiClient;
use solvelog_server::routes::build_router;
use solvelog_server::state::AppState;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    if let Err(err) = solvelog_core::init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("solvelog: failed to initialize logging: {err}");
    }

    info!(
        "event=app_start module=server status=ok env={} version={}",
        config.env,
        solvelog_core::core_version()
    );
    info!(
        "event=config_loaded module=server llm_model={} max_output_tokens={} db_path={}",
        config.gemini.model,
        config.gemini.max_output_tokens,
        config.database_path.display()
    );

    let llm = match GeminiClient::new(&config.gemini) {
        Ok(client) => client,
        Err(err) => {
            error!("event=llm_init module=server status=error error={err}");
            std::process::exit(1);
        }
    };
    if llm.is_configured() {
        info!(
            "event=llm_init module=server status=ok model={}",
            llm.model()
        );
    } else {
        warn!("event=llm_init module=server status=degraded reason=missing_api_key");
    }

    let conn = match open_db(&config.database_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=db_init module=server status=error error={err}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr();
    let state = AppState::new(conn, llm, config);
    let router = build_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("event=server_bind module=server status=error addr={addr} error={err}");
            std::process::exit(1);
        }
    };
    info!("event=server_listen module=server status=ok addr={addr}");

    if let Err(err) = axum::serve(listener, router).await {
        error!("event=server_run module=server status=error error={err}");
        std::process::exit(1);
    }
}
