// src/bin/api_server.rs

use movie_rpc::infra::{self, Config};
use movie_rpc::transport;
use movie_rpc::MovieService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: movie-server [--port <port>]\n\
         \n\
         Reads DATABASE_URL (or DB_HOST, DB_PORT, DB_NAME, DB_USER, DB_PASSWORD),\n\
         BIND_HOST, PORT and STORAGE_BACKEND from the environment or .env.\n"
    );
    std::process::exit(2);
}

/// `--port <n>` / `--port=<n>` overrides `PORT`.
fn port_override(args: &[String]) -> anyhow::Result<Option<u16>> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let value = if arg == "--port" || arg == "-port" {
            iter.next()
                .ok_or_else(|| anyhow::anyhow!("{} requires a value", arg))?
                .as_str()
        } else if let Some(v) = arg.strip_prefix("--port=") {
            v
        } else {
            continue;
        };
        let port = value
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("invalid port: {}", value))?;
        return Ok(Some(port));
    }
    Ok(None)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    infra::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let mut config = Config::from_env().map_err(infra::StartupError::from)?;
    if let Some(port) = port_override(&args)? {
        config.port = port;
    }

    // --- Storage Gateway Initialization ---
    let store = infra::open_store(&config).await?;

    // --- Service Initialization ---
    let app_state = transport::rpc::AppState {
        movie_service: Arc::new(MovieService::new(store)),
    };

    // --- RPC Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::rpc::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::rpc::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| infra::StartupError::Bind { addr: addr.clone(), source })?;
    tracing::info!(
        "server listening at {} (service {})",
        listener.local_addr()?,
        transport::rpc::SERVICE_NAME
    );
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutdown signal received, draining in-flight calls");
        })
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn port_flag_forms() {
        assert_eq!(port_override(&args(&[])).unwrap(), None);
        assert_eq!(port_override(&args(&["--port", "6000"])).unwrap(), Some(6000));
        assert_eq!(port_override(&args(&["-port", "6001"])).unwrap(), Some(6001));
        assert_eq!(port_override(&args(&["--port=6002"])).unwrap(), Some(6002));
        assert!(port_override(&args(&["--port"])).is_err());
        assert!(port_override(&args(&["--port", "x"])).is_err());
    }
}
