use {
    sqlx::postgres::PgPoolOptions,
    std::{process, sync::Arc, time::Duration},
    storefront::{
        AppState,
        adapters::gateway_client::HttpPaymentProcessor,
        config::Config,
        domain::cart::CartRepository,
        infra::{in_memory::InMemoryCartRepository, postgres::cart_repo::PgCartRepository},
        services::transaction_service::TransactionOrchestrator,
    },
    tokio::signal,
    tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            process::exit(1);
        }
    };

    let carts: Arc<dyn CartRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(20)
                .acquire_timeout(Duration::from_secs(3))
                .connect(database_url)
                .await
                .expect("failed to connect to database");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("failed to run migrations");
            Arc::new(PgCartRepository::new(pool))
        }
        None => {
            let seed = config.seed_carts.as_deref().unwrap_or_default();
            let carts = InMemoryCartRepository::from_seed(seed).expect("SEED_CARTS is malformed");
            tracing::warn!(
                carts = carts.len().await,
                "DATABASE_URL not set, using in-memory carts"
            );
            Arc::new(carts)
        }
    };

    let processor = HttpPaymentProcessor::new(
        &config.gateway_url,
        config.gateway_api_key.clone(),
        config.gateway_timeout,
    )
    .expect("failed to build payment gateway client");
    tracing::info!(
        endpoint = processor.endpoint(),
        timeout = ?config.gateway_timeout,
        "payment gateway configured"
    );

    let state = AppState {
        transactions: Arc::new(
            TransactionOrchestrator::new(carts, Arc::new(processor), config.gateway_timeout)
                .with_cart_lookup_timeout(config.cart_lookup_timeout),
        ),
        request_timeout: config.request_timeout(),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("failed to bind listener");
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, storefront::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
