use pension_setup::api::{create_router, AppState};
use pension_setup::application::AccountOpeningService;
use pension_setup::infrastructure::{
    create_pool, Config, HttpBackgroundCheckService, RedisAccountRepository,
    RedisEventPublisher, RedisReferenceIdsManager,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,pension_setup=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::load()?;

    let redis_pool = create_pool(&config.redis.url)?;
    info!("Redis pool initialized");

    let background_check = Arc::new(HttpBackgroundCheckService::from_config(
        &config.background_check,
    )?);
    let reference_ids = Arc::new(RedisReferenceIdsManager::new(
        redis_pool.clone(),
        config.reference_ids.prefix.clone(),
    ));
    let accounts = Arc::new(RedisAccountRepository::new(redis_pool.clone()));
    let events = Arc::new(RedisEventPublisher::new(redis_pool.clone()));

    let service = Arc::new(AccountOpeningService::new(
        background_check,
        reference_ids,
        accounts.clone(),
        events,
    ));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let state = AppState::new(service, accounts, config).with_redis_pool(redis_pool);
    let app = create_router(state);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
