use deadpool_redis::{redis::AsyncCommands, Connection};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pension_setup::infrastructure::{create_pool, decode_event, keys, queues, Config, RedisPool};

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("Redis pool error: {0}")]
    Pool(String),
    #[error("Redis error: {0}")]
    Redis(String),
}

pub type Result<T> = std::result::Result<T, WorkerError>;

pub struct EventConsumer {
    redis_pool: RedisPool,
    delivered_ttl_seconds: u64,
    poll_timeout_seconds: f64,
}

impl EventConsumer {
    pub fn new(redis_pool: RedisPool, config: &Config) -> Self {
        Self {
            redis_pool,
            delivered_ttl_seconds: config.worker.delivered_ttl_seconds,
            poll_timeout_seconds: config.worker.poll_timeout_seconds,
        }
    }

    pub async fn start(&self) -> Result<()> {
        info!(queue = queues::ACCOUNT_OPENED_QUEUE, "consumer started");

        loop {
            if let Err(e) = self.process_next_event().await {
                tracing::error!(error = %e, "event processing failed");
                tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
            }
        }
    }

    async fn conn(&self) -> Result<Connection> {
        self.redis_pool
            .get()
            .await
            .map_err(|e| WorkerError::Pool(e.to_string()))
    }

    async fn process_next_event(&self) -> Result<()> {
        let mut c = self.conn().await?;

        let popped: Option<(String, String)> = c
            .brpop(queues::ACCOUNT_OPENED_QUEUE, self.poll_timeout_seconds)
            .await
            .map_err(|e| WorkerError::Redis(e.to_string()))?;

        let Some((_, payload)) = popped else {
            return Ok(());
        };

        let Some(event) = decode_event(&payload) else {
            return Ok(());
        };

        let marked = c
            .set_ex::<_, _, ()>(
                keys::event_delivered(&event.event_id),
                &event.reference_id,
                self.delivered_ttl_seconds,
            )
            .await;

        if let Err(e) = marked {
            // BRPOP pops from the tail, so RPUSH puts the event back first in line.
            c.rpush::<_, _, ()>(queues::ACCOUNT_OPENED_QUEUE, &payload)
                .await
                .map_err(|requeue| {
                    WorkerError::Redis(format!(
                        "event {} lost: mark failed ({e}), requeue failed ({requeue})",
                        event.event_id
                    ))
                })?;
            tracing::warn!(event_id = %event.event_id, "event requeued after failed delivery mark");
            return Err(WorkerError::Redis(e.to_string()));
        }

        info!(
            event_id = %event.event_id,
            reference_id = %event.reference_id,
            occurred_at = %event.occurred_at,
            "account opened event delivered"
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::load()?;
    let redis_pool = create_pool(&config.redis.url)?;
    info!("Redis connected");

    let consumer = EventConsumer::new(redis_pool, &config);
    consumer.start().await?;

    Ok(())
}
