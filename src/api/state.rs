use std::sync::Arc;

use crate::application::AccountOpeningService;
use crate::domain::ports::AccountRepository;
use crate::infrastructure::{Config, RedisPool};

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountOpeningService>,
    pub accounts: Arc<dyn AccountRepository>,
    pub redis_pool: Option<RedisPool>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        account_service: Arc<AccountOpeningService>,
        accounts: Arc<dyn AccountRepository>,
        config: Config,
    ) -> Self {
        Self {
            account_service,
            accounts,
            redis_pool: None,
            config: Arc::new(config),
        }
    }

    pub fn with_redis_pool(mut self, pool: RedisPool) -> Self {
        self.redis_pool = Some(pool);
        self
    }
}
