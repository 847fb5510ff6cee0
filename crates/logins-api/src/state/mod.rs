//! Application state shared by every handler

use std::sync::Arc;

use logins_common::{AppConfig, PaginationConfig};
use logins_service::{LoginService, ServiceContext};

#[derive(Clone, Debug)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Login use cases bound to this state's repository
    pub fn logins(&self) -> LoginService<'_> {
        LoginService::new(&self.service_context)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Listing defaults and bounds
    pub fn pagination(&self) -> &PaginationConfig {
        &self.config.pagination
    }
}
