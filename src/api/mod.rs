use actix_web::web;
use std::sync::Arc;

use crate::config::Config;
use crate::db::ApplicationStore;

pub mod application;
pub mod health;
pub mod validation;

use application::{ApplicationService, handlers::application_config};
use health::health_config;

/// HTTP-facing settings derived from [`Config`]
#[derive(Debug, Clone, Copy)]
pub struct ApiSettings {
    pub max_payload_size: usize,
    pub expose_database_errors: bool,
}

impl From<&Config> for ApiSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_payload_size: config.max_payload_size,
            expose_database_errors: config.expose_database_errors,
        }
    }
}

/// Register shared state, body limits and every route on an app.
pub fn configure(
    store: Arc<dyn ApplicationStore>,
    settings: ApiSettings,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |config| {
        let service = ApplicationService::new(store.clone(), settings.expose_database_errors);

        config
            .app_data(web::Data::new(service))
            .app_data(web::Data::from(store))
            .app_data(web::Data::new(settings))
            .app_data(web::PayloadConfig::default().limit(settings.max_payload_size))
            .app_data(validation::form_config(settings.max_payload_size))
            .app_data(validation::multipart_config(settings.max_payload_size))
            .configure(health_config)
            .configure(application_config);
    }
}
