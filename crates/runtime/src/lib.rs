use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_config::AppConfig;
use catalog_registration::{FormState, HttpRegistrationGateway, Navigator};
use tracing::info;

pub mod telemetry {
    use anyhow::Result;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    /// Install the global subscriber. Output goes to stderr so interactive
    /// prompts on stdout stay readable.
    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

pub type RegistrationForm<N> = FormState<Arc<HttpRegistrationGateway>, N>;

#[derive(Clone)]
pub struct FrontendServices {
    pub config: AppConfig,
    pub gateway: Arc<HttpRegistrationGateway>,
}

impl FrontendServices {
    pub fn initialise(config: &AppConfig) -> Result<Self> {
        let gateway = Arc::new(
            HttpRegistrationGateway::new(&config.auth_service)
                .context("failed to build authentication service client")?,
        );

        info!(
            register_url = gateway.register_url(),
            timeout_seconds = ?config.auth_service.request_timeout_seconds,
            "authentication gateway ready"
        );

        Ok(Self {
            config: config.clone(),
            gateway,
        })
    }

    /// A fresh, empty registration form wired to the shared gateway.
    pub fn registration_form<N: Navigator>(&self, navigator: N) -> RegistrationForm<N> {
        FormState::new(
            self.gateway.clone(),
            navigator,
            self.config.navigation.login_route.clone(),
        )
    }
}
