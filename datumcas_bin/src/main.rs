#[cfg(test)]
mod integration_test;

use std::sync::Arc;

use service::config::{Config, ConfigService};
use service::ServiceError;
use service_impl::{
    clock::ClockServiceImpl, config::ConfigServiceImpl, datetime::DateTimeServiceImpl,
    template::TemplateServiceImpl,
};
#[cfg(feature = "json_logging")]
use tracing_subscriber::fmt::format::FmtSpan;

type ClockService = ClockServiceImpl;
type DateTimeService = DateTimeServiceImpl<ClockService>;
type TemplateService = TemplateServiceImpl;

#[derive(Clone)]
pub struct RestStateImpl {
    date_time_service: Arc<DateTimeService>,
    template_service: Arc<TemplateService>,
}
impl rest::RestStateDef for RestStateImpl {
    type DateTimeService = DateTimeService;
    type TemplateService = TemplateService;

    fn date_time_service(&self) -> Arc<Self::DateTimeService> {
        self.date_time_service.clone()
    }
    fn template_service(&self) -> Arc<Self::TemplateService> {
        self.template_service.clone()
    }
}
impl RestStateImpl {
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        let timezone = time_tz::timezones::get_by_name(config.timezone.as_ref())
            .ok_or_else(|| ServiceError::UnknownTimezone(config.timezone.clone()))?;
        let clock_service = Arc::new(ClockServiceImpl::new(timezone));
        let date_time_service = Arc::new(DateTimeServiceImpl::new(clock_service));
        let template_service = Arc::new(TemplateServiceImpl::from_glob(
            config.template_glob.as_ref(),
        )?);

        Ok(Self {
            date_time_service,
            template_service,
        })
    }
}

#[tokio::main]
async fn main() {
    let version = env!("CARGO_PKG_VERSION");

    #[cfg(feature = "local_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .pretty()
        .with_file(true)
        .finish();

    #[cfg(feature = "json_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_span_list(true)
        .with_file(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    tracing::info!("Datumcas backend version: {}", version);
    dotenvy::dotenv().ok();

    let config = ConfigServiceImpl
        .get_config()
        .await
        .expect("Could not load configuration");
    let rest_state = RestStateImpl::new(&config).expect("Could not initialize services");

    rest::start_server(rest_state, config.bind_address.as_ref()).await
}
