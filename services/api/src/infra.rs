use metrics_exporter_prometheus::PrometheusHandle;
use receptionist::bots::{BotService, InMemoryBotRepository};
use receptionist::calls::{CallRoutesState, JsonFileCallLogStore};
use receptionist::config::{AppConfig, AppEnvironment};
use receptionist::directory::EmployeeDirectory;
use receptionist::error::AppError;
use receptionist::openmic::OpenMicClient;
use receptionist::visitors::{sample_visitors, VisitorInfo};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) started_at: Instant,
    pub(crate) environment: AppEnvironment,
}

/// Everything the HTTP routes need, wired from configuration.
pub(crate) struct ReceptionistServices {
    pub(crate) directory: EmployeeDirectory,
    pub(crate) bots: Arc<BotService<InMemoryBotRepository>>,
    pub(crate) calls: Arc<CallRoutesState<JsonFileCallLogStore>>,
    pub(crate) visitors: Vec<VisitorInfo>,
}

impl ReceptionistServices {
    pub(crate) fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let store = JsonFileCallLogStore::open(&config.storage.call_log_path)?;
        info!(path = %store.path().display(), "call log store ready");

        let upstream = OpenMicClient::new(config.openmic.clone())?;
        if !upstream.is_configured() {
            warn!("OPENMIC_API_KEY not set; upstream call history and outbound calls are disabled");
        }

        Ok(Self {
            directory: EmployeeDirectory::seeded(),
            bots: Arc::new(BotService::new(Arc::new(
                InMemoryBotRepository::default(),
            ))),
            calls: Arc::new(CallRoutesState {
                store: Arc::new(store),
                upstream,
            }),
            visitors: sample_visitors(),
        })
    }
}
