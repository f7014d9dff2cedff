use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use vbar_assessment::assessment::{
    EvaluationConfig, RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use vbar_assessment::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store. Sessions live only as long as the service and
/// are never written to disk.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("session store mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("session store mutex poisoned");
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("session store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn evaluation_config(config: &AppConfig) -> EvaluationConfig {
    EvaluationConfig {
        risk_threshold: config.assessment.risk_threshold,
    }
}
