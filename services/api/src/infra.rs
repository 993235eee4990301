use job_intake::workflows::intake::{
    FormState, Position, SessionId, SessionRecord, SessionStore, SessionStoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session cells. Lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionStore {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, SessionRecord>>, SessionStoreError>
    {
        self.records
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session store lock poisoned".to_string()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, SessionStoreError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn update_with(
        &self,
        id: &SessionId,
        step: &mut dyn FnMut(FormState) -> FormState,
    ) -> Result<SessionRecord, SessionStoreError> {
        let mut guard = self.lock()?;
        let record = guard.get_mut(id).ok_or(SessionStoreError::NotFound)?;
        let state = std::mem::take(&mut record.state);
        record.state = step(state);
        Ok(record.clone())
    }
}

pub(crate) fn parse_position(raw: &str) -> Result<Position, String> {
    raw.parse::<Position>().map_err(|err| {
        let offered: Vec<_> = Position::ALL.iter().map(|p| p.label()).collect();
        format!("{err} (expected one of {})", offered.join(", "))
    })
}
