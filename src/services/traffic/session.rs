use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use super::{CounterSample, InterfaceName, SessionBaseline, SessionDelta, TrafficError};

const FIELD_IFACE: &str = "iface";
const FIELD_SHOW_ALL: &str = "showAllIfaces";
const FIELD_BASES: &str = "bases";

/// Everything that survives a restart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistedState {
    /// Interface being monitored
    #[serde(rename = "iface")]
    pub active_interface: InterfaceName,

    /// Whether virtual and bridge interfaces are offered for selection
    #[serde(rename = "showAllIfaces")]
    pub show_all_interfaces: bool,

    /// Session baseline per interface
    #[serde(rename = "bases")]
    pub baselines: BTreeMap<InterfaceName, SessionBaseline>,
}

impl PersistedState {
    /// Defaults before anything is loaded
    pub fn new(active_interface: InterfaceName) -> Self {
        Self {
            active_interface,
            show_all_interfaces: false,
            baselines: BTreeMap::new(),
        }
    }
}

/// Persisted per-interface session baselines.
///
/// Every mutation is written through to the state file immediately. Write
/// failures are returned so the caller can log them; the in-memory state
/// is updated regardless.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    state: PersistedState,
}

impl SessionStore {
    /// Store backed by `path`, starting from defaults
    pub fn new(path: impl Into<PathBuf>, active_interface: InterfaceName) -> Self {
        Self {
            path: path.into(),
            state: PersistedState::new(active_interface),
        }
    }

    /// State file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current in-memory state
    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    /// Interface being monitored
    pub fn active_interface(&self) -> &InterfaceName {
        &self.state.active_interface
    }

    /// Whether all interfaces are offered for selection
    pub fn show_all_interfaces(&self) -> bool {
        self.state.show_all_interfaces
    }

    /// Baseline of `iface`, if a session was ever started on it
    pub fn baseline(&self, iface: &InterfaceName) -> Option<SessionBaseline> {
        self.state.baselines.get(iface).copied()
    }

    /// Traffic on `iface` since its baseline.
    ///
    /// `None` without a baseline or a sample.
    pub fn session_delta(
        &self,
        iface: &InterfaceName,
        sample: Option<CounterSample>,
    ) -> Option<SessionDelta> {
        let baseline = self.baseline(iface)?;
        Some(session_delta(&baseline, sample?))
    }

    /// Start a new session on `iface` at `sample`.
    ///
    /// Does nothing and returns `Ok(false)` without a sample.
    ///
    /// # Errors
    ///
    /// Returns `TrafficError::StateWrite` if the state file cannot be written.
    pub fn reset_session(
        &mut self,
        iface: &InterfaceName,
        sample: Option<CounterSample>,
        epoch: i64,
    ) -> Result<bool, TrafficError> {
        let Some(sample) = sample else {
            return Ok(false);
        };

        self.state
            .baselines
            .insert(iface.clone(), SessionBaseline::from_sample(sample, epoch));
        self.save()?;

        Ok(true)
    }

    /// Switch the monitored interface.
    ///
    /// # Errors
    ///
    /// Returns `TrafficError::StateWrite` if the state file cannot be written.
    pub fn set_active_interface(&mut self, iface: InterfaceName) -> Result<(), TrafficError> {
        self.state.active_interface = iface;
        self.save()
    }

    /// Change the interface visibility filter.
    ///
    /// # Errors
    ///
    /// Returns `TrafficError::StateWrite` if the state file cannot be written.
    pub fn set_show_all_interfaces(&mut self, show_all: bool) -> Result<(), TrafficError> {
        self.state.show_all_interfaces = show_all;
        self.save()
    }

    /// Merge the state file into memory.
    ///
    /// A missing file is not an error. Each field is taken independently: a
    /// field with the wrong type is ignored and keeps its current value, and
    /// a malformed entry in `bases` is dropped without affecting the others.
    /// The persisted interface is only honored if `exists` accepts it.
    ///
    /// # Errors
    ///
    /// Returns `TrafficError::StateRead` if the file cannot be read and
    /// `TrafficError::StateParse` if it is not a JSON object. Memory is left
    /// untouched in both cases.
    #[instrument(skip(self, exists), fields(path = %self.path.display()))]
    pub fn load(&mut self, exists: impl Fn(&InterfaceName) -> bool) -> Result<(), TrafficError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No session state file, using defaults");
                return Ok(());
            }
            Err(e) => {
                return Err(TrafficError::StateRead {
                    path: self.path.clone(),
                    details: e.to_string(),
                });
            }
        };

        let record = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(record)) => record,
            Ok(other) => {
                return Err(TrafficError::StateParse {
                    path: self.path.clone(),
                    details: format!("expected an object, found {other}"),
                });
            }
            Err(e) => {
                return Err(TrafficError::StateParse {
                    path: self.path.clone(),
                    details: e.to_string(),
                });
            }
        };

        self.merge_record(&record, exists);
        Ok(())
    }

    fn merge_record(&mut self, record: &Map<String, Value>, exists: impl Fn(&InterfaceName) -> bool) {
        match record.get(FIELD_SHOW_ALL) {
            Some(Value::Bool(show_all)) => self.state.show_all_interfaces = *show_all,
            Some(other) => warn!("Ignoring non-boolean {FIELD_SHOW_ALL}: {other}"),
            None => {}
        }

        match record.get(FIELD_BASES) {
            Some(Value::Object(bases)) => self.state.baselines = parse_baselines(bases),
            Some(other) => warn!("Ignoring non-object {FIELD_BASES}: {other}"),
            None => {}
        }

        match record.get(FIELD_IFACE) {
            Some(Value::String(name)) => match InterfaceName::new(name.as_str()) {
                Ok(iface) if exists(&iface) => self.state.active_interface = iface,
                Ok(iface) => debug!("Persisted interface {iface} no longer exists"),
                Err(e) => warn!("Ignoring persisted {FIELD_IFACE}: {e}"),
            },
            Some(other) => warn!("Ignoring non-string {FIELD_IFACE}: {other}"),
            None => {}
        }
    }

    /// Overwrite the state file with the current state in one write.
    ///
    /// # Errors
    ///
    /// Returns `TrafficError::StateWrite` if the directory cannot be created
    /// or the file cannot be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self) -> Result<(), TrafficError> {
        let write_error = |details: String| TrafficError::StateWrite {
            path: self.path.clone(),
            details,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }

        let content = serde_json::to_string(&self.state).map_err(|e| write_error(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| write_error(e.to_string()))?;

        debug!("Saved session state");
        Ok(())
    }
}

fn parse_baselines(bases: &Map<String, Value>) -> BTreeMap<InterfaceName, SessionBaseline> {
    bases
        .iter()
        .filter_map(|(name, value)| {
            let iface = InterfaceName::new(name.as_str())
                .map_err(|e| warn!("Dropping baseline with bad name {name:?}: {e}"))
                .ok()?;
            let baseline = serde_json::from_value::<SessionBaseline>(value.clone())
                .map_err(|e| warn!("Dropping malformed baseline for {iface}: {e}"))
                .ok()?;
            Some((iface, baseline))
        })
        .collect()
}

/// Traffic since `baseline`, clamped at zero per direction.
pub fn session_delta(baseline: &SessionBaseline, sample: CounterSample) -> SessionDelta {
    let rx = sample.rx.saturating_sub(baseline.rx);
    let tx = sample.tx.saturating_sub(baseline.tx);

    SessionDelta {
        rx,
        tx,
        total: rx.saturating_add(tx),
    }
}
