use std::{
    fmt,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use tracing::{debug, info, instrument, warn};

use crate::{config::MonitorConfig, services::common::Property};

use super::{
    Clock, CounterSample, DefaultRouteResolver, InterfaceCatalog, InterfaceName, PollScheduler,
    RateEngine, RateState, SessionBaseline, SessionDelta, SessionStore, SysFs, TrafficError,
    counters::read_counters,
    format::{PLACEHOLDER_LABEL, format_label, format_session},
};

/// Monitor shared between the poll scheduler and user actions.
pub type SharedMonitor = Arc<Mutex<TrafficMonitor>>;

/// Interface being polled together with its rate state.
///
/// Replaced wholesale on every interface switch.
#[derive(Debug)]
struct ActiveContext {
    iface: InterfaceName,
    engine: RateEngine,
}

impl ActiveContext {
    fn new(iface: InterfaceName) -> Self {
        Self {
            iface,
            engine: RateEngine::new(),
        }
    }
}

/// One interface row in the selection menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Interface name
    pub name: InterfaceName,
    /// Whether this is the monitored interface
    pub active: bool,
}

/// Values behind the panel's context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    /// Monitored interface
    pub current: InterfaceName,
    /// Caption of the reset action
    pub reset_label: String,
    /// Caption of the interface submenu
    pub select_label: String,
    /// Selectable interfaces, empty if none were found
    pub interfaces: Vec<MenuEntry>,
    /// Current visibility filter
    pub show_all: bool,
    /// Caption of the visibility toggle
    pub toggle_label: String,
    /// Caption of the re-detect action
    pub redetect_label: String,
}

impl MenuModel {
    /// Caption shown in place of an empty interface list
    pub const NO_INTERFACES: &'static str = "No interfaces found";
}

/// Session figures for the monitored interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReport {
    /// Counters and a baseline are available
    Readable {
        /// Monitored interface
        iface: InterfaceName,
        /// Session start
        baseline: SessionBaseline,
        /// Traffic since the session start
        delta: SessionDelta,
    },
    /// Counters or baseline are missing
    Unreadable {
        /// Monitored interface
        iface: InterfaceName,
    },
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionReport::Readable {
                iface,
                baseline,
                delta,
            } => write!(f, "{}", format_session(iface, baseline, delta)),
            SessionReport::Unreadable { iface } => write!(f, "Interface {iface} not readable."),
        }
    }
}

/// Traffic stopwatch for one interface at a time.
///
/// Owns the session store and the active polling context, and publishes
/// the panel label and tooltip. Every user action is written through to
/// the state file and followed by an immediate poll. Nothing here fails
/// because of kernel or storage faults; those are logged and show up as
/// placeholder output.
pub struct TrafficMonitor {
    fs: Arc<dyn SysFs>,
    clock: Arc<dyn Clock>,
    net_dir: PathBuf,
    route_table: PathBuf,
    fallback: InterfaceName,
    store: SessionStore,
    context: ActiveContext,
    label: Property<String>,
    tooltip: Property<Option<String>>,
}

impl fmt::Debug for TrafficMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrafficMonitor")
            .field("net_dir", &self.net_dir)
            .field("route_table", &self.route_table)
            .field("store", &self.store)
            .field("context", &self.context)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl TrafficMonitor {
    /// Build a monitor and restore the persisted session state.
    ///
    /// The interface of the default route is monitored unless the state
    /// file names one that still exists. If that interface has no session
    /// yet, one is started from its current counters.
    ///
    /// # Errors
    ///
    /// Returns `TrafficError::EmptyInterfaceName` if the configured
    /// fallback interface is blank.
    #[instrument(skip_all, fields(state_file = %state_file.display()))]
    pub fn new(
        config: &MonitorConfig,
        state_file: PathBuf,
        fs: Arc<dyn SysFs>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, TrafficError> {
        let fallback = InterfaceName::new(config.fallback_interface.as_str())?;
        let default_iface =
            DefaultRouteResolver::new(fs.as_ref(), &config.route_table, &fallback).resolve();

        let mut store = SessionStore::new(state_file, default_iface);
        let catalog = InterfaceCatalog::new(fs.as_ref(), &config.net_class_dir);
        if let Err(e) = store.load(|iface| catalog.exists(iface)) {
            warn!("Keeping default session state: {e}");
        }

        let context = ActiveContext::new(store.active_interface().clone());
        info!("Monitoring {}", context.iface);

        let mut monitor = Self {
            fs,
            clock,
            net_dir: config.net_class_dir.clone(),
            route_table: config.route_table.clone(),
            fallback,
            store,
            context,
            label: Property::new(PLACEHOLDER_LABEL.to_string()),
            tooltip: Property::new(None),
        };

        if monitor.baseline().is_none() {
            monitor.start_session();
        }

        Ok(monitor)
    }

    /// Wrap the monitor for sharing with a [`PollScheduler`].
    pub fn into_shared(self) -> SharedMonitor {
        Arc::new(Mutex::new(self))
    }

    /// Poll the active interface once and publish the results.
    ///
    /// The first readable sample of an interface without a baseline starts
    /// its session. Returns the new label.
    pub fn tick(&mut self) -> String {
        let sample = self.read_active();
        if sample.is_some() && self.baseline().is_none() {
            self.baseline_from(sample);
        }

        let rate = self.context.engine.on_poll(sample, self.clock.now_ms());

        let label = format_label(rate);
        debug!(iface = %self.context.iface, %label, "Polled");
        self.label.set(label.clone());

        if let SessionReport::Readable {
            iface,
            baseline,
            delta,
        } = self.report_for(sample)
        {
            self.tooltip
                .set(Some(format_session(&iface, &baseline, &delta)));
        }

        label
    }

    /// Start a new session on the active interface from its current counters.
    ///
    /// Returns `false`, changing nothing, when the counters are unreadable.
    #[instrument(skip(self), fields(iface = %self.context.iface))]
    pub fn reset_session(&mut self) -> bool {
        let started = self.start_session();
        if started {
            info!("Session reset");
        } else {
            warn!("Counters unreadable, session not reset");
        }

        self.tick();
        started
    }

    /// Monitor `iface` from now on.
    ///
    /// Rate history is discarded. A session is started if the interface
    /// never had one.
    #[instrument(skip(self))]
    pub fn select_interface(&mut self, iface: InterfaceName) {
        info!("Switching interface");

        self.context = ActiveContext::new(iface.clone());
        self.tooltip.set(None);

        if let Err(e) = self.store.set_active_interface(iface) {
            warn!("{e}");
        }
        if self.baseline().is_none() {
            self.start_session();
        }

        self.tick();
    }

    /// Switch to the interface of the current default route.
    ///
    /// Returns the interface now monitored.
    pub fn redetect_interface(&mut self) -> InterfaceName {
        let iface = self.resolve_default_interface();
        self.select_interface(iface.clone());
        iface
    }

    /// Whether virtual and bridge interfaces are offered for selection.
    pub fn show_all_interfaces(&self) -> bool {
        self.store.show_all_interfaces()
    }

    /// Change the interface visibility filter.
    pub fn set_show_all_interfaces(&mut self, show_all: bool) {
        info!(show_all, "Changing interface filter");

        if let Err(e) = self.store.set_show_all_interfaces(show_all) {
            warn!("{e}");
        }
        self.tick();
    }

    /// Flip the interface visibility filter and return the new value.
    pub fn toggle_show_all_interfaces(&mut self) -> bool {
        let show_all = !self.show_all_interfaces();
        self.set_show_all_interfaces(show_all);
        show_all
    }

    /// Interfaces offered for selection under the current filter.
    pub fn interfaces(&self) -> Vec<InterfaceName> {
        InterfaceCatalog::new(self.fs.as_ref(), &self.net_dir).list(self.show_all_interfaces())
    }

    /// Whether `iface` currently exists on the system.
    pub fn interface_exists(&self, iface: &InterfaceName) -> bool {
        InterfaceCatalog::new(self.fs.as_ref(), &self.net_dir).exists(iface)
    }

    /// Interface of the current default route, or the fallback.
    pub fn resolve_default_interface(&self) -> InterfaceName {
        DefaultRouteResolver::new(self.fs.as_ref(), &self.route_table, &self.fallback).resolve()
    }

    /// Values for the context menu.
    pub fn menu(&self) -> MenuModel {
        let current = self.context.iface.clone();
        let show_all = self.show_all_interfaces();

        let interfaces = self
            .interfaces()
            .into_iter()
            .map(|name| MenuEntry {
                active: name == current,
                name,
            })
            .collect();

        let toggle_label = if show_all {
            "Show regular interfaces only"
        } else {
            "Show all interfaces (Docker/veth/bridges)"
        };

        MenuModel {
            reset_label: format!("Reset Session ({current})"),
            select_label: format!("Choose interface (current: {current})"),
            current,
            interfaces,
            show_all,
            toggle_label: toggle_label.to_string(),
            redetect_label: "Re-detect interface".to_string(),
        }
    }

    /// Session figures from a fresh counter read.
    pub fn session_report(&self) -> SessionReport {
        self.report_for(self.read_active())
    }

    /// Monitored interface
    pub fn active_interface(&self) -> &InterfaceName {
        &self.context.iface
    }

    /// Baseline of the monitored interface
    pub fn baseline(&self) -> Option<SessionBaseline> {
        self.store.baseline(&self.context.iface)
    }

    /// Whether a reference sample is held for rate computation
    pub fn rate_state(&self) -> RateState {
        self.context.engine.state()
    }

    /// Persisted session state
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Panel label, `↓ <rate> ↑ <rate>` or the placeholder
    pub fn label(&self) -> &Property<String> {
        &self.label
    }

    /// Session tooltip, absent until the first readable poll
    pub fn tooltip(&self) -> &Property<Option<String>> {
        &self.tooltip
    }

    fn baseline_from(&mut self, sample: Option<CounterSample>) {
        let epoch = self.clock.unix_seconds();

        match self
            .store
            .reset_session(&self.context.iface, sample, epoch)
        {
            Ok(_) => info!(iface = %self.context.iface, "Session started on first readable poll"),
            Err(e) => warn!("{e}"),
        }
    }

    fn read_active(&self) -> Option<CounterSample> {
        read_counters(self.fs.as_ref(), &self.net_dir, &self.context.iface)
    }

    fn report_for(&self, sample: Option<CounterSample>) -> SessionReport {
        let iface = self.context.iface.clone();

        match (self.baseline(), self.store.session_delta(&iface, sample)) {
            (Some(baseline), Some(delta)) => SessionReport::Readable {
                iface,
                baseline,
                delta,
            },
            _ => SessionReport::Unreadable { iface },
        }
    }

    /// Baseline the active interface at its current counters and re-prime
    /// the rate engine there. Persists, but does not poll.
    fn start_session(&mut self) -> bool {
        let sample = self.read_active();
        let epoch = self.clock.unix_seconds();

        let started = match self
            .store
            .reset_session(&self.context.iface, sample, epoch)
        {
            Ok(started) => started,
            Err(e) => {
                warn!("{e}");
                true
            }
        };

        if let Some(sample) = sample {
            self.context.engine.prime(sample, self.clock.now_ms());
        }

        started
    }
}

/// Poll `monitor` every `config.interval()` until the scheduler is stopped.
///
/// # Panics
///
/// Panics if called outside of a tokio runtime.
pub fn spawn_polling(monitor: &SharedMonitor, config: &MonitorConfig) -> PollScheduler {
    let monitor = Arc::clone(monitor);

    PollScheduler::start(config.interval(), move || {
        monitor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .tick();
    })
}
