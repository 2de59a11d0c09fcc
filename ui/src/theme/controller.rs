use super::context::ThemeContext;
use super::persistence::ThemePersistence;
use super::status_bar::{Platform, StatusBar, StatusBarSync};
use super::types::{ThemeMode, ThemeSnapshot};
use std::sync::{Arc, Mutex, MutexGuard};
use storage::{KeyValueStore, TaskPool};
use tokio::sync::watch;

/// Collaborators handed to [`ThemeController::new`].
pub struct ThemeDeps {
    pub store: Arc<dyn KeyValueStore>,
    pub status_bar: Arc<dyn StatusBar>,
    pub platform: Platform,
    pub max_concurrent_writes: usize,
}

impl ThemeDeps {
    pub fn new(store: Arc<dyn KeyValueStore>, status_bar: Arc<dyn StatusBar>) -> Self {
        Self {
            store,
            status_bar,
            platform: Platform::default(),
            max_concurrent_writes: 1,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_max_concurrent_writes(mut self, max_concurrent_writes: usize) -> Self {
        self.max_concurrent_writes = max_concurrent_writes;
        self
    }
}

/// Owns the process-wide theme mode.
///
/// Create one controller at application start and hand clones of it (or an
/// `Arc<dyn ThemeContext>`) to consumers; clones share the same state.
///
/// Reads and mutations are synchronous. Restoring the saved mode and
/// persisting changes run as background tasks whose failures are logged and
/// never reach the caller.
#[derive(Clone)]
pub struct ThemeController {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<ThemeSnapshot>,
    control: Mutex<ControlState>,
    persistence: ThemePersistence,
    writer: TaskPool,
}

struct ControlState {
    status_bar: StatusBarSync,
    changed_during_load: bool,
}

impl ThemeController {
    /// Creates the controller in its loading state with the default mode and
    /// starts restoring the saved mode.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(deps: ThemeDeps) -> Self {
        let initial = ThemeSnapshot::new(ThemeMode::default(), true);
        let (state, _) = watch::channel(initial);

        let mut status_bar = StatusBarSync::new(deps.platform, deps.status_bar);
        status_bar.apply(&initial);

        let inner = Arc::new(Inner {
            state,
            control: Mutex::new(ControlState {
                status_bar,
                changed_during_load: false,
            }),
            persistence: ThemePersistence::new(deps.store),
            writer: TaskPool::new(deps.max_concurrent_writes),
        });

        tokio::spawn(Inner::restore(inner.clone()));
        log::debug!("Theme controller created, restoring saved theme mode");

        Self { inner }
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        *self.inner.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.inner.state.subscribe()
    }

    /// Switches to `mode` immediately and persists it in the background.
    pub fn set_theme(&self, mode: ThemeMode) {
        let (previous, current) = self.inner.mutate(|_| mode);
        self.log_change(previous, current);
        self.persist();
    }

    /// Flips between light and dark.
    pub fn toggle_theme(&self) {
        let (previous, current) = self.inner.mutate(ThemeMode::toggled);
        self.log_change(previous, current);
        self.persist();
    }

    /// Resolves once the saved mode has been restored, or the restore failed.
    pub async fn wait_until_loaded(&self) {
        let mut rx = self.subscribe();
        if rx.wait_for(|snapshot| !snapshot.is_loading()).await.is_err() {
            log::warn!("Theme state closed before loading finished");
        }
    }

    /// Waits for every persistence write issued so far to finish.
    pub async fn flush(&self) {
        self.inner.writer.wait_idle().await;
    }

    fn log_change(&self, previous: ThemeMode, current: ThemeMode) {
        if previous == current {
            log::debug!("Theme mode unchanged: {current}");
        } else {
            log::info!("Theme mode changed: {previous} -> {current}");
        }
    }

    /// Queues a write of the mode that is current when the write runs, so a
    /// write that starts after the last mutation always stores the final mode.
    fn persist(&self) {
        let inner = self.inner.clone();
        self.inner.writer.execute(async move {
            let mode = inner.state.borrow().theme_mode();
            if let Err(e) = inner.persistence.save_mode(mode).await {
                log::error!("Failed to persist theme mode '{mode}': {e}");
            }
        });
    }
}

impl Inner {
    fn lock_control(&self) -> MutexGuard<'_, ControlState> {
        match self.control.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("Theme control lock poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    /// Applies `next` to the current mode. Returns the previous and new mode.
    fn mutate(&self, next: impl FnOnce(ThemeMode) -> ThemeMode) -> (ThemeMode, ThemeMode) {
        let mut control = self.lock_control();

        let current = *self.state.borrow();
        if current.is_loading() {
            control.changed_during_load = true;
        }

        let mode = next(current.theme_mode());
        let snapshot = self.publish(ThemeSnapshot::new(mode, current.is_loading()));
        control.status_bar.apply(&snapshot);

        (current.theme_mode(), mode)
    }

    fn publish(&self, next: ThemeSnapshot) -> ThemeSnapshot {
        self.state.send_if_modified(|snapshot| {
            if *snapshot == next {
                false
            } else {
                *snapshot = next;
                true
            }
        });
        next
    }

    async fn restore(inner: Arc<Inner>) {
        let restored = match inner.persistence.load_mode().await {
            Ok(Some(mode)) => Some(mode),
            Ok(None) => {
                log::info!("No saved theme mode, using default '{}'", ThemeMode::default());
                None
            }
            Err(e) => {
                log::warn!("Failed to load saved theme mode, using default: {e}");
                None
            }
        };
        inner.finish_loading(restored);
    }

    fn finish_loading(&self, restored: Option<ThemeMode>) {
        let mut control = self.lock_control();
        let current = self.state.borrow().theme_mode();

        let mode = match restored {
            Some(mode) if control.changed_during_load => {
                log::info!("Keeping theme mode '{current}' set during load over saved '{mode}'");
                current
            }
            Some(mode) => {
                log::info!("Restored theme mode '{mode}'");
                mode
            }
            None => current,
        };

        let snapshot = self.publish(ThemeSnapshot::new(mode, false));
        control.status_bar.apply(&snapshot);
    }
}

impl ThemeContext for ThemeController {
    fn snapshot(&self) -> ThemeSnapshot {
        ThemeController::snapshot(self)
    }

    fn set_theme(&self, mode: ThemeMode) {
        ThemeController::set_theme(self, mode)
    }

    fn toggle_theme(&self) {
        ThemeController::toggle_theme(self)
    }

    fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        ThemeController::subscribe(self)
    }
}
