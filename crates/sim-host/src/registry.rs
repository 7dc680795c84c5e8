//! Session registry: maps session ids to isolated [`SessionStore`]s and binds
//! the active session to the current execution context.
//!
//! Scoped binding uses a tokio task-local holding the session's handle, so
//! both synchronous closures ([`SessionRegistry::sync_scope`]) and futures
//! ([`SessionRegistry::scope`]) carry their own store even after the registry
//! evicts or disposes the id. [`SessionRegistry::activate`] binds a session to
//! the calling thread until replaced or released. Code running outside any
//! binding resolves to the registry's single default session.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use indexmap::IndexMap;
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use sim_store::SessionStore;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::HostConfig;

pub type SharedStore = Arc<Mutex<SessionStore>>;

tokio::task_local! {
    static ACTIVE_SESSION: SessionHandle;
}

static GLOBAL: Lazy<SessionRegistry> = Lazy::new(|| {
    let config = HostConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring invalid session environment, using defaults");
        HostConfig::default()
    });
    SessionRegistry::new(config)
});

/// Process-wide registry, configured from the environment on first use.
pub fn global() -> &'static SessionRegistry {
    &GLOBAL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Id of the fallback session used when nothing is bound.
    pub const DEFAULT: SessionId = SessionId(Uuid::nil());

    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Session bound to the current execution context, if any.
    pub fn current() -> Option<SessionId> {
        ACTIVE_SESSION.try_with(SessionHandle::id).ok()
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Cheap, cloneable reference to one session's store.
#[derive(Clone)]
pub struct SessionHandle {
    id: SessionId,
    store: SharedStore,
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("id", &self.id)
            .field("refs", &Arc::strong_count(&self.store))
            .finish()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SessionHandle {}

impl SessionHandle {
    fn new(id: SessionId, store: SharedStore) -> Self {
        Self { id, store }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn is_default(&self) -> bool {
        self.id.is_default()
    }

    /// True when both handles point at the same store allocation.
    pub fn same_store(&self, other: &SessionHandle) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    pub fn with<R>(&self, f: impl FnOnce(&SessionStore) -> R) -> R {
        f(&lock(&self.store))
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        f(&mut lock(&self.store))
    }

    /// Copy of the store as it is right now.
    pub fn snapshot(&self) -> SessionStore {
        self.with(SessionStore::clone)
    }
}

pub struct SessionRegistry {
    sessions: Mutex<IndexMap<SessionId, SharedStore>>,
    activated: Mutex<HashMap<ThreadId, SessionHandle>>,
    default_store: OnceCell<SharedStore>,
    config: HostConfig,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

impl fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("sessions", &self.len())
            .field("max_sessions", &self.config.max_sessions)
            .finish()
    }
}

impl SessionRegistry {
    pub fn new(config: HostConfig) -> Self {
        Self {
            sessions: Mutex::new(IndexMap::new()),
            activated: Mutex::new(HashMap::new()),
            default_store: OnceCell::new(),
            config,
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Allocates a session whose store starts from the configured seed.
    pub fn init_session(&self) -> SessionHandle {
        let id = SessionId::new();
        let store = self.fresh_store();
        let evicted = {
            let mut sessions = lock(&self.sessions);
            sessions.insert(id, store.clone());
            let mut evicted = Vec::new();
            if let Some(max) = self.config.max_sessions {
                while sessions.len() > max.max(1) {
                    match sessions.shift_remove_index(0) {
                        Some((old, _)) => evicted.push(old),
                        None => break,
                    }
                }
            }
            evicted
        };
        for old in evicted {
            debug!(session = %old, "evicted oldest session");
        }
        debug!(session = %id, "session initialized");
        SessionHandle::new(id, store)
    }

    pub fn get(&self, id: SessionId) -> Option<SessionHandle> {
        if id.is_default() {
            return Some(self.default_session());
        }
        lock(&self.sessions)
            .get(&id)
            .map(|store| SessionHandle::new(id, store.clone()))
    }

    /// The fallback session; every call returns the same store.
    pub fn default_session(&self) -> SessionHandle {
        let store = self.default_store.get_or_init(|| self.fresh_store());
        SessionHandle::new(SessionId::DEFAULT, store.clone())
    }

    /// Session bound to the calling context: the innermost scope, then the
    /// thread's activated session, then the default session.
    pub fn current(&self) -> SessionHandle {
        if let Ok(session) = ACTIVE_SESSION.try_with(SessionHandle::clone) {
            return session;
        }
        lock(&self.activated)
            .get(&thread::current().id())
            .cloned()
            .unwrap_or_else(|| self.default_session())
    }

    /// Makes `session` current for the calling thread outside any scope.
    /// Returns the previously activated session.
    ///
    /// Tasks on a multi-threaded runtime can move between threads; bind them
    /// with [`SessionRegistry::scope`] instead.
    pub fn activate(&self, session: &SessionHandle) -> Option<SessionHandle> {
        debug!(session = %session.id(), "session activated for thread");
        lock(&self.activated).insert(thread::current().id(), session.clone())
    }

    /// Clears the calling thread's activated session.
    pub fn deactivate(&self) -> Option<SessionHandle> {
        lock(&self.activated).remove(&thread::current().id())
    }

    /// Runs `f` with `session` bound as the current session.
    pub fn sync_scope<R>(&self, session: &SessionHandle, f: impl FnOnce() -> R) -> R {
        ACTIVE_SESSION.sync_scope(session.clone(), f)
    }

    /// Drives `fut` with `session` bound as the current session.
    pub async fn scope<F: Future>(&self, session: &SessionHandle, fut: F) -> F::Output {
        ACTIVE_SESSION.scope(session.clone(), fut).await
    }

    /// Initializes a session and runs `f` inside it.
    pub fn run_session<R>(&self, f: impl FnOnce(&SessionHandle) -> R) -> R {
        let session = self.init_session();
        self.sync_scope(&session, || f(&session))
    }

    /// Drops the registry's reference to a session. Outstanding handles and
    /// bindings keep their store alive but it can no longer be resolved by id.
    pub fn dispose(&self, id: SessionId) -> bool {
        let removed = lock(&self.sessions).shift_remove(&id).is_some();
        if removed {
            debug!(session = %id, "session disposed");
        }
        removed
    }

    /// Number of live (non-default) sessions.
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fresh_store(&self) -> SharedStore {
        Arc::new(Mutex::new(SessionStore::new(&self.config.seed)))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
