use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::state::{FormId, FormPhase, PasswordState, ProfileState};

/// Handle returned by [`FormStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Snapshot delivered to subscribers after every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormChange {
    Profile(ProfileState),
    Password(PasswordState),
}

impl FormChange {
    pub fn form(&self) -> FormId {
        match self {
            FormChange::Profile(_) => FormId::Profile,
            FormChange::Password(_) => FormId::Password,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FormChange::Profile(s) => &s.message,
            FormChange::Password(s) => &s.message,
        }
    }
}

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&FormChange) + Send + Sync>;

#[derive(Clone)]
struct HandlerEntry {
    id: SubscriptionId,
    /// `None` observes both forms.
    form: Option<FormId>,
    handler: ChangeHandler,
}

/// Holds the state of both forms and notifies subscribers on change.
///
/// - `profile()` / `password()` read a snapshot.
/// - `update_profile` / `update_password` mutate and notify.
/// - `begin_submit` takes the per-form in-flight guard.
///
/// Subscribers run synchronously on the writing task, after the write
/// lock is released, so they may read the store.
pub struct FormStore {
    profile: RwLock<ProfileState>,
    password: RwLock<PasswordState>,
    handlers: RwLock<Vec<HandlerEntry>>,
    next_id: AtomicU64,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            profile: RwLock::new(ProfileState::default()),
            password: RwLock::new(PasswordState::default()),
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // ====================================================================
    // Read
    // ====================================================================

    pub fn profile(&self) -> ProfileState {
        self.profile.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn password(&self) -> PasswordState {
        self.password.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn phase(&self, form: FormId) -> FormPhase {
        match form {
            FormId::Profile => self.profile.read().unwrap_or_else(|e| e.into_inner()).phase,
            FormId::Password => self.password.read().unwrap_or_else(|e| e.into_inner()).phase,
        }
    }

    // ====================================================================
    // Write
    // ====================================================================

    /// Mutate the profile state, then notify subscribers.
    pub fn update_profile<R>(&self, f: impl FnOnce(&mut ProfileState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.profile.write().unwrap_or_else(|e| e.into_inner());
            let result = f(&mut state);
            (result, state.clone())
        };
        self.notify(FormChange::Profile(snapshot));
        result
    }

    /// Mutate the password state, then notify subscribers.
    pub fn update_password<R>(&self, f: impl FnOnce(&mut PasswordState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.password.write().unwrap_or_else(|e| e.into_inner());
            let result = f(&mut state);
            (result, state.clone())
        };
        self.notify(FormChange::Password(snapshot));
        result
    }

    /// Move a form from `Idle` to `Submitting`.
    ///
    /// Returns `None`, without notifying, if a submission is already in
    /// flight. The check and the transition happen under one write lock.
    /// The returned guard puts the form back to `Idle` when dropped unless
    /// [`SubmitGuard::complete`] was called.
    pub fn begin_submit(&self, form: FormId) -> Option<SubmitGuard<'_>> {
        let change = match form {
            FormId::Profile => {
                let mut state = self.profile.write().unwrap_or_else(|e| e.into_inner());
                if state.phase == FormPhase::Submitting {
                    return None;
                }
                state.phase = FormPhase::Submitting;
                FormChange::Profile(state.clone())
            }
            FormId::Password => {
                let mut state = self.password.write().unwrap_or_else(|e| e.into_inner());
                if state.phase == FormPhase::Submitting {
                    return None;
                }
                state.phase = FormPhase::Submitting;
                FormChange::Password(state.clone())
            }
        };
        self.notify(change);
        Some(SubmitGuard {
            store: self,
            form,
            armed: true,
        })
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Observe changes to one form, or to both with `None`.
    pub fn subscribe<F>(&self, form: Option<FormId>, handler: F) -> SubscriptionId
    where
        F: Fn(&FormChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut handlers = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        handlers.push(HandlerEntry {
            id,
            form,
            handler: Arc::new(handler),
        });
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut handlers = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        handlers.retain(|entry| entry.id != id);
    }

    fn notify(&self, change: FormChange) {
        let form = change.form();
        let matching: Vec<HandlerEntry> = {
            let handlers = self.handlers.read().unwrap_or_else(|e| e.into_inner());
            handlers
                .iter()
                .filter(|entry| entry.form.map_or(true, |f| f == form))
                .cloned()
                .collect()
        };
        for entry in matching {
            (entry.handler)(&change);
        }
    }
}

/// In-flight marker for one form, returned by [`FormStore::begin_submit`].
///
/// Dropping it without `complete` (an aborted or timed-out handler) resets
/// the form to `Idle` so later submissions are not locked out.
#[must_use = "dropping the guard ends the submission immediately"]
pub struct SubmitGuard<'a> {
    store: &'a FormStore,
    form: FormId,
    armed: bool,
}

impl SubmitGuard<'_> {
    pub fn form(&self) -> FormId {
        self.form
    }

    /// Mark the submission finished. The caller has already written the
    /// final state, `Idle` phase included.
    pub fn complete(mut self) {
        self.armed = false;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match self.form {
            FormId::Profile => self.store.update_profile(|s| s.phase = FormPhase::Idle),
            FormId::Password => self.store.update_password(|s| s.phase = FormPhase::Idle),
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
