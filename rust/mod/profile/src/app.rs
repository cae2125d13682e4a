use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::handlers::ProfileBff;
use crate::outcome::Outcome;
use crate::request::{LoadProfileReq, Request};
use crate::state::{FormId, PasswordState, ProfileState};
use crate::store::{FormChange, FormStore, SubscriptionId};

/// Which forms the rendered page contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub profile_form: bool,
    pub password_form: bool,
}

impl Page {
    /// A page with both forms.
    pub fn full() -> Self {
        Self {
            profile_form: true,
            password_form: true,
        }
    }

    pub fn has(&self, form: FormId) -> bool {
        match form {
            FormId::Profile => self.profile_form,
            FormId::Password => self.password_form,
        }
    }
}

/// Profile page controller.
///
/// Three primitives:
/// - `mount(page)` attaches handlers for the forms present and loads the profile
/// - `emit(request)` routes a request to its handler
/// - `subscribe(form)` observes state changes
///
/// Requests for a form the page does not contain are silent no-ops, as
/// are requests before `mount`.
pub struct ProfileApp {
    store: Arc<FormStore>,
    bff: Arc<ProfileBff>,
    page: RwLock<Option<Page>>,
}

impl ProfileApp {
    pub fn new(bff: ProfileBff) -> Self {
        Self {
            store: Arc::new(FormStore::new()),
            bff: Arc::new(bff),
            page: RwLock::new(None),
        }
    }

    /// Attach to a page, then load the profile if the page has the profile form.
    pub async fn mount(&self, page: Page) {
        *self.page.write().unwrap_or_else(|e| e.into_inner()) = Some(page);
        debug!(?page, "mounted");
        if page.profile_form {
            self.emit(LoadProfileReq).await;
        }
    }

    fn is_attached(&self, form: FormId) -> bool {
        self.page
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some_and(|page| page.has(form))
    }

    // ====================================================================
    // Requests
    // ====================================================================

    /// Emit a request and wait for its handler to complete.
    ///
    /// Returns the outcome for submissions that ran to completion; `None`
    /// for loads, edits, dropped duplicates and detached forms.
    pub async fn emit(&self, req: impl Into<Request>) -> Option<Outcome> {
        let req = req.into();
        if !self.is_attached(req.form()) {
            debug!(path = req.path(), "form not on page, request ignored");
            return None;
        }

        let store = self.store.as_ref();
        match req {
            Request::LoadProfile(_) => {
                self.bff.handle_load_profile(store).await;
                None
            }
            Request::SubmitProfile(_) => self.bff.handle_submit_profile(store).await,
            Request::SubmitPassword(_) => self.bff.handle_submit_password(store).await,
            Request::EditProfile(edit) => {
                self.bff.handle_edit_profile(&edit, store).await;
                None
            }
            Request::EditPassword(edit) => {
                self.bff.handle_edit_password(&edit, store).await;
                None
            }
        }
    }

    // ====================================================================
    // State
    // ====================================================================

    pub fn store(&self) -> &Arc<FormStore> {
        &self.store
    }

    pub fn profile(&self) -> ProfileState {
        self.store.profile()
    }

    pub fn password(&self) -> PasswordState {
        self.store.password()
    }

    pub fn subscribe<F>(&self, form: Option<FormId>, handler: F) -> SubscriptionId
    where
        F: Fn(&FormChange) + Send + Sync + 'static,
    {
        self.store.subscribe(form, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.store.unsubscribe(id)
    }
}
