use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::api::ApiClient;
use crate::config::{API_BASE, TOAST_MS};
use crate::forms::{Effects, Notice, Redirect};
use crate::http::BrowserTransport;
use crate::session::{self, BrowserStorage, Session, SessionStore};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Application-wide state, provided via Leptos context.
///
/// The session is read from storage once in [`AppState::provide`]; after
/// that only [`AppState::sign_in`] and [`AppState::sign_out`] change it.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signals ---
    pub session: ReadSignal<Option<Session>>,
    pub toasts: ReadSignal<Vec<Toast>>,

    // --- Write signals (private: go through the methods below) ---
    set_session: WriteSignal<Option<Session>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast: StoredValue<u64>,
}

impl AppState {
    /// Create the state, restore any stored session, and provide it in the
    /// current Leptos context.
    pub fn provide() -> Self {
        let restored = session::restore(&BrowserStorage);
        if let Some(user) = restored.as_ref().and_then(Session::user_id) {
            log::debug!("Restored session for user {user}");
        }

        let (session, set_session) = signal(restored);
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());

        let state = Self {
            session,
            toasts,
            set_session,
            set_toasts,
            next_toast: StoredValue::new(0),
        };

        provide_context(state);
        state
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(API_BASE, BrowserTransport)
    }

    /// Show a toast that disappears after [`TOAST_MS`].
    pub fn notify(&self, notice: Notice) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id + 1);
        self.set_toasts.update(|t| t.push(Toast { id, notice }));

        let state = *self;
        Timeout::new(TOAST_MS, move || state.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.set_toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    /// Called after the login flow has persisted the payload.
    pub fn sign_in(&self, session: Session) {
        self.set_session.set(Some(session));
    }

    pub fn sign_out(&self) {
        BrowserStorage.clear();
        self.set_session.set(None);
        log::info!("Signed out");
    }
}

/// [`Effects`] for a routed page: toasts through [`AppState`], navigation
/// through the router, delayed with a browser timer when asked to.
#[derive(Clone)]
pub struct PageEffects<N> {
    state: AppState,
    navigate: N,
}

impl<N> PageEffects<N>
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(state: AppState, navigate: N) -> Self {
        Self { state, navigate }
    }
}

impl<N> Effects for PageEffects<N>
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn notify(&self, notice: Notice) {
        self.state.notify(notice);
    }

    fn navigate(&self, redirect: Redirect) {
        let navigate = self.navigate.clone();
        if redirect.delay_ms == 0 {
            navigate(&redirect.path, NavigateOptions::default());
        } else {
            Timeout::new(redirect.delay_ms, move || {
                navigate(&redirect.path, NavigateOptions::default());
            })
            .forget();
        }
    }

    fn signed_in(&self, session: Session) {
        self.state.sign_in(session);
    }
}
