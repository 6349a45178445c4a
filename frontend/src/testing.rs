//! In-memory stand-ins for the browser: a scripted transport, a session
//! store that counts writes, and effects that record what a form did.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::forms::{Effects, Notice, Redirect};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::session::{Session, SessionStore};

#[derive(Clone, Default)]
pub struct StubTransport {
    inner: Rc<RefCell<StubInner>>,
}

#[derive(Default)]
struct StubInner {
    replies: VecDeque<Result<HttpResponse, String>>,
    requests: Vec<HttpRequest>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.inner.borrow_mut().replies.push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.inner
            .borrow_mut()
            .replies
            .push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner
            .replies
            .pop_front()
            .unwrap_or_else(|| Err("no stubbed reply".to_string()))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entry: RefCell<Option<String>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn with_entry(raw: &str) -> Self {
        Self {
            entry: RefCell::new(Some(raw.to_string())),
            writes: RefCell::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.entry.borrow().clone()
    }

    fn save(&self, raw: &str) -> Result<(), String> {
        *self.entry.borrow_mut() = Some(raw.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn clear(&self) {
        *self.entry.borrow_mut() = None;
    }
}

#[derive(Default)]
pub struct RecordingEffects {
    pub notices: RefCell<Vec<Notice>>,
    pub redirects: RefCell<Vec<Redirect>>,
    pub sessions: RefCell<Vec<Session>>,
}

impl Effects for RecordingEffects {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn navigate(&self, redirect: Redirect) {
        self.redirects.borrow_mut().push(redirect);
    }

    fn signed_in(&self, session: Session) {
        self.sessions.borrow_mut().push(session);
    }
}
