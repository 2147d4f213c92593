//! In-memory stand-ins for the page and the server, for native tests

use async_trait::async_trait;
use contracts::shared::verification::{AddressCheckRequest, AddressCheckResponse, ZipCheckResponse};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use crate::shared::api::{AddressVerifier, ApiError, ZipVerifier};
use crate::shared::submission::{FieldSource, FormSession, FormSurface, SubmitOutcome, Submitter};
use crate::shared::validation::CaptchaWidget;

pub const OUT_OF_AREA: &str = "We're sorry, we don't currently service your area.";
pub const ADDRESS_NOT_FOUND: &str = "We couldn't find that address.";

/// Form whose values can be edited between attempts and which records
/// every render it receives
#[derive(Default)]
pub struct FakeForm {
    values: RefCell<HashMap<String, String>>,
    renders: RefCell<Vec<FormSession>>,
}

impl FakeForm {
    pub fn with(values: &[(&str, &str)]) -> Self {
        let form = Self::default();
        for (name, value) in values {
            form.set(name, value);
        }
        form
    }

    pub fn set(&self, name: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn renders(&self) -> Vec<FormSession> {
        self.renders.borrow().clone()
    }

    pub fn last_render(&self) -> FormSession {
        self.renders
            .borrow()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

impl FieldSource for FakeForm {
    fn value(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }
}

impl FormSurface for FakeForm {
    fn render(&self, session: &FormSession) {
        self.renders.borrow_mut().push(session.clone());
    }
}

pub struct FakeCaptcha {
    token: RefCell<Option<String>>,
}

impl FakeCaptcha {
    pub fn unsolved() -> Self {
        Self {
            token: RefCell::new(None),
        }
    }

    pub fn solved() -> Self {
        Self {
            token: RefCell::new(Some("03AGdBq24-token".to_string())),
        }
    }

    pub fn solve(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    pub fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

impl CaptchaWidget for FakeCaptcha {
    fn response_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

/// Serves a fixed list of ZIP codes
pub struct FakeZip {
    serviced: Vec<String>,
    error: Option<ApiError>,
    hold: RefCell<Option<oneshot::Receiver<()>>>,
    queries: RefCell<Vec<String>>,
}

impl FakeZip {
    pub fn serving(zips: &[&str]) -> Self {
        Self {
            serviced: zips.iter().map(|z| z.to_string()).collect(),
            error: None,
            hold: RefCell::new(None),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::serving(&[])
        }
    }

    /// The next query stays pending until the returned sender fires
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.hold.borrow_mut() = Some(rx);
        tx
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ZipVerifier for FakeZip {
    async fn verify_zip(&self, zip: &str) -> Result<ZipCheckResponse, ApiError> {
        self.queries.borrow_mut().push(zip.to_string());
        let hold = self.hold.borrow_mut().take();
        if let Some(rx) = hold {
            let _ = rx.await;
        }
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        let valid = self.serviced.iter().any(|z| z == zip);
        Ok(ZipCheckResponse {
            valid,
            reason: (!valid).then(|| OUT_OF_AREA.to_string()),
        })
    }
}

/// Knows a fixed list of street addresses
pub struct FakeAddress {
    known: Vec<String>,
    error: Option<ApiError>,
    requests: RefCell<Vec<AddressCheckRequest>>,
}

impl FakeAddress {
    pub fn accepting(streets: &[&str]) -> Self {
        Self {
            known: streets.iter().map(|s| s.to_string()).collect(),
            error: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::accepting(&[])
        }
    }

    pub fn requests(&self) -> Vec<AddressCheckRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AddressVerifier for FakeAddress {
    async fn verify_address(
        &self,
        request: &AddressCheckRequest,
    ) -> Result<AddressCheckResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        let valid = self
            .known
            .iter()
            .any(|street| request.full_addr.starts_with(street.as_str()));
        Ok(AddressCheckResponse {
            valid,
            message: (!valid).then(|| ADDRESS_NOT_FOUND.to_string()),
        })
    }
}

/// Counts real submissions and answers with queued outcomes
pub struct FakeSubmitter {
    native: bool,
    outcomes: RefCell<VecDeque<SubmitOutcome>>,
    calls: Cell<usize>,
}

impl FakeSubmitter {
    pub fn native() -> Self {
        Self {
            native: true,
            outcomes: RefCell::new(VecDeque::new()),
            calls: Cell::new(0),
        }
    }

    pub fn fetch(outcomes: Vec<SubmitOutcome>) -> Self {
        Self {
            native: false,
            outcomes: RefCell::new(outcomes.into()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl Submitter for FakeSubmitter {
    fn is_native(&self) -> bool {
        self.native
    }

    async fn submit(&self) -> SubmitOutcome {
        self.calls.set(self.calls.get() + 1);
        let queued = self.outcomes.borrow_mut().pop_front();
        queued.unwrap_or(if self.native {
            SubmitOutcome::Dispatched
        } else {
            SubmitOutcome::Accepted(None)
        })
    }
}

/// Lets a test keep a handle on the submitter it hands to a controller
#[async_trait(?Send)]
impl Submitter for std::rc::Rc<FakeSubmitter> {
    fn is_native(&self) -> bool {
        Submitter::is_native(&**self)
    }

    async fn submit(&self) -> SubmitOutcome {
        Submitter::submit(&**self).await
    }
}
