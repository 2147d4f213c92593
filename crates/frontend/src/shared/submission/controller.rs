use std::cell::RefCell;
use std::rc::Rc;

use super::session::{FormSession, Phase};
use super::step::{FailureKind, StepFailure, ValidationStep};
use super::surface::{FormSurface, SubmitOutcome, Submitter};

/// What the submit event handler should do with the event it just received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDisposition {
    /// The real submission: leave the event alone
    PassThrough,
    /// Prevent the default and do nothing else
    Suppress,
    /// Prevent the default and spawn [`SubmissionController::run`]
    Validate,
}

struct Inner<S, D> {
    name: &'static str,
    surface: S,
    submitter: D,
    steps: Vec<Box<dyn ValidationStep>>,
    session: RefCell<FormSession>,
}

/// Drives one form: runs the ordered validation steps and then performs
/// exactly one real submission.
///
/// Clones share the same session, so the controller can be captured by the
/// submit handler and by the task running the pipeline.
pub struct SubmissionController<S, D> {
    inner: Rc<Inner<S, D>>,
}

impl<S, D> Clone for SubmissionController<S, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: FormSurface, D: Submitter> SubmissionController<S, D> {
    pub fn new(
        name: &'static str,
        surface: S,
        submitter: D,
        steps: Vec<Box<dyn ValidationStep>>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                name,
                surface,
                submitter,
                steps,
                session: RefCell::new(FormSession::default()),
            }),
        }
    }

    pub fn phase(&self) -> Phase {
        self.inner.session.borrow().phase
    }

    pub fn is_guarded(&self) -> bool {
        self.inner.session.borrow().submit_guard
    }

    pub fn session(&self) -> FormSession {
        self.inner.session.borrow().clone()
    }

    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.inner.steps.iter().map(|s| s.name()).collect()
    }

    /// First thing every submit event goes through.
    ///
    /// Once the guard is set the native re-submission is let through without
    /// running any step. While a pipeline is in flight further events are
    /// swallowed, so two pipelines never overlap.
    pub fn intercept(&self) -> SubmitDisposition {
        {
            let mut session = self.inner.session.borrow_mut();
            if session.submit_guard {
                return if self.inner.submitter.is_native() {
                    SubmitDisposition::PassThrough
                } else {
                    SubmitDisposition::Suppress
                };
            }
            if session.phase == Phase::Validating {
                log::debug!("[{}] submit ignored, validation in flight", self.inner.name);
                return SubmitDisposition::Suppress;
            }
            session.phase = Phase::Validating;
            session.pending_errors.clear();
            session.notice = None;
        }
        self.render();
        SubmitDisposition::Validate
    }

    /// Run the pipeline started by [`intercept`](Self::intercept) and, if
    /// every step passes, the real submission. Returns the phase reached.
    pub async fn run(&self) -> Phase {
        if self.phase() != Phase::Validating {
            return self.phase();
        }

        for step in &self.inner.steps {
            log::debug!("[{}] step {}", self.inner.name, step.name());
            if let Err(failure) = step.check(&self.inner.surface).await {
                self.fail(step.name(), failure);
                return Phase::Failed;
            }
        }

        self.update(|session| {
            session.submit_guard = true;
            session.phase = Phase::Submitting;
        });
        log::info!("[{}] all steps passed, submitting", self.inner.name);

        match self.inner.submitter.submit().await {
            SubmitOutcome::Dispatched => Phase::Submitting,
            SubmitOutcome::Accepted(notice) => {
                self.update(|session| {
                    session.phase = Phase::Submitted;
                    session.notice = notice;
                });
                Phase::Submitted
            }
            SubmitOutcome::Rejected(errors) => {
                log::warn!(
                    "[{}] server rejected submission: {:?}",
                    self.inner.name,
                    errors
                );
                // A rejected submission ends the attempt; the next click starts over.
                self.update(|session| {
                    session.submit_guard = false;
                    session.phase = Phase::Failed;
                    session.set_errors(errors);
                });
                Phase::Failed
            }
        }
    }

    /// `intercept` followed by `run` when the event starts a new attempt
    pub async fn attempt(&self) -> SubmitDisposition {
        let disposition = self.intercept();
        if disposition == SubmitDisposition::Validate {
            self.run().await;
        }
        disposition
    }

    fn fail(&self, step: &'static str, failure: StepFailure) {
        match failure.kind {
            FailureKind::Transport => log::error!(
                "[{}] step {} could not complete: {:?}",
                self.inner.name,
                step,
                failure.errors
            ),
            _ => log::debug!(
                "[{}] step {} failed: {:?}",
                self.inner.name,
                step,
                failure.errors
            ),
        }
        self.update(|session| {
            session.phase = Phase::Failed;
            session.set_errors(failure.errors);
        });
    }

    fn update(&self, f: impl FnOnce(&mut FormSession)) {
        f(&mut self.inner.session.borrow_mut());
        self.render();
    }

    fn render(&self) {
        let snapshot = self.inner.session.borrow().clone();
        self.inner.surface.render(&snapshot);
    }
}
