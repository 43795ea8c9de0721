//! Top-level error boundary.
//!
//! Section renderers run through [`ErrorBoundary::render`]. The first fault
//! (returned error or panic) trips the boundary; from then on every call
//! yields the fallback panel and no section renders again until the boundary
//! is recreated.
//!
//! Panics still run the process panic hook before `catch_unwind` sees them.
//! The terminal runtime's hook restores the terminal (leaves the alternate
//! screen, drops raw mode), which would leave the fallback panel drawn on a
//! cooked terminal. [`install_boundary_panic_hook`] wraps the current hook so
//! panics raised inside [`ErrorBoundary::render`] skip it.

use std::cell::{Cell, RefCell};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{debug, error};

use super::nav::Section;

pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const FALLBACK_BODY: &str = "Please refresh the page to try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderFault {
    #[error("fault injected into section '{}'", .0.id())]
    Injected(Section),

    #[error("'{part}' panicked: {message}")]
    Panic { part: String, message: String },

    #[error("'{part}' is missing {what}")]
    Missing { part: String, what: String },
}

impl RenderFault {
    /// Fail `section` when it is the injection target.
    pub fn check_injected(target: Option<Section>, section: Section) -> Result<(), RenderFault> {
        if target == Some(section) {
            Err(RenderFault::Injected(section))
        } else {
            Ok(())
        }
    }
}

/// Marker returned once the boundary has tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback;

#[derive(Debug, Default)]
pub struct ErrorBoundary {
    fault: RefCell<Option<RenderFault>>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tripped(&self) -> bool {
        self.fault.borrow().is_some()
    }

    pub fn fault(&self) -> Option<RenderFault> {
        self.fault.borrow().clone()
    }

    /// Run one part of the page. `part` names it in logs and faults.
    pub fn render<T>(
        &self,
        part: &str,
        f: impl FnOnce() -> Result<T, RenderFault>,
    ) -> Result<T, Fallback> {
        if self.is_tripped() {
            return Err(Fallback);
        }
        let outcome = match guarded(|| catch_unwind(AssertUnwindSafe(f))) {
            Ok(result) => result,
            Err(payload) => Err(RenderFault::Panic {
                part: part.to_string(),
                message: panic_message(payload.as_ref()),
            }),
        };
        outcome.map_err(|fault| {
            error!(
                component = "boundary",
                part,
                error = %fault,
                "Render fault; showing fallback panel"
            );
            self.fault.borrow_mut().get_or_insert(fault);
            Fallback
        })
    }
}

thread_local! {
    static GUARDED: Cell<bool> = const { Cell::new(false) };
}

fn guarded<R>(f: impl FnOnce() -> R) -> R {
    let outer = GUARDED.with(|g| g.replace(true));
    let result = f();
    GUARDED.with(|g| g.set(outer));
    result
}

/// Wrap the installed panic hook so panics raised inside
/// [`ErrorBoundary::render`] skip it. Call after the terminal session has installed its own
/// hook; later calls are no-ops.
pub fn install_boundary_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if GUARDED.with(Cell::get) {
                debug!(component = "boundary", panic = %info, "Panic inside error boundary");
            } else {
                previous(info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
