use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use std::fmt::Display;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AlertKind {
    Success,
    Warning,
    Failure,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

/// Handle to the single blocking alert shown above every screen.
#[derive(Clone, Copy)]
pub struct AlertHandle {
    current: Signal<Option<Alert>>,
}

impl AlertHandle {
    /// Must be called from within a component, since it allocates a signal
    /// owned by the current scope.
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
        }
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(AlertKind::Success, title.into(), message.into());
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let (title, message) = (title.into(), message.into());
        warn!("{title}: {message}");
        self.show(AlertKind::Warning, title, message);
    }

    /// Logs the error and surfaces it to the operator.
    pub fn failure(&mut self, title: impl Into<String>, error: &dyn Display) {
        let title = title.into();
        warn!("{title}: {error}");
        self.show(AlertKind::Failure, title, error.to_string());
    }

    /// Passes `Ok` values through. Errors are surfaced and mapped to `None`.
    pub fn check<T, E: Display>(&mut self, title: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.failure(title, &e);
                None
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }

    /// Call `.read()` on this in a component to subscribe to changes.
    pub fn current(&self) -> Signal<Option<Alert>> {
        self.current
    }

    fn show(&mut self, kind: AlertKind, title: String, message: String) {
        self.current.set(Some(Alert {
            kind,
            title,
            message,
        }));
    }
}

pub fn use_alert() -> AlertHandle {
    use_context::<AlertHandle>()
}
