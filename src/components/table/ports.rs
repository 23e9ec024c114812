//! Table Ports
//!
//! Display-side collaborators injected into the table controller.

use super::state::Page;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "OK",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// Receives every page the controller produces
pub trait Renderer: Send + Sync {
    fn render(&self, page: &Page);
}

/// Receives user-visible failures and confirmations
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str, severity: Severity);
}

/// Renderer that discards pages
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _page: &Page) {}
}

impl<F> Renderer for F
where
    F: Fn(&Page) + Send + Sync,
{
    fn render(&self, page: &Page) {
        self(page)
    }
}
