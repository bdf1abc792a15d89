//! Recording implementations of [`DiagSink`] and [`TraceSink`].

use std::cell::RefCell;
use std::rc::Rc;

use lantern_core::{CallSite, DiagSink, TraceSink};

/// One recorded diagnostic report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub site: CallSite,
}

/// A [`DiagSink`] that records every report.
///
/// Clones share storage: keep one handle in the test, box the other into
/// the hooks of the component under test.
#[derive(Clone, Default)]
pub struct CollectingSink {
    reports: Rc<RefCell<Vec<Report>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports recorded so far.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    /// Messages only, in recording order.
    pub fn messages(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl DiagSink for CollectingSink {
    fn report(&mut self, message: &str, site: CallSite) {
        self.reports.borrow_mut().push(Report {
            message: message.to_string(),
            site,
        });
    }
}

/// A [`TraceSink`] that records every call site.
///
/// Clones share storage, like [`CollectingSink`].
#[derive(Clone, Default)]
pub struct CollectingTrace {
    sites: Rc<RefCell<Vec<CallSite>>>,
}

impl CollectingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded call sites, oldest first.
    pub fn sites(&self) -> Vec<CallSite> {
        self.sites.borrow().clone()
    }

    /// Recorded function names, oldest first.
    pub fn functions(&self) -> Vec<&'static str> {
        self.sites.borrow().iter().map(|s| s.function).collect()
    }

    pub fn len(&self) -> usize {
        self.sites.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.borrow().is_empty()
    }
}

impl TraceSink for CollectingTrace {
    fn record(&mut self, site: CallSite) {
        self.sites.borrow_mut().push(site);
    }
}
