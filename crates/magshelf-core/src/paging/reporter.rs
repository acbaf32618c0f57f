use std::cell::RefCell;

use crate::error::AttachmentError;

/// Sink for recoverable render failures
pub trait Reporter {
    fn report(&self, error: &AttachmentError);
}

/// Logs attachment failures through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, error: &AttachmentError) {
        tracing::error!(
            container = %error.id,
            kind = %error.kind,
            "Render target not found, skipping"
        );
    }
}

/// Keeps every reported failure in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: RefCell<Vec<AttachmentError>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<AttachmentError> {
        self.reports.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, error: &AttachmentError) {
        self.reports.borrow_mut().push(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContainerKind;

    #[test]
    fn test_memory_reporter_records() {
        let reporter = MemoryReporter::new();
        assert!(reporter.is_empty());

        reporter.report(&AttachmentError::new(ContainerKind::List, "js-magazine-list"));
        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, "js-magazine-list");
        assert_eq!(
            reports[0].to_string(),
            "list container 'js-magazine-list' not found in document"
        );

        reporter.clear();
        assert!(reporter.is_empty());
    }
}
