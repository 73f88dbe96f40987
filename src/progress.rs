//! Progress reporting and cooperative cancellation.
//!
//! Readers and writers poll the monitor between sections. A canceled monitor
//! aborts the operation with `Canceled`; nothing partially built is returned.

/// Receives progress updates and may request cancellation
pub trait ProgressMonitor {
    /// Called before a section is processed
    fn sub_task(&mut self, _name: &str) {}

    /// Whether the operation should stop at the next section boundary
    fn is_canceled(&self) -> bool {
        false
    }
}

/// Monitor that ignores progress and never cancels
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressMonitor;

impl ProgressMonitor for NullProgressMonitor {}

#[cfg(test)]
mod tests {
    use super::*;

    struct CancelAfter {
        remaining: usize,
        seen: Vec<String>,
    }

    impl ProgressMonitor for CancelAfter {
        fn sub_task(&mut self, name: &str) {
            self.seen.push(name.to_string());
            self.remaining = self.remaining.saturating_sub(1);
        }

        fn is_canceled(&self) -> bool {
            self.remaining == 0
        }
    }

    #[test]
    fn test_null_monitor_never_cancels() {
        let mut monitor = NullProgressMonitor;
        monitor.sub_task("scans");
        assert!(!monitor.is_canceled());
    }

    #[test]
    fn test_custom_monitor_cancels() {
        let mut monitor = CancelAfter {
            remaining: 2,
            seen: Vec::new(),
        };
        monitor.sub_task("version");
        assert!(!monitor.is_canceled());
        monitor.sub_task("scans");
        assert!(monitor.is_canceled());
        assert_eq!(monitor.seen, vec!["version", "scans"]);
    }
}
