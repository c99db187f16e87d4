//! Capturing `tracing` events so tests can assert on what the index logged.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// One recorded event.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    /// Level the event was emitted at.
    pub level: Level,
    /// Module path of the emitting code, e.g. `kwic_shift::shifter`.
    pub target: String,
    /// The event message.
    pub message: String,
    fields: Vec<(&'static str, String)>,
}

impl CapturedEvent {
    /// Value of the field named `name`, if recorded.
    ///
    /// Values logged with `%` come back in their `Display` form, so a shifted
    /// line reads as its space-joined words.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Handle to the events captured on the current thread.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturedLogs {
    /// Whether an event at `level` has a message containing `needle`.
    pub fn has_event(&self, level: Level, needle: &str) -> bool {
        self.events
            .lock()
            .iter()
            .any(|e| e.level == level && e.message.contains(needle))
    }

    /// Events whose target starts with `prefix`, in emission order.
    pub fn events_for_target(&self, prefix: &str) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.target.starts_with(prefix))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct Recorder {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for Recorder {
    // Integers and bools fall back to this through `Visit`'s defaults.
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record_str(field, &format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.fields.push((field.name(), value.to_owned()));
        }
    }
}

struct CaptureLayer(CapturedLogs);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);
        let metadata = event.metadata();
        self.0.events.lock().push(CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            message: recorder.message,
            fields: recorder.fields,
        });
    }
}

/// Capture every event emitted on the current thread until the returned
/// guard is dropped.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let guard = tracing_subscriber::registry()
        .with(CaptureLayer(logs.clone()))
        .with(LevelFilter::TRACE)
        .set_default();
    (logs, guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Line;

    const SHIFTER: &str = "kwic_shift::shifter";

    #[test]
    fn missed_shift_warning_is_captured_with_its_line() {
        let (logs, _guard) = capture_logs();
        let shift = Line::from_words(["sat", "the", "cat"]).unwrap();
        tracing::warn!(target: SHIFTER, shift = %shift, "no derived entry matches shift, skipping");

        assert!(logs.has_event(Level::WARN, "no derived entry matches shift"));
        let events = logs.events_for_target("kwic_shift");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("shift"), Some("sat the cat"));
        assert_eq!(events[0].field("line"), None);
    }

    #[test]
    fn counters_are_recorded_as_plain_numbers() {
        let (logs, _guard) = capture_logs();
        tracing::debug!(target: SHIFTER, inserted = 3_usize, removed = 0_usize, "shifts updated");

        let events = logs.events_for_target(SHIFTER);
        assert_eq!(events[0].field("inserted"), Some("3"));
        assert_eq!(events[0].field("removed"), Some("0"));
        assert_eq!(events[0].level, Level::DEBUG);
    }

    #[test]
    fn events_are_split_by_crate() {
        let (logs, _guard) = capture_logs();
        tracing::debug!(target: "kwic_storage::storage", index = 0_usize, "deleted line");
        tracing::debug!(target: SHIFTER, "shifts updated");

        assert_eq!(logs.events_for_target("kwic_storage").len(), 1);
        assert_eq!(logs.events_for_target("kwic_shift").len(), 1);
        assert!(!logs.has_event(Level::WARN, "deleted line"));
    }

    #[test]
    fn capture_ends_with_guard() {
        let (logs, guard) = capture_logs();
        drop(guard);
        tracing::warn!(target: SHIFTER, "after guard");
        assert!(logs.events_for_target(SHIFTER).is_empty());
    }
}
