//! In-memory [tracing_subscriber::Layer] that records events emitted during a test.

use std::{
    fmt,
    sync::{Arc, Mutex},
};
use tracing::{field, Event, Level, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer, Registry,
};

/// An event recorded by [capture].
#[derive(Clone, Debug)]
pub struct RecordedEvent {
    pub level: Level,
    pub message: String,
}

#[derive(Default)]
struct Message(String);

impl field::Visit for Message {
    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

#[derive(Clone, Default)]
struct Collector {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl<S: Subscriber> Layer<S> for Collector {
    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        let mut message = Message::default();
        event.record(&mut message);
        self.events.lock().unwrap().push(RecordedEvent {
            level: *event.metadata().level(),
            message: message.0,
        });
    }
}

/// Runs `f` with a collecting subscriber installed on the current thread and returns
/// every event it emitted.
pub fn capture<F: FnOnce()>(f: F) -> Vec<RecordedEvent> {
    let collector = Collector::default();
    let subscriber = Registry::default().with(collector.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = collector.events.lock().unwrap().clone();
    events
}

/// Number of events recorded at `level`.
pub fn count(events: &[RecordedEvent], level: Level) -> usize {
    events.iter().filter(|event| event.level == level).count()
}
