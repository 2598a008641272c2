//! Event consumers: renderers, recorders, and the platform host relay.

use tracing::trace;

use super::event::{HostFeedback, RoundEvent};

/// Receives round events in the order they happened.
///
/// Closures taking `&RoundEvent` implement this directly.
pub trait RoundObserver {
    fn on_event(&mut self, event: &RoundEvent);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent),
{
    fn on_event(&mut self, event: &RoundEvent) {
        self(event);
    }
}

/// Records every event it sees.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<RoundEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen so far.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Number of events matching `pred`.
    pub fn count(&self, pred: impl Fn(&RoundEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RoundObserver for EventLog {
    fn on_event(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}

/// A platform host able to play haptic feedback.
pub trait HostBridge {
    fn feedback(&mut self, kind: HostFeedback);
}

/// Forwards the feedback an event asks for to a host.
///
/// Without a relay the engine runs the same; the host only adds feedback.
#[derive(Debug, Default)]
pub struct HostRelay<H> {
    host: H,
}

impl<H: HostBridge> HostRelay<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_inner(self) -> H {
        self.host
    }
}

impl<H: HostBridge> RoundObserver for HostRelay<H> {
    fn on_event(&mut self, event: &RoundEvent) {
        if let Some(kind) = event.host_feedback() {
            trace!(?kind, "Host feedback");
            self.host.feedback(kind);
        }
    }
}
