//! Event Bus implementation.
//!
//! Provides the generic EventBus struct owned by each notifying component.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

/// An event that can travel over an [`EventBus`].
pub trait BusEvent: Clone + Debug + Send + Sync + 'static {
    /// Discriminant used by [`EventFilter::Kinds`].
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Get the kind of this event
    fn kind(&self) -> Self::Kind;

    /// Get a short description of this event for logging
    fn description(&self) -> String;
}

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event kinds
#[derive(Debug, Clone)]
pub enum EventFilter<K> {
    /// Receive all events from the source.
    All,
    /// Receive events matching any of these kinds.
    Kinds(Vec<K>),
}

impl<K> Default for EventFilter<K> {
    fn default() -> Self {
        EventFilter::All
    }
}

impl<K: PartialEq> EventFilter<K> {
    /// Check if an event kind matches this filter
    pub fn matches(&self, kind: &K) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Kinds(kinds) => kinds.contains(kind),
        }
    }
}

/// Type alias for event handler functions
type EventHandler<E> = Box<dyn Fn(E) + Send + Sync>;

type HandlerMap<K, E> = IndexMap<SubscriptionId, (EventFilter<K>, EventHandler<E>)>;

/// Capacity of the broadcast channel behind [`EventBus::receiver`]
pub const CHANNEL_CAPACITY: usize = 256;

/// Error types for event bus operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventBusError {
    /// No subscribers are listening
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Event bus owned by a single notifying component
///
/// Handlers run synchronously on the publishing thread, in subscription order.
pub struct EventBus<E: BusEvent> {
    /// Broadcast channel sender
    sender: broadcast::Sender<E>,
    /// Registered synchronous handlers
    handlers: Arc<RwLock<HandlerMap<E::Kind, E>>>,
}

impl<E: BusEvent> EventBus<E> {
    /// Create a new event bus with no subscribers
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            handlers: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of handlers and receivers the event was delivered
    /// to, or an error if nobody is listening.
    pub fn publish(&self, event: E) -> Result<usize, EventBusError> {
        let kind = event.kind();
        let mut delivered = 0;
        {
            let handlers = self.handlers.read();
            for (filter, handler) in handlers.values() {
                if filter.matches(&kind) {
                    handler(event.clone());
                    delivered += 1;
                }
            }
        }

        let received = self.sender.send(event).unwrap_or(0);
        let total = delivered + received;
        if total == 0 && self.subscriber_count() == 0 && self.sender.receiver_count() == 0 {
            return Err(EventBusError::NoSubscribers);
        }
        Ok(total)
    }

    /// Publish an event, treating a bus without listeners as normal
    pub fn notify(&self, event: E) {
        tracing::trace!("notify: {}", event.description());
        // Components publish unconditionally; an unobserved event is not an error.
        let _ = self.publish(event);
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The handler will be called on the publishing thread, so it should
    /// return quickly and must not subscribe or unsubscribe on this bus.
    pub fn subscribe<F>(&self, filter: EventFilter<E::Kind>, handler: F) -> SubscriptionId
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let mut handlers = self.handlers.write();
        handlers.insert(id, (filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Subscribe to every event from this bus
    pub fn subscribe_all<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.subscribe(EventFilter::All, handler)
    }

    /// Get a receiver for manual event polling
    ///
    /// This is useful for async contexts where you want to receive events
    /// in a tokio task.
    pub fn receiver(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let removed = handlers.shift_remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl<E: BusEvent> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BusEvent> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PageIndex;
    use crate::event_bus::events::{DocumentEvent, DocumentEventKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn thumbnail(page: usize) -> DocumentEvent {
        DocumentEvent::ThumbnailLoaded {
            page: PageIndex::new(page),
        }
    }

    #[test]
    fn test_event_bus_creation() {
        let bus: EventBus<DocumentEvent> = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus: EventBus<DocumentEvent> = EventBus::new();

        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);

        // Double unsubscribe should return false
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_event_delivery() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        let _id = bus.subscribe_all(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(thumbnail(0)), Ok(1));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus: EventBus<DocumentEvent> = EventBus::new();
        assert_eq!(bus.publish(thumbnail(0)), Err(EventBusError::NoSubscribers));
        // notify swallows the missing-subscriber case
        bus.notify(thumbnail(0));
    }

    #[test]
    fn test_event_filtering() {
        let bus = EventBus::new();
        let title_count = Arc::new(AtomicUsize::new(0));
        let thumbnail_count = Arc::new(AtomicUsize::new(0));

        let tc = title_count.clone();
        bus.subscribe(
            EventFilter::Kinds(vec![DocumentEventKind::TitleChanged]),
            move |_| {
                tc.fetch_add(1, Ordering::SeqCst);
            },
        );

        let thc = thumbnail_count.clone();
        bus.subscribe(
            EventFilter::Kinds(vec![DocumentEventKind::ThumbnailLoaded]),
            move |_| {
                thc.fetch_add(1, Ordering::SeqCst);
            },
        );

        bus.publish(DocumentEvent::TitleChanged { first: None }).ok();
        bus.publish(thumbnail(1)).ok();
        bus.publish(thumbnail(2)).ok();

        assert_eq!(title_count.load(Ordering::SeqCst), 1);
        assert_eq!(thumbnail_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            bus.subscribe_all(move |_| order.lock().push(tag));
        }

        bus.publish(thumbnail(0)).ok();
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filter_matches() {
        let filter = EventFilter::Kinds(vec![DocumentEventKind::TitleChanged]);
        assert!(filter.matches(&DocumentEventKind::TitleChanged));
        assert!(!filter.matches(&DocumentEventKind::StateChanged));
        assert!(EventFilter::<DocumentEventKind>::All.matches(&DocumentEventKind::StateChanged));
    }

    #[test]
    fn test_receiver_counts_as_listener() {
        let bus: EventBus<DocumentEvent> = EventBus::new();
        let receiver = bus.receiver();
        assert_eq!(bus.publish(thumbnail(0)), Ok(1));
        assert!(format!("{:?}", bus).contains("receivers: 1"));

        drop(receiver);
        assert_eq!(bus.publish(thumbnail(0)), Err(EventBusError::NoSubscribers));
    }

    #[tokio::test]
    async fn test_async_receiver() {
        let bus = EventBus::new();
        let mut receiver = bus.receiver();

        assert_eq!(bus.publish(thumbnail(3)), Ok(1));

        match receiver.try_recv() {
            Ok(DocumentEvent::ThumbnailLoaded { page }) => assert_eq!(page, PageIndex::new(3)),
            other => panic!("Wrong event received: {:?}", other),
        }
    }
}
