//! In-process broadcast channel between views.
//!
//! Views never share state directly. A view that changes backend data
//! publishes an [`ArticleEvent`]; views that display that data listen while
//! mounted and re-fetch on the events they care about.

use crate::shared::view_scope::ViewScope;
use contracts::domain::a001_article::aggregate::ArticleId;
use tokio::sync::broadcast;

/// Events kept for a listener that has not caught up yet
const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleEvent {
    Created(Option<ArticleId>),
    Updated(ArticleId),
    Published(ArticleId),
}

#[derive(Clone)]
pub struct ArticleEventBus {
    tx: broadcast::Sender<ArticleEvent>,
}

impl Default for ArticleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleEventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ArticleEvent> {
        self.tx.subscribe()
    }

    /// Deliver `event` to every current receiver. Nobody listening is fine.
    pub fn publish(&self, event: ArticleEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("{:?} published with no listeners", event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Call `handler` for every event published from now on, until `scope`
    /// is cancelled. The receiver is dropped on the first event after that.
    pub fn listen<F>(&self, scope: &ViewScope, handler: F)
    where
        F: Fn(ArticleEvent) + 'static,
    {
        let mut rx = self.subscribe();
        let scope = scope.clone();
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if !scope.apply(event, &handler) {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        log::warn!("event listener lagged, {} events skipped", missed);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_publish_reaches_subscribers() {
        let bus = ArticleEventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ArticleEvent::Created(Some(ArticleId(1))));
        bus.publish(ArticleEvent::Published(ArticleId(1)));

        assert_eq!(rx1.try_recv(), Ok(ArticleEvent::Created(Some(ArticleId(1)))));
        assert_eq!(rx1.try_recv(), Ok(ArticleEvent::Published(ArticleId(1))));
        assert_eq!(rx2.try_recv(), Ok(ArticleEvent::Created(Some(ArticleId(1)))));
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = ArticleEventBus::new();
        let rx = bus.subscribe();
        assert_eq!(bus.listener_count(), 1);

        drop(rx);
        assert_eq!(bus.listener_count(), 0);
        bus.publish(ArticleEvent::Created(None));
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = ArticleEventBus::new();
        bus.publish(ArticleEvent::Updated(ArticleId(3)));
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_late_subscriber_misses_earlier_events() {
        let bus = ArticleEventBus::new();
        bus.publish(ArticleEvent::Created(None));
        let mut rx = bus.subscribe();
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_receiver_outlives_bus() {
        let bus = ArticleEventBus::new();
        let mut rx = bus.subscribe();
        drop(bus);
        assert_eq!(rx.try_recv(), Err(TryRecvError::Closed));
    }

    #[test]
    fn test_clones_share_receivers() {
        let bus = ArticleEventBus::new();
        let other = bus.clone();
        let mut rx = other.subscribe();
        bus.publish(ArticleEvent::Created(Some(ArticleId(3))));
        assert_eq!(rx.try_recv(), Ok(ArticleEvent::Created(Some(ArticleId(3)))));
    }
}
