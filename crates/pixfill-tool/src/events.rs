//! Redraw notifications.
//!
//! Tools publish a [`RasterEvent`] after every mutating interaction. The
//! channel is bounded; a display that falls behind loses events rather
//! than stalling the tool, since one pending redraw covers any number of
//! later ones.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use pixfill_core::DatasetId;

/// Notification that a raster changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterEvent {
    /// Sample values (or only metadata) of `dataset` were modified.
    DatasetUpdated {
        /// The modified raster.
        dataset: DatasetId,
        /// `true` when no sample values changed.
        metadata_only: bool,
    },
}

/// Sending half of a [`RasterEvent`] channel.
#[derive(Clone, Debug)]
pub struct EventPublisher {
    tx: Sender<RasterEvent>,
}

impl EventPublisher {
    /// Create a publisher and its receiver with room for `capacity` events.
    ///
    /// A capacity of zero is raised to 1.
    pub fn channel(capacity: usize) -> (Self, Receiver<RasterEvent>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Wrap an existing sender.
    pub fn from_sender(tx: Sender<RasterEvent>) -> Self {
        Self { tx }
    }

    /// Send `event` without blocking.
    ///
    /// Returns `false` if the event was dropped because the channel was
    /// full or every receiver is gone.
    pub fn publish(&self, event: RasterEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(e)) => {
                log::debug!("event channel full, dropping {e:?}");
                false
            }
            Err(TrySendError::Disconnected(e)) => {
                log::debug!("no event subscribers, dropping {e:?}");
                false
            }
        }
    }

    /// Publish a sample-value update for `dataset`.
    pub fn dataset_updated(&self, dataset: DatasetId) -> bool {
        self.publish(RasterEvent::DatasetUpdated {
            dataset,
            metadata_only: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_delivers() {
        let (publisher, rx) = EventPublisher::channel(4);
        let id = DatasetId::next();
        assert!(publisher.dataset_updated(id));
        assert_eq!(
            rx.try_recv().unwrap(),
            RasterEvent::DatasetUpdated {
                dataset: id,
                metadata_only: false
            }
        );
    }

    #[test]
    fn full_channel_drops() {
        let (publisher, rx) = EventPublisher::channel(1);
        let id = DatasetId::next();
        assert!(publisher.dataset_updated(id));
        assert!(!publisher.dataset_updated(id));
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn disconnected_channel_drops() {
        let (publisher, rx) = EventPublisher::channel(4);
        drop(rx);
        assert!(!publisher.dataset_updated(DatasetId::next()));
    }

    #[test]
    fn zero_capacity_is_raised() {
        let (publisher, rx) = EventPublisher::channel(0);
        assert!(publisher.dataset_updated(DatasetId::next()));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn from_sender_shares_channel() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let publisher = EventPublisher::from_sender(tx);
        publisher.publish(RasterEvent::DatasetUpdated {
            dataset: DatasetId::next(),
            metadata_only: true,
        });
        assert!(matches!(
            rx.try_recv(),
            Ok(RasterEvent::DatasetUpdated {
                metadata_only: true,
                ..
            })
        ));
    }
}
