//! A printable bound to the channels that accepted it.

use std::sync::Arc;

use crate::{ChannelRef, Error, Printable, Result};

/// A compiled delivery of one [`Printable`].
///
/// Only the [`Printer`](crate::Printer) builds prints; the channel list is
/// already filtered, so [`execute`](Print::execute) writes to every channel
/// in it, in order.
#[derive(Debug, Clone)]
pub struct Print {
    printable: Arc<Printable>,
    channels: Vec<ChannelRef>,
}

impl Print {
    pub(crate) fn new(printable: Arc<Printable>, channels: Vec<ChannelRef>) -> Self {
        Self {
            printable,
            channels,
        }
    }

    pub fn printable(&self) -> &Printable {
        &self.printable
    }

    pub fn channels(&self) -> &[ChannelRef] {
        &self.channels
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    /// True when no channel accepted the printable.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Deliver the printable to each channel in order.
    ///
    /// The first failing delivery aborts the rest and is returned as
    /// [`Error::Delivery`].
    pub fn execute(self) -> Result<Self> {
        for channel in &self.channels {
            tracing::trace!(
                channel = channel.name(),
                tag = self.printable.tag(),
                "delivering"
            );
            if let Err(source) = channel.deliver(&self.printable) {
                tracing::warn!(
                    channel = channel.name(),
                    error = %source,
                    "delivery failed"
                );
                return Err(Error::delivery(channel.name(), source));
            }
        }
        Ok(self)
    }
}
