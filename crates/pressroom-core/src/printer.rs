//! Printer — the channel registry and the compiler/executor of prints.
//!
//! A [`Printer`] is an explicit object, constructed once and shared as an
//! `Arc<Printer>` with every producer. Registry membership is guarded by a
//! read/write lock; the lock is never held while a print executes.

use std::sync::{Arc, PoisonError, RwLock};

use crate::channel::same_channel;
use crate::{ChannelRef, Error, Print, Printable, Result};

/// Registry of available channels.
#[derive(Debug, Default)]
pub struct Printer {
    channels: RwLock<Vec<ChannelRef>>,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `channel`.
    ///
    /// Rejects a channel whose name is already taken, including the same
    /// channel registered twice.
    pub fn add_channel(&self, channel: ChannelRef) -> Result<()> {
        let mut channels = self.channels.write().unwrap_or_else(PoisonError::into_inner);
        if channels.iter().any(|c| c.name() == channel.name()) {
            tracing::warn!(channel = channel.name(), "duplicate channel registration");
            return Err(Error::DuplicateChannel {
                name: channel.name().to_string(),
            });
        }
        tracing::debug!(channel = channel.name(), "channel registered");
        channels.push(channel);
        Ok(())
    }

    /// Unregister `channel`. Returns false if it was not registered.
    ///
    /// Prints compiled before the removal keep their channel list.
    pub fn remove_channel(&self, channel: &ChannelRef) -> bool {
        let mut channels = self.channels.write().unwrap_or_else(PoisonError::into_inner);
        let before = channels.len();
        channels.retain(|c| !same_channel(c, channel));
        let removed = channels.len() != before;
        if removed {
            tracing::debug!(channel = channel.name(), "channel removed");
        }
        removed
    }

    pub fn contains(&self, channel: &ChannelRef) -> bool {
        self.channels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|c| same_channel(c, channel))
    }

    /// Snapshot of the registered channels, in registration order.
    pub fn channels(&self) -> Vec<ChannelRef> {
        self.channels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.channels.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bind `printable` to the requested channels that accept it.
    ///
    /// Fails with [`Error::ChannelNotAvailable`] on the first requested
    /// channel that is not registered. Nothing is written.
    pub fn compile_print(
        &self,
        printable: impl Into<Arc<Printable>>,
        channels: &[ChannelRef],
    ) -> Result<Print> {
        let printable = printable.into();
        {
            let registered = self.channels.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(missing) = channels
                .iter()
                .find(|channel| !registered.iter().any(|c| same_channel(c, channel)))
            {
                return Err(Error::channel_not_available(Arc::clone(missing)));
            }
        }

        // The registry lock is released here: `accepts` may call back into
        // the printer.
        let accepting: Vec<ChannelRef> = channels
            .iter()
            .filter(|channel| channel.accepts(&printable))
            .cloned()
            .collect();

        tracing::debug!(
            tag = printable.tag(),
            requested = channels.len(),
            accepted = accepting.len(),
            "print compiled"
        );
        Ok(Print::new(printable, accepting))
    }

    /// [`compile_print`](Self::compile_print) against every channel
    /// registered at the time of the call.
    pub fn compile_print_all(&self, printable: impl Into<Arc<Printable>>) -> Result<Print> {
        let channels = self.channels();
        self.compile_print(printable, &channels)
    }

    /// Compile and immediately execute.
    pub fn execute_print(
        &self,
        printable: impl Into<Arc<Printable>>,
        channels: &[ChannelRef],
    ) -> Result<Print> {
        self.compile_print(printable, channels)?.execute()
    }

    pub fn execute_print_all(&self, printable: impl Into<Arc<Printable>>) -> Result<Print> {
        self.compile_print_all(printable)?.execute()
    }
}
