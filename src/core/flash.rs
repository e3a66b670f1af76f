use crate::config::FlashConfig;
use crate::domain::ports::{Document, PageNode};
use crate::domain::selector::Selector;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5000);
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTiming {
    /// Time a message stays fully visible.
    pub dismiss_after: Duration,
    /// Time between turning transparent and leaving the document.
    pub fade_duration: Duration,
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self {
            dismiss_after: DEFAULT_DISMISS_AFTER,
            fade_duration: DEFAULT_FADE_DURATION,
        }
    }
}

impl From<&FlashConfig> for FlashTiming {
    fn from(config: &FlashConfig) -> Self {
        Self {
            dismiss_after: Duration::from_millis(config.dismiss_after_ms),
            fade_duration: Duration::from_millis(config.fade_ms),
        }
    }
}

/// Completion of one scheduled dismissal. Awaiting it is the only thing a
/// holder can do; dropping it leaves the timers running.
#[derive(Debug)]
pub struct Dismissal(JoinHandle<()>);

impl Future for Dismissal {
    type Output = Result<(), JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

/// Fades out and removes every flash message present when it runs.
#[derive(Debug, Clone, Default)]
pub struct FlashDismisser {
    timing: FlashTiming,
}

impl FlashDismisser {
    pub fn new(timing: FlashTiming) -> Self {
        Self { timing }
    }

    pub fn timing(&self) -> FlashTiming {
        self.timing
    }

    /// Schedules one fade-then-remove task per `.alert` node. Must be called
    /// inside a tokio runtime. Once scheduled, a dismissal cannot be cancelled.
    pub fn dismiss_all<D: Document>(&self, document: &D) -> Vec<Dismissal> {
        let messages = document.query_selector_all(&Selector::flash_messages());
        tracing::debug!(
            "Scheduling dismissal of {} flash message(s) in {:?}",
            messages.len(),
            self.timing.dismiss_after
        );

        let FlashTiming {
            dismiss_after,
            fade_duration,
        } = self.timing;

        messages
            .into_iter()
            .map(|node| {
                Dismissal(tokio::spawn(async move {
                    tokio::time::sleep(dismiss_after).await;
                    node.set_opacity(0.0);
                    tokio::time::sleep(fade_duration).await;
                    node.remove();
                }))
            })
            .collect()
    }
}
