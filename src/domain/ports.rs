use crate::domain::model::AvailableSlots;
use crate::domain::selector::Selector;
use crate::utils::error::SlotsError;
use async_trait::async_trait;
use std::fmt::Display;
use std::sync::Arc;

/// Callback run after a node's value changed through user input.
pub type InputListener = Arc<dyn Fn(&dyn PageNode) + Send + Sync>;

/// A rendered element the helpers are allowed to touch.
pub trait PageNode: Send + Sync {
    fn set_opacity(&self, opacity: f32);
    /// Detach the node from its document. Removing twice is harmless.
    fn remove(&self);
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn add_input_listener(&self, listener: InputListener);
}

pub trait Document: Send + Sync {
    type Node: PageNode + 'static;

    /// Attached nodes matching `selector`, in document order.
    fn query_selector_all(&self, selector: &Selector) -> Vec<Arc<Self::Node>>;
}

/// Host-provided blocking yes/no dialog.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn fetch(&self, date: &(dyn Display + Sync)) -> Result<AvailableSlots, SlotsError>;
}
