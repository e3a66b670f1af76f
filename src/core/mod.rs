pub mod confirm;
pub mod flash;
pub mod phone;
pub mod slots;

pub use crate::domain::model::{AvailableSlots, Slot};
pub use crate::domain::ports::{ConfirmPrompt, Document, PageNode, SlotSource};
pub use crate::utils::error::Result;
