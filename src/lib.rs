pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::{
    http::SlotsClient,
    page::{Page, PageElement},
    prompt::{ScriptedPrompt, TerminalPrompt},
};
pub use config::ClientConfig;
pub use core::{
    confirm::confirm_delete,
    flash::{Dismissal, FlashDismisser, FlashTiming},
    phone::{attach_phone_formatters, format_phone},
    slots::check_available_slots,
};
pub use domain::{model::Slot, selector::Selector};
pub use utils::error::{ClientError, Result, SlotsError};
