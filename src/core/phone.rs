use crate::domain::ports::{Document, PageNode};
use crate::domain::selector::Selector;
use std::sync::Arc;

pub const MAX_PHONE_DIGITS: usize = 10;
const GROUP_SIZE: usize = 2;

/// Keeps the first ten digits of `raw` and groups them by pairs,
/// e.g. `"06-12.34 56/78"` becomes `"06 12 34 56 78"`. Idempotent.
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_PHONE_DIGITS)
        .collect();

    digits
        .chunks(GROUP_SIZE)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wires [`format_phone`] to every `input[type="tel"]` so the value is
/// regrouped after each input event. Returns how many fields were wired.
pub fn attach_phone_formatters<D: Document>(document: &D) -> usize {
    let inputs = document.query_selector_all(&Selector::phone_inputs());
    for input in &inputs {
        input.add_input_listener(Arc::new(|node: &dyn PageNode| {
            let formatted = format_phone(&node.value());
            node.set_value(&formatted);
        }));
    }
    tracing::debug!("Attached phone formatter to {} field(s)", inputs.len());
    inputs.len()
}
