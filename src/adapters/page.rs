use crate::domain::ports::{Document, InputListener, PageNode};
use crate::domain::selector::Selector;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
struct NodeState {
    value: String,
    opacity: f32,
    attached: bool,
}

/// In-memory element, enough of a DOM node for the page helpers.
pub struct PageElement {
    tag: String,
    attributes: HashMap<String, String>,
    text: String,
    state: Mutex<NodeState>,
    listeners: Mutex<Vec<InputListener>>,
}

impl PageElement {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn opacity(&self) -> f32 {
        lock(&self.state).opacity
    }

    pub fn is_attached(&self) -> bool {
        lock(&self.state).attached
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    /// Replace the value as a keystroke would, then fire the input listeners
    /// registered so far, in order. Listeners added during dispatch run from
    /// the next input on.
    pub fn type_into(&self, text: &str) {
        self.set_value(text);
        let node: &dyn PageNode = self;
        let listeners: Vec<InputListener> = lock(&self.listeners).clone();
        for listener in &listeners {
            listener(node);
        }
    }

    fn matches(&self, selector: &Selector) -> bool {
        selector.matches(&self.tag, &self.attributes)
    }
}

impl std::fmt::Debug for PageElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageElement")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("state", &*lock(&self.state))
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PageNode for PageElement {
    fn set_opacity(&self, opacity: f32) {
        lock(&self.state).opacity = opacity.clamp(0.0, 1.0);
    }

    fn remove(&self) {
        lock(&self.state).attached = false;
    }

    fn value(&self) -> String {
        lock(&self.state).value.clone()
    }

    fn set_value(&self, value: &str) {
        lock(&self.state).value = value.to_string();
    }

    fn add_input_listener(&self, listener: InputListener) {
        lock(&self.listeners).push(listener);
    }
}

/// A flat, server-rendered page: elements in document order.
#[derive(Debug, Default)]
pub struct Page {
    elements: Mutex<Vec<Arc<PageElement>>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element. A `value` attribute seeds the element's value.
    pub fn append(&self, tag: &str, attributes: &[(&str, &str)], text: &str) -> Arc<PageElement> {
        let attributes: HashMap<String, String> = attributes
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
            .collect();
        let value = attributes.get("value").cloned().unwrap_or_default();

        let element = Arc::new(PageElement {
            tag: tag.to_ascii_lowercase(),
            attributes,
            text: text.to_string(),
            state: Mutex::new(NodeState {
                value,
                opacity: 1.0,
                attached: true,
            }),
            listeners: Mutex::new(Vec::new()),
        });
        lock(&self.elements).push(Arc::clone(&element));
        element
    }

    /// Number of elements still attached.
    pub fn len(&self) -> usize {
        lock(&self.elements)
            .iter()
            .filter(|e| e.is_attached())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Document for Page {
    type Node = PageElement;

    fn query_selector_all(&self, selector: &Selector) -> Vec<Arc<PageElement>> {
        lock(&self.elements)
            .iter()
            .filter(|e| e.is_attached() && e.matches(selector))
            .cloned()
            .collect()
    }
}
