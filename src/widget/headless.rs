//! In-memory document elements.
//!
//! Used to drive the widget without a browser: tests, and any embedding that
//! wants to read the conversation back out.

use std::cell::{Cell, RefCell};

use super::dom::{MessageContainer, TextInput};
use super::message::MessageNode;

/// Container laying nodes out in fixed-height rows inside a fixed viewport.
#[derive(Debug)]
pub struct HeadlessContainer {
    nodes: RefCell<Vec<MessageNode>>,
    scroll_top: Cell<u32>,
    client_height: u32,
    row_height: u32,
}

impl HeadlessContainer {
    /// Create a container with a viewport of `client_height` and rows of `row_height`.
    pub fn new(client_height: u32, row_height: u32) -> Self {
        Self {
            nodes: RefCell::new(Vec::new()),
            scroll_top: Cell::new(0),
            client_height,
            row_height,
        }
    }

    /// Snapshot of the appended nodes, oldest first.
    pub fn nodes(&self) -> Vec<MessageNode> {
        self.nodes.borrow().clone()
    }

    /// Text of every appended node, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.nodes
            .borrow()
            .iter()
            .map(|n| n.text_content().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top.get()
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll_top(&self) -> u32 {
        self.scroll_height().saturating_sub(self.client_height)
    }
}

impl Default for HeadlessContainer {
    fn default() -> Self {
        Self::new(400, 40)
    }
}

impl MessageContainer for HeadlessContainer {
    fn append_child(&self, node: MessageNode) {
        self.nodes.borrow_mut().push(node);
    }

    fn scroll_height(&self) -> u32 {
        let rows = u32::try_from(self.nodes.borrow().len()).unwrap_or(u32::MAX);
        rows.saturating_mul(self.row_height).max(self.client_height)
    }

    fn set_scroll_top(&self, top: u32) {
        self.scroll_top.set(top.min(self.max_scroll_top()));
    }
}

/// Text input holding its value in memory.
#[derive(Debug, Default)]
pub struct HeadlessInput {
    value: RefCell<String>,
}

impl HeadlessInput {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(value.into()),
        }
    }
}

impl TextInput for HeadlessInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.value.borrow_mut());
    }
}
