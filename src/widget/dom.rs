//! The document surface the widget is mounted on.
//!
//! These traits mirror the three elements a chat page provides: a scrollable
//! message container, a text input, and a form raising submit events. Methods
//! take `&self` like DOM handles do; implementations use interior mutability
//! and are only ever touched from the task driving the widget.

/// Scrollable element receiving rendered message nodes.
pub trait MessageContainer {
    /// Append a node at the bottom of the container.
    fn append_child(&self, node: super::MessageNode);

    /// Total scrollable height of the content.
    fn scroll_height(&self) -> u32;

    /// Set the scroll offset. Implementations clamp to their maximum offset.
    fn set_scroll_top(&self, top: u32);
}

/// Single-line text input.
pub trait TextInput {
    fn value(&self) -> String;

    fn set_value(&self, value: &str);
}

/// A submit event raised by the chat form.
///
/// Carries nothing: the handler reads the input element when it fires. A form
/// is any `Stream<Item = SubmitEvent>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitEvent;
