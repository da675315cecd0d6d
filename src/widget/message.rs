//! Chat messages and their rendered nodes.

use serde::{Deserialize, Serialize};

/// Where a message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Typed by the user.
    User,
    /// Returned by the server (or substituted on failure).
    Bot,
}

impl Origin {
    /// CSS class distinguishing the two origins.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
        }
    }
}

/// A unit of chat content. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    origin: Origin,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Bot,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Render into the node appended to the conversation view.
    ///
    /// Consumes the message: once rendered, the node is its only representation.
    #[must_use]
    pub fn render(self) -> MessageNode {
        MessageNode {
            class_list: ["message", self.origin.class_name()],
            text_content: self.text,
        }
    }
}

/// A rendered message: a class list plus plain text content.
///
/// The text is content, never markup; containers must not interpret it as HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNode {
    class_list: [&'static str; 2],
    text_content: String,
}

impl MessageNode {
    #[must_use]
    pub fn class_list(&self) -> &[&'static str] {
        &self.class_list
    }

    #[must_use]
    pub fn text_content(&self) -> &str {
        &self.text_content
    }

    /// Origin recovered from the class list.
    #[must_use]
    pub fn origin(&self) -> Origin {
        if self.class_list[1] == Origin::User.class_name() {
            Origin::User
        } else {
            Origin::Bot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_user_node() {
        let node = Message::user("hi").render();
        assert_eq!(node.class_list(), &["message", "user-message"]);
        assert_eq!(node.text_content(), "hi");
        assert_eq!(node.origin(), Origin::User);
    }

    #[test]
    fn test_render_keeps_markup_as_text() {
        let node = Message::bot("<b>bold</b>").render();
        assert_eq!(node.text_content(), "<b>bold</b>");
        assert_eq!(node.origin(), Origin::Bot);
    }
}
