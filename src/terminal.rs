//! Terminal front-end for the chat widget.
//!
//! Stdin lines are the form, stdout is the message container. Each line is a
//! submission; replies are printed as they arrive, which may be out of order
//! when several questions are pending.

use std::cell::{Cell, RefCell};
use std::io::Write;

use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::widget::{
    ChatWidget, HttpTransport, MessageContainer, MessageNode, Origin, SubmitEvent, TextInput,
};

/// Container printing each node as a prefixed line.
#[derive(Debug)]
pub struct TerminalContainer<W: Write> {
    out: RefCell<W>,
    lines: Cell<u32>,
}

impl<W: Write> TerminalContainer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            lines: Cell::new(0),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> MessageContainer for TerminalContainer<W> {
    fn append_child(&self, node: MessageNode) {
        let prefix = match node.origin() {
            Origin::User => "you>",
            Origin::Bot => "bot>",
        };
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{prefix} {}", node.text_content()).and_then(|()| out.flush())
        {
            tracing::warn!(error = %e, "Failed to write chat message");
        }
        self.lines.set(self.lines.get().saturating_add(1));
    }

    fn scroll_height(&self) -> u32 {
        self.lines.get()
    }

    // The terminal follows its own output.
    fn set_scroll_top(&self, _top: u32) {}
}

/// Input holding the line most recently read from stdin.
#[derive(Debug, Default)]
pub struct LineInput {
    line: RefCell<String>,
}

impl TextInput for LineInput {
    fn value(&self) -> String {
        self.line.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.line.borrow_mut());
    }
}

/// Chat with the server at `base_url` until stdin closes.
pub async fn run(base_url: &str) -> anyhow::Result<()> {
    let transport = HttpTransport::new(base_url)?;
    tracing::info!(
        name: "terminal.started",
        endpoint = %transport.endpoint(),
        "Terminal chat started"
    );

    let widget = ChatWidget::new(
        TerminalContainer::new(std::io::stdout()),
        LineInput::default(),
        transport,
    );

    let lines = BufReader::new(tokio::io::stdin()).lines();
    let form = futures::stream::unfold(lines, |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((line, lines)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stdin");
                None
            }
        }
    })
    .map(|line| {
        widget.input().set_value(&line);
        SubmitEvent
    });

    widget.run(form).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Message;

    #[test]
    fn test_container_prefixes_origin() {
        let container = TerminalContainer::new(Vec::new());
        container.append_child(Message::user("hello").render());
        container.append_child(Message::bot("hi there").render());
        assert_eq!(container.scroll_height(), 2);

        let out = String::from_utf8(container.into_inner()).unwrap();
        assert_eq!(out, "you> hello\nbot> hi there\n");
    }
}
