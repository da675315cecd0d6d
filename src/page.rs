//! HTML served at `/`.
//!
//! The page carries the three elements the widget is mounted on
//! (`#chatMessages`, `#chatForm`, `#userInput`) and the browser binding of the
//! widget, which follows the same contract as [`crate::widget::ChatWidget`].

use crate::widget::{ERROR_TEXT, NO_RESPONSE_TEXT};
use crate::wire::ASK_PATH;

/// Generate the HTML shell for the application.
pub fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="FAQ chat assistant">
    <title>{title}</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 0; background: #f4f5f7; }}
        .chat-container {{ max-width: 640px; margin: 2rem auto; background: #fff; border-radius: 12px; box-shadow: 0 2px 12px rgba(0,0,0,.08); display: flex; flex-direction: column; height: 80vh; }}
        .chat-header {{ padding: 1rem 1.25rem; font-weight: 600; border-bottom: 1px solid #e5e7eb; }}
        .chat-messages {{ flex: 1; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: .5rem; }}
        .message {{ padding: .6rem .9rem; border-radius: 10px; max-width: 80%; white-space: pre-wrap; }}
        .user-message {{ align-self: flex-end; background: #2563eb; color: #fff; }}
        .bot-message {{ align-self: flex-start; background: #eef0f3; color: #111827; }}
        .chat-form {{ display: flex; gap: .5rem; padding: 1rem; border-top: 1px solid #e5e7eb; }}
        .chat-form input {{ flex: 1; padding: .6rem .8rem; border: 1px solid #d1d5db; border-radius: 8px; }}
        .chat-form button {{ padding: .6rem 1.1rem; border: 0; border-radius: 8px; background: #2563eb; color: #fff; }}
    </style>
</head>
<body>
{content}
</body>
</html>"#
    )
}

/// Chat page content: container, form, input and the widget binding.
pub fn chat_content() -> String {
    format!(
        r#"
    <div class="chat-container">
        <div class="chat-header">FAQ Assistant</div>
        <div id="chatMessages" class="chat-messages" aria-live="polite"></div>
        <form id="chatForm" class="chat-form" autocomplete="off">
            <input id="userInput" type="text" placeholder="Ask a question..." aria-label="Your question">
            <button type="submit">Send</button>
        </form>
    </div>
    <script>
    (() => {{
        const container = document.getElementById('chatMessages');
        const form = document.getElementById('chatForm');
        const input = document.getElementById('userInput');

        const append = (text, origin) => {{
            const node = document.createElement('div');
            node.classList.add('message', origin);
            node.textContent = text;
            container.appendChild(node);
            container.scrollTop = container.scrollHeight;
        }};

        form.addEventListener('submit', async (event) => {{
            event.preventDefault();
            const question = input.value.trim();
            if (!question) return;

            append(question, 'user-message');
            input.value = '';

            try {{
                const res = await fetch('{ask_path}', {{
                    method: 'POST',
                    headers: {{ 'Content-Type': 'application/json' }},
                    body: JSON.stringify({{ message: question }})
                }});
                const data = await res.json();
                append(data.response || '{no_response}', 'bot-message');
            }} catch (_) {{
                append('{error_text}', 'bot-message');
            }}
        }});
    }})();
    </script>
    "#,
        ask_path = ASK_PATH,
        no_response = NO_RESPONSE_TEXT,
        error_text = ERROR_TEXT,
    )
}

/// The full chat page.
pub fn chat_page() -> String {
    html_shell("FAQ Chat", &chat_content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_page_has_widget_elements() {
        let page = chat_page();
        assert!(page.starts_with("<!DOCTYPE html>"));
        for id in ["id=\"chatMessages\"", "id=\"chatForm\"", "id=\"userInput\""] {
            assert!(page.contains(id), "missing {id}");
        }
        assert!(page.contains("fetch('/ask'"));
        assert!(page.contains("Sorry, no response."));
        assert!(page.contains("Error connecting to server."));
    }
}
