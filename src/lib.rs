//! FAQ Chat
//!
//! A chat widget that posts each question to `/ask` and renders the reply,
//! together with the Axum service answering those questions from an FAQ
//! corpus.
//!
//! # Architecture
//!
//! - **Widget**: submit handling, rendering and the document contract it is mounted on
//! - **FAQ engine**: TF-IDF cosine matching of questions against the corpus
//! - **Server**: Axum routes for the chat page and the ask endpoint
//! - **Terminal**: stdin/stdout front-end driving the same widget
//!
//! # Modules
//!
//! - [`widget`]: chat widget, document traits and the HTTP transport
//! - [`faq`]: corpus loading, preprocessing and matching
//! - [`wire`]: JSON bodies of `POST /ask`
//! - [`config`]: layered configuration and CLI

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]

pub mod config;
pub mod error;
pub mod faq;
pub mod page;
pub mod server;
pub mod terminal;
pub mod widget;
pub mod wire;

use std::sync::Arc;

use faq::FaqIndex;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Indexed FAQ corpus.
    pub faq: Arc<FaqIndex>,
}
