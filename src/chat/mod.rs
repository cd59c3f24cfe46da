//! Chat widget backend: a stateless proxy to an external completion API.
//!
//! The proxy and the particle field share nothing; either can be used alone.

mod protocol;
mod server;
mod upstream;

// Re-export public types
pub use protocol::{
    ChatReply, ChatRequest, Choice, ChoiceMessage, CompletionRequest, CompletionResponse,
    ErrorBody, Message,
};
pub use server::{router, ChatService};
pub use upstream::{CompletionBackend, HttpCompletionClient};
