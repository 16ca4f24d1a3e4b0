//! Serverless entry point.
//!
//! The hosting runtime hands over a request exposing its JSON body through
//! [`JsonBody`]. [`handle`] returns a [`FunctionResponse`] envelope instead
//! of relying on a web framework to build the HTTP response.

#[path = "function/body.rs"]
mod body;

#[path = "function/event.rs"]
mod event;

#[path = "function/format.rs"]
mod format;

#[path = "function/response.rs"]
mod response;

#[path = "function/handler.rs"]
mod handler;

pub use body::JsonBody;
pub use event::InvocationEvent;
pub use format::{to_spaced_string, SpacedFormatter};
pub use handler::{handle, handle_default};
pub use response::{FunctionResponse, CONTENT_TYPE_JSON};
