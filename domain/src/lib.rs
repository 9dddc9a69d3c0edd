//! Business logic for the meeting notes summarizer.
//!
//! The `web` layer depends on this crate for everything beyond HTTP plumbing:
//! prompt construction and the outbound completion call (`summary`), recipient
//! filtering and the stub share delivery (`share`), and the layered error type
//! (`error`) that `web` translates into HTTP status codes.

pub mod error;
pub mod gateway;
pub mod share;
pub mod summary;

pub use error::Error;
