//! HTTP clients for external service providers.

pub mod groq;
