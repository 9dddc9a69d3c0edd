//! This module holds typed parameters for various endpoint inputs.
//!
//! By using typed parameters we ensure endpoint inputs are validated (by
//! type) and correctly shaped before they reach the application logic, and
//! the wire field names stay in one place.

pub(crate) mod share;
pub(crate) mod summary;
