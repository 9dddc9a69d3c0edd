//! Response DTOs returned by the API endpoints.

pub(crate) mod share;
pub(crate) mod summary;
