//! Command handlers.

pub(crate) mod logo;
