//! Types shared between the classification transport and the desktop client.

pub mod domain;
pub mod error;
pub mod protocol;
