//! Core types for Kedai.

pub mod email;
pub mod id;
pub mod money;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::{format_idr, idr, round_idr};
pub use role::Role;
