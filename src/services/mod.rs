//! Typed shims over the [`endpoints`](crate::endpoints) table.
//!
//! Each method builds [`Params`](crate::Params) from its arguments and calls
//! the matching endpoint with the client's bound key.

mod blacklist;
mod general;
mod haste;
mod paste;
mod platform;

pub use blacklist::Blacklist;
pub use haste::HasteOptions;
