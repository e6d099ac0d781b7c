#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! # superchief
//!
//! superchief is a convenient wrapper library around the SuperChief services API.
//!
//! This library can:
//! - store and fetch pastes ([`Client::paste`], [`Client::create_paste`])
//! - upload to and read from hastebin ([`Client::upload`], [`Client::haste`])
//! - fetch images, memes, facts and translations
//! - look up players and channels on games and streaming platforms
//! - manage the developer blacklists
//!
//! Every operation answers an [`Envelope`]: either the decoded body of the
//! service, or `{status: false, message}` when an argument is missing, the
//! service does not answer, or anything else goes wrong. Nothing is thrown.
//!
//! ## Example: Translating a phrase.
//!
//! ```no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use superchief::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("my-api-key");
//!
//!     let reply = client.translate("fr", "good morning").await;
//!     match reply.message() {
//!         Some(why) => println!("failed: {why}"),
//!         None => println!("{}", reply.to_value()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Example: Calling an endpoint by descriptor.
//!
//! ```no_run
//! # async fn run() {
//! use superchief::{endpoints, Client, Params};
//!
//! let client = Client::default();
//! let reply = client
//!     .call_with_key(&endpoints::INVITES, "my-api-key", &Params::new().with("type", "vanity"))
//!     .await;
//! # }
//! ```

/// Client module contains [`Client`] for calling endpoints.
pub mod client;

/// Endpoint and parameter descriptors.
pub mod endpoint;

pub mod endpoints;

/// The [`Envelope`] every operation returns.
pub mod envelope;

/// Contains [`Error`]s that can be raised while preparing or sending a call.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub mod params;

/// Request preparation.
pub mod request;

pub(crate) mod result;

/// Pluggable transport.
pub mod transport;

mod services;

pub use client::{Client, ClientBuilder};
pub use envelope::{Envelope, Failure, Upload};
pub use error::Error;
pub use params::{ParamValue, Params};
pub use result::Result;
pub use services::{Blacklist, HasteOptions};
