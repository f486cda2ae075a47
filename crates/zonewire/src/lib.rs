//! Client bindings for DNS zone management APIs
//!
//! This crate provides typed zone CRUD operations against a REST API that
//! paginates large result sets through `Link: rel="next"` headers.
//!
//! # Features
//!
//! - **Typed zone operations**: list, get, create, update and delete zones
//! - **Server-driven pagination**: follows continuation links and
//!   assembles complete result sets in page order
//! - **Typed failure conditions**: "zone does not exist" and "zone already
//!   exists" are distinct error variants, matched by tag rather than by
//!   parsing message text
//!
//! # Usage
//!
//! ```ignore
//! use zonewire::{RestClient, Zone};
//!
//! let client = RestClient::new("https://api.example.net/v1", api_token)?;
//!
//! // Full zone list, every page merged in arrival order
//! let zones = client.zones().list().await?;
//!
//! // Create a zone; the returned value carries server-assigned fields
//! let zone = client.zones().create(&Zone::new("example.com")).await?;
//!
//! match client.zones().get("example.com").await {
//!     Ok(zone) => println!("{} records", zone.records.len()),
//!     Err(zonewire::ZoneError::ZoneMissing) => println!("no such zone"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! Pagination following is a client-level toggle: a client built with
//! `.follow_pagination(false)` returns only the first page of any
//! paginated response.

pub mod client;
pub mod errors;
mod pagination;
pub mod types;
pub mod zones;

// Re-export main types
pub use client::RestClient;
pub use errors::ZoneError;
pub use types::{Zone, ZoneRecord};
pub use zones::ZonesService;
