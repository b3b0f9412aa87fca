//! Clients for the REST stats API and the GraphQL liquidity indexer.

pub mod client;
pub mod types;

pub use client::{GraphClient, RestClient};
pub use types::{Feed, Period, QueryParams};
