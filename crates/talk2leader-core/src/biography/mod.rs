//! Leader biography lookup.
//!
//! `BiographySource` is the port to an encyclopedia; `BiographyService`
//! normalizes its pages into [`LeaderInfo`](talk2leader_types::leader::LeaderInfo)
//! records and applies the fallback policy.

pub mod service;
pub mod source;
