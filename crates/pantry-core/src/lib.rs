//! Pantry Core
//!
//! Layered the same way as the app shell:
//! - domain: entities, grouping/sort engine, expiry status
//! - repository: remote item table and local preference storage
//! - settings / service / config: the pieces the shell wires together
//!
//! Only `domain` is available without the `backend` feature, so the
//! WASM frontend can share the grouping engine and the entity types.

pub mod domain;

#[cfg(feature = "backend")]
pub mod config;
#[cfg(feature = "backend")]
pub mod repository;
#[cfg(feature = "backend")]
pub mod service;
#[cfg(feature = "backend")]
pub mod settings;
