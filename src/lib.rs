//! Gantt: a single-user console task tracker over flat comma-delimited files.
//!
//! The tracker keeps three tables side by side in one data directory: a
//! read-only user table, a task table, and an append-only audit trail of
//! status changes. Tasks advance through a strict one-way status ladder,
//! and every accepted change lands in the audit trail.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business rules with no persistence dependencies
//! - **Ports**: Abstract trait interfaces for the three tables
//! - **Adapters**: Concrete implementations of ports (flat files)
//!
//! # Modules
//!
//! - [`domain`]: Users, tasks, statuses, and audit entries
//! - [`ports`]: Store contracts and the store error taxonomy
//! - [`adapters`]: Comma-delimited file stores and their record codec
//! - [`services`]: Login and tracker orchestration
//! - [`shell`]: The interactive console loop
//! - [`config`]: Data directory layout and bootstrap

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod shell;

#[cfg(test)]
mod tests;
