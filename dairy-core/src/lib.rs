//! Dairy Core - domain logic for the dairy ledger
//!
//! This crate provides the pure domain layer shared by the storage and API
//! crates:
//! - Earnings computation for milk deliveries (litres x fat% x rate)
//! - The domain error taxonomy
//! - Shared types (user id, milking session)
//! - Password hashing helpers
//!
//! Nothing in here performs I/O; persistence lives in `dairy-db` and the
//! HTTP surface in `dairy-api`.

pub mod earnings;
pub mod error;
pub mod password;
pub mod types;

pub use earnings::*;
pub use error::*;
pub use types::*;
