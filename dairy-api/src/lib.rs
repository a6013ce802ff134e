//! Dairy API Server
//!
//! JSON-over-HTTP surface for the dairy ledger. All responses share the
//! `{success: boolean, message?, ...payload}` envelope.
//!
//! ## Endpoints
//!
//! ### Auth
//! - POST /api/auth/signup - Register with phone number and password
//! - POST /api/auth/login - Log in, returns a bearer token
//! - DELETE /api/auth/profile - Delete the account and all its records
//!
//! ### Fat rate
//! - GET /api/fat-rate - Current global rate
//! - PUT /api/fat-rate - Update the global rate
//!
//! ### Records (all owner-scoped)
//! - POST/GET /api/milk-records, PUT/DELETE /api/milk-records/:id
//! - POST/GET /api/expenses, PUT/DELETE /api/expenses/:id
//! - POST/GET /api/withdrawals, PUT/DELETE /api/withdrawals/:id
//!
//! ### Read-only views
//! - GET /api/dashboard/stats - Totals and available balance
//! - GET /api/history/earnings - Milk deliveries with frozen rates
//! - GET /api/history/expenses
//! - GET /api/history/withdrawals
//!
//! Everything under /api except signup and login requires
//! `Authorization: Bearer <token>`.

pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use middleware::auth::{issue_token, AuthClaims, AuthUser, JwtConfig};
pub use routes::create_router;
pub use server::*;
pub use state::*;
