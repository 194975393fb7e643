//! API Module
//!
//! HTTP handlers and routing for the math store REST API.
//!
//! # Endpoints
//! - `PUT /set` - Write a value
//! - `GET /get/:key` - Read a value
//! - `POST /add`, `/sub`, `/mult`, `/div` - Memoized binary operations
//! - `GET /stats` - Memo statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
