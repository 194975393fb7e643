//! Request and Response models for the math store API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies. The driver
//! uses the same types on the client side.

mod number;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{BinaryOpRequest, SetRequest};
pub use responses::{
    BinaryOpResponse, GetResponse, HealthResponse, SetResponse, StatsResponse,
};
