//! # Campus Shared
//!
//! Request/response types shared between the API server and the client.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
