//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types are built from request DTOs and carry
//! already-validated input into the service layer.

pub mod comment;
pub mod concentration;
pub mod diary;
pub mod pagination;
pub mod plan;
pub mod profile;
pub mod routine;
pub mod schedule;
pub mod social;
pub mod user;
