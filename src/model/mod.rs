//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shapes seen by clients. Server-side domain models convert
//! into them through `into_dto()`; request payloads are validated into params before
//! they reach a service.

pub mod api;
pub mod concentration;
pub mod diary;
pub mod pagination;
pub mod plan;
pub mod profile;
pub mod routine;
pub mod schedule;
pub mod social;
pub mod user;
