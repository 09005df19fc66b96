//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, business
//! rules, data access and infrastructure. It uses Axum as the web framework and SeaORM
//! over SQLite for persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Repositories and the cursor pagination engine
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application errors, the error-code catalog and HTTP mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, migrations, sessions and CORS
//! - **Router** (`router`) - Route table, fallbacks and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates through `AuthGuard`, converts DTOs to params, calls a service
//! 3. **Service** checks business rules and orchestrates repositories
//! 4. **Data** queries the database and returns entity or domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
