//! Server-side request handling and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations, tower-sessions
//! for login state and opendal for photo storage. Pages are rendered by the `view` module.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and form conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, photo storage)
//! - **Startup** (`startup`) - Initialization of database, sessions, and storage
//! - **Router** (`router`) - Axum route configuration
//! - **Storage** (`storage`) - Object storage adapter for photo uploads
//! - **Util** (`util/`) - Password hashing and upload key generation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Session layer** loads the session from the cookie
//! 3. **Controller** checks login and ownership with `AuthGuard`, validates the form
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** renders a page or redirects

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
pub mod storage;
pub mod util;
