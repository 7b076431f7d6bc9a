//! # Todo Server Library
//!
//! This crate provides a shared to-do list backend with:
//! - RESTful HTTP API endpoints for lists and tasks
//! - MySQL for persistent storage through a bounded connection pool
//! - Per-request transactional units of work
//! - Static hosting for the browser frontend
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities and repository traits
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: Database pool, transactions, repositories
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! todo_server/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and traits
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/  HTTP routes and handlers
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
