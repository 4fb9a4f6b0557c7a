//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints, the Discord bot adapter,
//! bump admission control, data access, and scheduled maintenance. The backend uses Axum
//! as the web framework, SeaORM for database operations, and Serenity for the bot.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Bot** (`bot/`) - Slash command dispatch and embed rendering
//! - **Service Layer** (`service/`) - Cooldown evaluation, the bump transaction, verification and registry rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, verdicts and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Axum routes, middleware and API documentation
//! - **Scheduler** (`scheduler/`) - Hourly sweep of inactive communities
//!
//! # Request Flow
//!
//! 1. **Router** or **Bot** receives the invocation
//! 2. **Controller**/**Bot** converts the input and calls a service
//! 3. **Service** evaluates cooldowns and runs the bump transaction under the storage timeout
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller**/**Bot** renders the verdict as a DTO or an embed

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
