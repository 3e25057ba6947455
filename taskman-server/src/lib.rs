//! Taskman server library.
//!
//! Exposes the HTTP server, service, and store layers for use in tests
//! and embedding. Control flow is strictly linear: HTTP handler ->
//! [`service::TaskService`] -> [`store::TaskStore`].

pub mod config;
pub mod http;
pub mod service;
pub mod store;
