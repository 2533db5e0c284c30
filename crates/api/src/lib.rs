//! Hippo medication API server library.
//!
//! Exposes config, state, error handling, handlers and routes so the
//! integration tests and the binary entrypoint share one router. The
//! `hippo-admin` binary's command line lives in [`admin`].

pub mod admin;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
