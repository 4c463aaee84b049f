//! Teams API Library
//!
//! HTTP endpoints for creating, updating, joining and leaving teams, the
//! actions and repositories behind them, and a client-side user store that
//! consumes the endpoint responses.

pub mod actions;
pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
