//! notebox: a multi-tenant, write-once note storage API.
//!
//! The pure rules live in `notebox_core`. This crate wires them to storage
//! backends, structured logging and two transports: an axum HTTP server and
//! an AWS Lambda handler.

pub mod app;
pub mod audit;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod handlers;
pub mod lambda;
pub mod state;
pub mod storage;
pub mod telemetry;
