//! # recx API
//!
//! REST API for the recx recommendation service.
//!
//! Exposes the recommendation lookup over HTTP JSON and performs all
//! request validation; invalid input never reaches the engine.

pub mod rest;

pub use rest::RestApi;
