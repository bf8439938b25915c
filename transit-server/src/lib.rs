//! Transit catalogue server.
//!
//! Builds a catalogue of bus stops and routes, answers bus, stop, route
//! and map queries over it, and serves the same queries over HTTP.

pub mod catalogue;
pub mod domain;
pub mod render;
pub mod requests;
pub mod router;
pub mod store;
pub mod web;
