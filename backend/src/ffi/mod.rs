//! Python bindings
//!
//! The proposal-generation scripts call the engine through these
//! JSON-in/JSON-out functions so that Python never re-implements pricing.

pub mod functions;
