//! # Services Layer
//!
//! Business logic between the HTTP handlers and the integration layer
//! (generation client, reply client, history store).
//!
//! ```text
//! Handlers (HTTP) → Services (Business Logic) → External APIs / History Store
//! ```

pub mod relay;

// Re-export services for convenience
pub use relay::RelayService;
