//! Architecture generation bounded context.
//!
//! Pure domain logic: no I/O, no network. Everything here is safe to call
//! from any thread without coordination.

pub mod domain;
pub mod policies;
pub mod services;
