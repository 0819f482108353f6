//! Infrastructure Layer
//!
//! Adapters around the application core: the REST API that drives it, and
//! the SQLite storage and configuration it is driven against.

pub mod driven_adapters;
pub mod driving_adapters;
