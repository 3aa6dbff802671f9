//! Request handlers, one module per resource.

pub mod gardens;
pub mod plants;
