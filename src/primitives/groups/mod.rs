/// RFC 3526 MODP group parameters (4096-bit, generator 2).
pub mod rfc3526;

pub use rfc3526::{GroupParams, Rfc3526};
