pub mod detection;
pub mod scheme;

pub use detection::{Detection, Signature};
pub use scheme::Scheme;
