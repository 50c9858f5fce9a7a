pub mod lehmer;
pub use lehmer::*;

pub mod quote;
pub use quote::*;
