mod r#impl;
mod structs;

pub use r#impl::DEFAULT_QR_SECRET;
pub use structs::*;
