pub mod control;
pub mod session;

pub use control::*;
pub use session::*;
