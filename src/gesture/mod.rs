pub mod mapper;
pub mod session;
pub mod zone;


pub use session::*;
pub use zone::*;
