pub mod brightness;
pub mod volume;

pub use brightness::*;
pub use volume::*;
