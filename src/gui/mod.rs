pub mod app;
pub mod overlay;
pub mod seek_bar;

pub use app::*;
