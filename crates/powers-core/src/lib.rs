pub mod catalog;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod morse;
pub mod theme;

pub use catalog::*;
pub use color::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use theme::*;
