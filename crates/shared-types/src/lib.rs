pub mod config;
pub mod error;
pub mod resolution;
pub mod role;
pub mod view;

pub use config::*;
pub use error::*;
pub use resolution::*;
pub use role::*;
pub use view::*;
