pub mod config;
pub mod token;
pub mod vault;

pub use config::*;
pub use token::*;
pub use vault::*;
