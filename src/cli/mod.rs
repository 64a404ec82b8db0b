pub mod abbrev;
pub mod commands;
pub mod error;
pub mod output;
pub mod session;

pub use commands::*;
pub use error::*;
pub use output::*;
pub use session::*;
