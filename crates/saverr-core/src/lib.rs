pub mod config;
pub mod environment;
pub mod error;
pub mod functions;
pub mod io;
pub mod lifecycle;
pub mod lock;
pub mod mode;
pub mod outputs;
pub mod paths;
pub mod provider;
pub mod safeguard;
pub mod sam;

pub use error::{Result, SaverrError};
