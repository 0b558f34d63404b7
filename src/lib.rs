pub mod cli;
pub mod error;
pub mod logging;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use logging::init_logging;
