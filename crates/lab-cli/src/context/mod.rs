mod config_warnings;
mod snapshot;

pub use config_warnings::warn_unconfigured;
pub use snapshot::{existing_log_titles, load_snapshot};
