//! Service adapters: OS specific implementations (IO).

pub mod docs;
pub mod paths;
pub mod settings;

pub use docs::{TracingDocumentation, TracingHost};
pub use paths::{ensure_log_dir, get_config_path, get_log_dir};
pub use settings::{ensure_config_file, load_config};
