pub mod config;
pub mod transpose;

pub use config::run_config;
pub use transpose::run_transpose;
