pub mod config;
pub mod toast;

pub use config::{read_page_config, use_page_config};
pub use toast::use_toast;
