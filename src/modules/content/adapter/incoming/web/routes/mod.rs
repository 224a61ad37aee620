pub mod get_content;
pub mod get_theme;

pub use get_content::get_content_handler;
pub use get_theme::get_theme_handler;
