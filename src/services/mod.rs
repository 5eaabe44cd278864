mod config_loader;
mod gemini_client_http;

pub use config_loader::{DEFAULT_CONFIG_FILE, load_config};
pub use gemini_client_http::{API_KEY_ENV, HttpGeminiClient};
