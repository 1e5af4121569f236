pub mod adapters;
pub mod http;
pub mod token_manager;

// Re-export commonly used types
pub use adapters::{create_provider, CustomAdapter, HereAdapter, MapboxAdapter};
pub use http::HttpClient;
pub use token_manager::TokenManager;
