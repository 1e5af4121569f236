// Shared kernel used by every module

pub mod application; // Shared application layer patterns
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

pub use application::token_store::TokenStore;
