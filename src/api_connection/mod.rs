pub mod connection;
pub mod endpoints;

pub use connection::ApiConnectionError;
pub use endpoints::{ChatMessage, GenerateRequest, GenerateResponse, Provider, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
