// HTTP server modules
pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod sse;

// LLM abstraction layer
pub mod llm;
