pub mod gemini;
pub mod generative;
pub mod open_er_api;
pub mod rate_provider;
