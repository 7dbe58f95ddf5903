pub mod config;
pub mod error;
pub mod gemini;
pub mod handlers;
pub mod history;
pub mod line;
pub mod server;
pub mod services;

pub use config::Config;
pub use history::{Exchange, HistoryStore};
