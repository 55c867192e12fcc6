// Public modules
pub mod client;
pub mod config;
pub mod document;
pub mod export;
pub mod models;

// Re-export commonly used types
pub use client::SummarizerClient;
pub use config::Config;
pub use document::{Block, Section, SummaryDocument};
pub use export::{gmail_compose_url, open_in_browser, save_summary_text};
pub use models::{ArticleSummary, SummarizeRequest, SummarizeResponse, Topic};
