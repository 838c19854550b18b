//! Trade Oracle - simulated international trade feed with model-backed counsel
//!
//! This library provides the synthetic trade event generator, the rolling
//! event window, the counsel fetcher that asks a language model for trade
//! opportunities, and the dashboard series derived from both.

pub mod agents;
pub mod api;
pub mod bus;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod events;
pub mod llm;
pub mod services;

// Re-export commonly used types
pub use bus::EventBus;
pub use config::AppConfig;
pub use data::counsel::{Counsel, CounselOutcome, CounselSource, TradeOpportunity};
pub use data::window::EventWindow;
pub use events::{OracleEvent, TradeDirection, TradeEvent};
pub use llm::{LLMClient, Summarizer};
pub use services::counsel::CounselFetcher;
pub use services::generator::TradeGenerator;
pub use services::oracle::{AnalysisSkip, Oracle};

#[cfg(test)]
mod bus_tests;
#[cfg(test)]
mod events_tests;
