// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod digest;
pub mod filter;
pub mod generate;
pub mod ingest;
pub mod notify;

// ---- Re-exports for stable public API ----
pub use crate::config::AppConfig;
pub use crate::digest::compose_and_deliver;
pub use crate::generate::{DigestGenerator, OpenAiGenerator};
pub use crate::ingest::types::{Candidate, RawEntry};
pub use crate::notify::{Notifier, TelegramNotifier};
