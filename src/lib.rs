//! Vireo — prompt optimization core for structured AI image prompts.
//!
//! Turns a free-text creative idea plus four enumerated styling settings into
//! model-ready instructions for a Gemini text/multimodal endpoint, and
//! post-processes results for a comparison display.
//!
//! # Quick Start
//!
//! ```no_run
//! use vireo::prelude::*;
//!
//! # async fn example() -> vireo::error::Result<()> {
//! let config = VireoConfig::from_env();
//! let service = PromptService::new(&config)?;
//! let prompt = service
//!     .optimize_prompt("A powerful queen on a futuristic throne", &Settings::default(), false)
//!     .await?;
//! println!("{prompt}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod highlight;
pub mod prelude;
pub mod provider;
pub mod service;
pub mod session;
pub mod settings;
pub mod template;
pub mod types;
pub mod util;
