//! AI-agent tool surface for marketprep.
//!
//! This crate contains:
//! - JSON tool definitions in the function-calling shape LLM providers accept
//! - A registry that dispatches tool calls against a shared client
//! - Envelope-wrapped responses with request tracking
//!
//! Every execution path ends in a well-formed
//! [`ApiEnvelope`](marketprep_core::ApiEnvelope): malformed calls come back
//! as 400 envelopes, upstream failures carry their status through, so an
//! agent loop never has to handle a second error channel.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use marketprep_agent::ToolRegistry;
//! use marketprep_core::Fmp;
//! use serde_json::json;
//!
//! let registry = ToolRegistry::new(Fmp::new("demo"));
//! let tools = registry.definitions(); // advertise to the model
//! let response = registry
//!     .execute("get_quote", json!({ "symbol": "AAPL" }))
//!     .await;
//! println!("{}", serde_json::to_string(&response)?);
//! ```

pub mod registry;
pub mod tool;

pub use registry::{ToolError, ToolRegistry, ToolResponse};
pub use tool::{definitions, ToolDef};
