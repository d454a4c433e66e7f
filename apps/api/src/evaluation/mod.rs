//! Evaluation Relay — grades a submitted image description via one upstream
//! LLM call and returns a stable-shaped result.
//!
//! Flow: validate input → synthesize prompt → single completion call →
//! parse → normalize. No retries, no caching, no state between requests.

pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
