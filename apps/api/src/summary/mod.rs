// Law summary: prompt building, model calls, markdown cleanup, assembly.
// All model calls go through llm_client::TextModel.

pub mod assembler;
pub mod generator;
pub mod handlers;
pub mod markdown;
pub mod prompts;
