//! Conversational agent module.
//!
//! Runs a chat model in a bounded loop and lets it call the swap tools.

pub mod model;
pub mod runner;

pub use model::{ChatMessage, ChatModel, OpenAiChatModel, ToolCall, ToolSpec};
pub use runner::{AgentReply, MarketAgent, ToolResult};
