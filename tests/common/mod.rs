//! Common utilities for integration tests.

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use alloy::primitives::{b256, TxHash};
use async_trait::async_trait;
use night_market_agent::{
    agent::{ChatMessage, ChatModel, MarketAgent, ToolCall, ToolSpec},
    services::SwapSubmitter,
    types::SwapCall,
    AppError, Result, TokenSwapServer,
};

/// Hash returned by [`MockSubmitter`] for every accepted swap.
pub const MOCK_TX_HASH: TxHash =
    b256!("5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060");

/// Recipient used across tests.
pub const WALLET: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// Submitter that records calls instead of touching a chain.
#[derive(Default)]
pub struct MockSubmitter {
    pub calls: Mutex<Vec<SwapCall>>,
    pub fail_with: Option<String>,
}

impl MockSubmitter {
    pub fn failing(message: &str) -> Self {
        Self { calls: Mutex::new(Vec::new()), fail_with: Some(message.to_string()) }
    }

    pub fn recorded(&self) -> Vec<SwapCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SwapSubmitter for MockSubmitter {
    async fn submit_swap(&self, call: SwapCall) -> Result<TxHash> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(message) => Err(AppError::Rpc(message.clone())),
            None => Ok(MOCK_TX_HASH),
        }
    }
}

/// Server backed by a fresh [`MockSubmitter`].
pub fn create_test_server() -> (TokenSwapServer, Arc<MockSubmitter>) {
    let submitter = Arc::new(MockSubmitter::default());
    let server = TokenSwapServer::with_submitter(submitter.clone());
    (server, submitter)
}

/// Chat model that replays a fixed list of replies and keeps what it was sent.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<ChatMessage>>>,
    pub seen: Mutex<Vec<Vec<ChatMessage>>>,
    pub offered_tools: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<ChatMessage>>) -> Self {
        Self { replies: Mutex::new(replies.into()), ..Default::default() }
    }

    /// Number of completions requested so far.
    pub fn turns(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, messages: &[ChatMessage], tools: &[ToolSpec]) -> Result<ChatMessage> {
        self.seen.lock().unwrap().push(messages.to_vec());
        *self.offered_tools.lock().unwrap() =
            tools.iter().map(|t| t.function.name.clone()).collect();

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ChatMessage::assistant("Anything else for the stall?")))
    }
}

/// Assistant message asking for a single tool call.
pub fn tool_request(id: &str, name: &str, arguments: serde_json::Value) -> ChatMessage {
    ChatMessage {
        role: "assistant".to_string(),
        tool_calls: Some(vec![ToolCall::new(id, name, arguments.to_string())]),
        ..Default::default()
    }
}

/// Agent over a mock submitter and a scripted model.
pub fn create_test_agent(
    replies: Vec<Result<ChatMessage>>,
    max_steps: usize,
) -> (MarketAgent, Arc<MockSubmitter>, Arc<ScriptedModel>) {
    let (server, submitter) = create_test_server();
    let model = Arc::new(ScriptedModel::new(replies));
    let agent = MarketAgent::new(server, model.clone(), max_steps);
    (agent, submitter, model)
}
