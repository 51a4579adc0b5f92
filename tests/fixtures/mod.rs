//! Test fixtures for golden-file assertions
//!
//! - Gateway corpus (accepted/rejected settings with expected violations)
//! - Parameters documents in JSON and TOML

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const SUBSCRIPTION_ID: &str = "3b1f5a2c-9d4e-4f6a-8b7c-1d2e3f4a5b6c";

/// Path to the gateway corpus fixture
pub fn gateway_corpus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gateway_corpus.json")
}

/// Path to a parameters document fixture
pub fn parameters_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/parameters")
        .join(name)
}

/// Gateway test case from gateway_corpus.json
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GatewayTestCase {
    pub id: String,
    pub description: String,
    pub settings: serde_json::Value,
    pub expected: GatewayExpectation,
}

/// Expected pipeline outcome
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GatewayExpectation {
    pub accepted: bool,
    #[serde(default)]
    pub violations: Vec<String>,
}

/// Load every corpus case
pub fn load_gateway_corpus() -> Vec<GatewayTestCase> {
    let content = std::fs::read_to_string(gateway_corpus_path()).expect("corpus fixture readable");
    serde_json::from_str(&content).expect("corpus fixture parses")
}
