//! MCP server exposing Formula 1 data tools.
//!
//! The server speaks MCP over stdio. OpenF1 tools are driven by an in-memory
//! endpoint/filter registry built at startup; championship tools query an
//! Ergast-compatible API. Diagnostics go to rolling log files because stdout carries
//! the protocol.

use std::sync::Arc;

use anyhow::Context;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult,
    ListPromptsResult, ListToolsResult, PaginatedRequestParam, ServerCapabilities,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{Error as McpError, RoleServer, ServerHandler, ServiceExt};
use tracing::info;

mod championship;
mod config;
mod constants;
mod error;
mod http_client;
mod logging;
mod prompts;
mod query;
mod registry;
mod support;
mod tools;

use crate::config::Config;
use crate::registry::EndpointRegistry;

/// State shared by every request handler
#[derive(Clone)]
pub struct F1McpService {
    /// Frozen OpenF1 endpoint/filter catalogue
    pub registry:    Arc<EndpointRegistry>,
    /// Pooled HTTP client shared by every outbound request
    pub client:      reqwest::Client,
    /// Startup configuration
    pub config:      Arc<Config>,
    prompt_registry: Arc<prompts::PromptRegistry>,
}

impl F1McpService {
    /// Build the registry and HTTP client for `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the filter catalogue is malformed or the client cannot be
    /// built.
    fn new(config: Config) -> error::Result<Self> {
        let registry = registry::openf1::build_registry(&config.openf1_base_url)?;
        let client = http_client::build_client(&config)?;
        let config = Arc::new(config);

        Ok(Self {
            registry: Arc::new(registry),
            client,
            prompt_registry: Arc::new(prompts::PromptRegistry::new(Arc::clone(&config))),
            config,
        })
    }
}

impl ServerHandler for F1McpService {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(constants::F1_MCP_INFO.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(tools::register_tools())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tools::handle_tool_call(self, &request).await
    }

    async fn list_prompts(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(self.prompt_registry.list_prompts())
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.prompt_registry.get_prompt(&request)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    let _log_guard = logging::init(&config).context("Failed to initialise logging")?;

    info!(
        openf1 = %config.openf1_base_url,
        ergast = %config.ergast_base_url,
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let service = F1McpService::new(config).context("Failed to build server state")?;
    info!(
        endpoints = service.registry.list_all_endpoints().len(),
        filters = service.registry.list_all_filters().len(),
        "Endpoint registry ready"
    );

    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    info!("Client disconnected, shutting down");
    Ok(())
}
