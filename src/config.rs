/// Public DeFiLlama API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.llama.fi";

/// DeFiLlama connection settings.
#[derive(Debug, Clone)]
pub struct LlamaConfig {
    /// Base URL requests are addressed to, without a trailing slash.
    pub base_url: String,
}

impl LlamaConfig {
    /// Resolve from the environment: `DEFILLAMA_BASE_URL` overrides the
    /// public endpoint (mirrors, local test servers).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("DEFILLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for LlamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
