pub mod analyst;

use crate::error::CounselError;
use crate::llm::Summarizer;

use tracing::info;

pub trait Agent {
    fn name(&self) -> &str;
    fn system_prompt(&self) -> &str;

    /// Send `query` to the model under this agent's system prompt.
    async fn run(&self, query: &str, llm: &dyn Summarizer) -> Result<String, CounselError> {
        info!("🤖 [AGENT] Sending request to {}...", self.name());
        let response = llm.complete(self.system_prompt(), query).await?;
        info!("🤖 [AGENT] Response from {} ({} bytes)", self.name(), response.len());
        Ok(response)
    }
}
