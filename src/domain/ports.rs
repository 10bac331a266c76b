use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn chatbot_endpoint(&self) -> &str;
    fn chatbot_model(&self) -> &str;
    fn job_search_url(&self) -> &str;
}

/// Anything that can answer a free-text prompt.
///
/// Implementations never fail: transport problems are reported inside the
/// returned text so the front-end can always display something.
#[async_trait]
pub trait Chatbot: Send + Sync {
    async fn respond(&self, prompt: &str) -> String;
}
