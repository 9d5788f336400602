/// Network adapters for the hosted LLM service
mod openai_client;

pub use openai_client::OpenAiClient;
