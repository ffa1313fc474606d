use crate::prompt::TOO_SPECIFIC_SENTINEL;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use talentgraph_core::config::CompletionConfig;

/// Sends one prompt to a text-completion service and returns the raw
/// response text. Implementations own their transport; retrying is left
/// to callers.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// OpenAI-compatible chat-completions backend. Temperature is pinned to
/// zero so identical descriptions classify identically.
pub struct OpenAiBackend {
    http: reqwest::Client,
    config: CompletionConfig,
}

impl OpenAiBackend {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("completion response carried no choices"))
    }
}

/// Deterministic stand-in for tests and offline runs: emits a canned skill
/// map when the prompt mentions a known keyword, the ambiguity sentinel
/// otherwise. Levels are sorted major-to-minor like the real service.
pub struct KeywordBackend {
    keywords: Vec<(String, String, u8)>, // (keyword, vocabulary skill, level)
}

impl KeywordBackend {
    pub fn new() -> Self {
        Self {
            keywords: vec![
                ("python".to_string(), "Python".to_string(), 4),
                ("react".to_string(), "React".to_string(), 3),
                ("docker".to_string(), "Docker".to_string(), 3),
                ("database".to_string(), "SQL".to_string(), 3),
                ("java".to_string(), "Java".to_string(), 5),
            ],
        }
    }
}

impl Default for KeywordBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionBackend for KeywordBackend {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        // The full prompt embeds the vocabulary itself; match keywords
        // against the embedded description only, falling back to the whole
        // text when the prompt format is not recognized.
        let description = prompt
            .lines()
            .find_map(|line| line.trim().strip_prefix("project description: "))
            .unwrap_or(prompt);
        let lower = description.to_lowercase();

        let mut hits: Vec<(&str, u8)> = self
            .keywords
            .iter()
            .filter(|(keyword, _, _)| lower.contains(keyword))
            .map(|(_, skill, level)| (skill.as_str(), *level))
            .collect();

        if hits.is_empty() {
            return Ok(TOO_SPECIFIC_SENTINEL.to_string());
        }

        hits.sort_by(|a, b| b.1.cmp(&a.1));
        let body = hits
            .iter()
            .map(|(skill, level)| format!("\"{skill}\": {level}"))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("{{{body}}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keyword_backend_orders_major_to_minor() {
        let backend = KeywordBackend::new();
        let response = backend
            .complete("A python service with java batch jobs")
            .await
            .unwrap();

        assert_eq!(response, "{\"Java\": 5, \"Python\": 4}");
    }

    #[tokio::test]
    async fn test_keyword_backend_falls_back_to_sentinel() {
        let backend = KeywordBackend::new();
        let response = backend.complete("something entirely unrelated").await.unwrap();

        assert_eq!(response, TOO_SPECIFIC_SENTINEL);
    }
}
