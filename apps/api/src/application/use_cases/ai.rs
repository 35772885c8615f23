use std::sync::Arc;

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{analysis_type::AnalysisType, service::OptionalService},
};

const MARKETING_SYSTEM_PROMPT: &str = "You are the marketing AI for \"Scedge\", a futuristic AI-powered project scheduling and resource optimization app. Write concise, impressive sentences (max 25 words) explaining why Scedge is valuable for specific roles. Focus on pain points like conflict resolution, timeline slippage, or resource burnout. Be professional yet visionary.";
const ANALYST_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant that provides clear, concise analysis.";
const INSIGHTS_SYSTEM_PROMPT: &str =
    "You are an AI analyst that provides actionable insights from data.";

/// One system + user exchange sent to a text completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the trimmed completion text.
    async fn complete(&self, prompt: &Prompt) -> AppResult<String>;
}

#[derive(Clone)]
pub struct AiUseCases {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl AiUseCases {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    fn generator(&self, fallback: Option<String>) -> AppResult<&Arc<dyn TextGenerator>> {
        self.generator.as_ref().ok_or(AppError::NotConfigured {
            service: OptionalService::Ai,
            fallback,
        })
    }

    /// A one-sentence pitch for `role`. Upstream failures degrade to the
    /// templated sentence instead of failing the request.
    #[instrument(skip(self))]
    pub async fn value_proposition(&self, role: &str) -> AppResult<String> {
        let role = required(role, "Role is required")?;
        let fallback = fallback_value_proposition(role);
        let generator = self.generator(Some(fallback.clone()))?;

        let prompt = Prompt {
            system: MARKETING_SYSTEM_PROMPT.to_string(),
            user: format!(
                "Write a single, punchy sentence explaining why Scedge is a game-changer for a \"{role}\"."
            ),
            max_tokens: 100,
            temperature: 0.7,
        };
        match generator.complete(&prompt).await {
            Ok(text) if !text.is_empty() => Ok(text),
            Ok(_) => Ok(fallback),
            Err(err) => {
                warn!(error = ?err, "Value proposition generation failed, using fallback");
                Ok(fallback)
            }
        }
    }

    #[instrument(skip(self, content))]
    pub async fn analyze(&self, content: &str, analysis_type: AnalysisType) -> AppResult<String> {
        let content = required(content, "Content is required")?;
        let generator = self.generator(None)?;

        let prompt = Prompt {
            system: ANALYST_SYSTEM_PROMPT.to_string(),
            user: format!("{}\n\n{}", analysis_type.instruction(), content),
            max_tokens: 200,
            temperature: 0.5,
        };
        generator.complete(&prompt).await
    }

    #[instrument(skip(self, data, context))]
    pub async fn insights(&self, data: &serde_json::Value, context: &str) -> AppResult<String> {
        if data.is_null() {
            return Err(AppError::InvalidInput("Data is required".into()));
        }
        let generator = self.generator(None)?;

        let prompt = Prompt {
            system: INSIGHTS_SYSTEM_PROMPT.to_string(),
            user: format!(
                "Based on this data: {data}\n\nContext: {context}\n\nProvide 3 key insights in bullet points."
            ),
            max_tokens: 300,
            temperature: 0.6,
        };
        generator.complete(&prompt).await
    }
}

pub fn fallback_value_proposition(role: &str) -> String {
    format!(
        "Scedge adapts to your workflow as a {role}, optimizing resources and predicting bottlenecks before they happen."
    )
}

fn required<'a>(value: &'a str, message: &str) -> AppResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(message.into()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubTextGenerator;

    #[tokio::test]
    async fn value_proposition_requires_role() {
        let uc = AiUseCases::new(Some(Arc::new(StubTextGenerator::replying("hi"))));
        assert!(matches!(
            uc.value_proposition("  ").await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn value_proposition_unconfigured_carries_fallback() {
        let uc = AiUseCases::new(None);
        let err = uc.value_proposition("Engineer").await.unwrap_err();
        match err {
            AppError::NotConfigured {
                service: OptionalService::Ai,
                fallback: Some(fallback),
            } => assert_eq!(fallback, fallback_value_proposition("Engineer")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn value_proposition_upstream_failure_degrades_to_fallback() {
        let uc = AiUseCases::new(Some(Arc::new(StubTextGenerator::failing())));
        let text = uc.value_proposition("Designer").await.unwrap();
        assert_eq!(text, fallback_value_proposition("Designer"));
    }

    #[tokio::test]
    async fn analyze_builds_prompt_from_analysis_type() {
        let stub = Arc::new(StubTextGenerator::replying("positive"));
        let uc = AiUseCases::new(Some(stub.clone()));

        let result = uc.analyze("I love it", AnalysisType::Sentiment).await.unwrap();
        assert_eq!(result, "positive");

        let prompts = stub.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].user.starts_with(AnalysisType::Sentiment.instruction()));
        assert!(prompts[0].user.ends_with("I love it"));
        assert_eq!(prompts[0].max_tokens, 200);
    }

    #[tokio::test]
    async fn analyze_propagates_upstream_failure() {
        let uc = AiUseCases::new(Some(Arc::new(StubTextGenerator::failing())));
        assert!(matches!(
            uc.analyze("text", AnalysisType::Summary).await,
            Err(AppError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn insights_rejects_null_data_before_checking_configuration() {
        let uc = AiUseCases::new(None);
        assert!(matches!(
            uc.insights(&serde_json::Value::Null, "").await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            uc.insights(&serde_json::json!({"signups": 3}), "").await,
            Err(AppError::NotConfigured { fallback: None, .. })
        ));
    }

    #[tokio::test]
    async fn insights_embeds_serialized_data() {
        let stub = Arc::new(StubTextGenerator::replying("- grow"));
        let uc = AiUseCases::new(Some(stub.clone()));

        uc.insights(&serde_json::json!({"signups": 3}), "launch week")
            .await
            .unwrap();

        let user = &stub.prompts()[0].user;
        assert!(user.contains(r#"{"signups":3}"#));
        assert!(user.contains("Context: launch week"));
    }
}
