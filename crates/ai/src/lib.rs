use async_trait::async_trait;
use base64::Engine as _;
use eyre::{bail, Error};
use log::info;
use model::{Model, RequestPayload, ResponsePayload, StoolAnalysis};
use reqwest::Client;

mod model;
pub use model::Context as AiContext;
pub use model::Model as AiModel;
pub use model::StoolAnalysis as Analysis;

pub const SYSTEM_PROMPT: &str = "당신은 소화 건강 전문 AI 동반자 'GutBuddy'입니다. 사용자에게 친절하고 유익한 정보를 제공하며, 한국어를 사용하세요. 가끔 이모지를 섞어서 대화하고, 답변은 간결하게 유지하세요.";

const BRISTOL_PROMPT: &str = "이 대변 이미지를 브리스톨 대변 척도에 따라 분석해 주세요. 타입(1-7), 간단한 건강 인사이트, 권장 사항을 포함해야 합니다. 한국어로 응답해 주세요. JSON 형식으로만 응답하세요: { \"type\": number, \"insight\": string, \"recommendation\": string }";

/// The two operations the app needs from a generative-AI provider. The
/// journal's assistant service talks to this trait, never to the network
/// client directly, so it can be faked in tests.
#[async_trait]
pub trait GutAssistant: Send + Sync {
    async fn converse(&self, message: String, context: Option<AiContext>) -> Result<String, Error>;

    async fn classify_image(&self, image: &[u8]) -> Result<StoolAnalysis, Error>;
}

pub struct Ai {
    base_url: String,
    api_key: String,
    model: Model,
}

impl Ai {
    pub fn new(base_url: String, api_key: String, model: Model) -> Self {
        Self {
            base_url,
            api_key,
            model,
        }
    }

    async fn ask(&self, payload: RequestPayload) -> Result<String, Error> {
        let client = Client::new();

        info!("Sending request to AI: {:?}", payload);
        let response = client
            .post(format!("{}/{}", self.base_url, self.model.name()))
            .json(&payload)
            .send()
            .await?;
        info!("Received response from AI: {:?}", response);

        if response.status().is_success() {
            let resp_json: ResponsePayload = response.json().await?;
            if resp_json.is_success {
                Ok(resp_json.response.unwrap_or_default())
            } else {
                bail!(resp_json
                    .error_message
                    .unwrap_or_else(|| "Unknown error".to_string()))
            }
        } else {
            bail!("HTTP error: {}", response.status())
        }
    }
}

#[async_trait]
impl GutAssistant for Ai {
    async fn converse(&self, message: String, context: Option<AiContext>) -> Result<String, Error> {
        self.ask(RequestPayload {
            message,
            api_key: self.api_key.clone(),
            history: context.map(Into::into),
            image: None,
        })
        .await
    }

    async fn classify_image(&self, image: &[u8]) -> Result<StoolAnalysis, Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let text = self
            .ask(RequestPayload {
                message: BRISTOL_PROMPT.to_string(),
                api_key: self.api_key.clone(),
                history: None,
                image: Some(encoded),
            })
            .await?;

        let analysis: StoolAnalysis = serde_json::from_str(&text)?;
        if !(1..=7).contains(&analysis.bristol_type) {
            bail!("Bristol type out of range: {}", analysis.bristol_type);
        }
        Ok(analysis)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_analysis_parsing() {
        let analysis: StoolAnalysis = serde_json::from_str(
            r#"{"type": 4, "insight": "정상적인 형태입니다.", "recommendation": "수분 섭취를 유지하세요."}"#,
        )
        .unwrap();
        assert_eq!(analysis.bristol_type, 4);
        assert_eq!(analysis.insight, "정상적인 형태입니다.");
    }

    #[test]
    fn test_context_roundtrip() {
        let mut ctx = AiContext::default();
        ctx.add_system_message(SYSTEM_PROMPT.to_string());
        ctx.add_user_message("배가 아파요".to_string());
        ctx.add_assistant_message("물을 드셔보세요".to_string());
        assert_eq!(ctx.len(), 3);
    }
}
