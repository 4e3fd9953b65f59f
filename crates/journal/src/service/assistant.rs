use ai::{AiContext, Analysis, GutAssistant, SYSTEM_PROMPT};
use eyre::Error;
use log::warn;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shown instead of a reply when the chat boundary fails for any reason.
pub const CHAT_FALLBACK: &str =
    "죄송해요, 지금 배가 좀 아파서 응답하기 어렵네요. 나중에 다시 시도해 주세요! 🎈";

/// Conversational wrapper over the AI boundary. Owns the chat history and
/// degrades to a fixed message on failure; image classification surfaces the
/// error so the log screen can react.
#[derive(Clone)]
pub struct Assistant {
    client: Arc<dyn GutAssistant>,
    context: Arc<Mutex<AiContext>>,
}

impl Assistant {
    pub fn new(client: Arc<dyn GutAssistant>) -> Self {
        let mut context = AiContext::default();
        context.add_system_message(SYSTEM_PROMPT.to_string());
        Self {
            client,
            context: Arc::new(Mutex::new(context)),
        }
    }

    pub async fn chat(&self, message: &str) -> String {
        let context = self.context.lock().clone();
        match self.client.converse(message.to_string(), Some(context)).await {
            Ok(reply) => {
                let mut context = self.context.lock();
                context.add_user_message(message.to_string());
                context.add_assistant_message(reply.clone());
                reply
            }
            Err(err) => {
                warn!("Chat failed: {}", err);
                CHAT_FALLBACK.to_string()
            }
        }
    }

    pub async fn analyze_stool(&self, image: &[u8]) -> Result<Analysis, Error> {
        self.client.classify_image(image).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use async_trait::async_trait;
    use eyre::bail;

    struct Happy;

    #[async_trait]
    impl GutAssistant for Happy {
        async fn converse(&self, _: String, _: Option<AiContext>) -> Result<String, Error> {
            Ok("물을 많이 드세요 💧".to_string())
        }

        async fn classify_image(&self, _: &[u8]) -> Result<Analysis, Error> {
            Ok(Analysis {
                bristol_type: 4,
                insight: "정상".to_string(),
                recommendation: "유지하세요".to_string(),
            })
        }
    }

    struct Broken;

    #[async_trait]
    impl GutAssistant for Broken {
        async fn converse(&self, _: String, _: Option<AiContext>) -> Result<String, Error> {
            bail!("HTTP error: 503")
        }

        async fn classify_image(&self, _: &[u8]) -> Result<Analysis, Error> {
            bail!("HTTP error: 503")
        }
    }

    #[tokio::test]
    async fn test_chat_keeps_history() {
        let assistant = Assistant::new(Arc::new(Happy));
        let reply = assistant.chat("장 건강에 좋은 습관은?").await;
        assert_eq!(reply, "물을 많이 드세요 💧");
        // system prompt + user + assistant
        assert_eq!(assistant.context.lock().len(), 3);
    }

    #[tokio::test]
    async fn test_chat_falls_back() {
        let assistant = Assistant::new(Arc::new(Broken));
        assert_eq!(assistant.chat("안녕하세요").await, CHAT_FALLBACK);
        // failed turns are not recorded
        assert_eq!(assistant.context.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_analysis_error_propagates() {
        let assistant = Assistant::new(Arc::new(Broken));
        assert!(assistant.analyze_stool(&[0xFF, 0xD8]).await.is_err());

        let assistant = Assistant::new(Arc::new(Happy));
        let analysis = assistant.analyze_stool(&[0xFF, 0xD8]).await.unwrap();
        assert_eq!(analysis.bristol_type, 4);
    }
}
