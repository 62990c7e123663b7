//! アシスタント（مراقب）との会話セッション

use crate::client::ApiClient;
use crate::locale::LanguageContext;
use mirqab_common::{ApiOutcome, ChatMessage, Conversation, TextKey, example_queries};

pub struct AssistantSession {
    client: ApiClient,
    language: LanguageContext,
    conversation: Conversation,
}

impl AssistantSession {
    pub fn new(client: ApiClient, language: LanguageContext) -> Self {
        Self {
            client,
            language,
            conversation: Conversation::new(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// 現在の言語の質問例
    pub fn examples(&self) -> &'static [&'static str] {
        example_queries(self.language.language())
    }

    /// 質問を送信し、回答メッセージを返す
    ///
    /// 空白のみの入力は無視する。通信失敗・論理失敗も回答として会話に残す。
    pub async fn ask(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.conversation.push(ChatMessage::user(text));

        let reply = match self.client.query_assistant(text).await {
            Ok(ApiOutcome::Success(answer)) => ChatMessage::from_answer(answer),
            Ok(ApiOutcome::Failure { message }) => {
                ChatMessage::assistant(message.unwrap_or_else(|| self.error_text()))
            }
            Err(e) => {
                tracing::warn!(error = %e, "アシスタント問い合わせ失敗");
                ChatMessage::assistant(self.error_text())
            }
        };

        self.conversation.push(reply);
        self.conversation.last()
    }

    fn error_text(&self) -> String {
        self.language.t(TextKey::ErrorOccurred).to_string()
    }
}
