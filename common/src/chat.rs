//! アシスタントとの会話履歴
//!
//! セッション中のみメモリに保持し、永続化しない。

use crate::i18n::Language;
use crate::types::{AssistantAnswer, ReportRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// 会話メッセージ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// 回答が参照したレポート
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<ReportRef>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            reports: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            reports: Vec::new(),
        }
    }

    pub fn from_answer(answer: AssistantAnswer) -> Self {
        Self {
            role: Role::Assistant,
            content: answer.answer,
            reports: answer.reports_used,
        }
    }

    /// 参照レポートIDの一覧
    pub fn report_ids(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.report_id.as_str()).collect()
    }
}

/// 会話（追加順を保持）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// 質問例
pub fn example_queries(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::En => &[
            "How many detections in the last 24 hours?",
            "Show high-severity alerts from today",
            "What's the average soldier count per detection?",
            "List all detections with more than 3 soldiers",
        ],
        Language::Ar => &[
            "كم عدد الاكتشافات في آخر 24 ساعة؟",
            "أظهر التنبيهات عالية الخطورة من اليوم",
            "ما هو متوسط عدد الجنود لكل اكتشاف؟",
            "اعرض جميع الاكتشافات بأكثر من 3 جنود",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_keeps_order() {
        let mut conv = Conversation::new();
        conv.push(ChatMessage::user("q1"));
        conv.push(ChatMessage::assistant("a1"));
        conv.push(ChatMessage::user("q2"));

        let roles: Vec<Role> = conv.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(conv.last().unwrap().content, "q2");
    }

    #[test]
    fn test_message_from_answer() {
        let answer = AssistantAnswer {
            question: "q".to_string(),
            answer: "two reports".to_string(),
            reports_used: vec![
                ReportRef { report_id: "R-1".to_string(), ..Default::default() },
                ReportRef { report_id: "R-2".to_string(), ..Default::default() },
            ],
            total_reports: Some(2),
        };
        let msg = ChatMessage::from_answer(answer);
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "two reports");
        assert_eq!(msg.report_ids(), vec!["R-1", "R-2"]);
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }

    #[test]
    fn test_example_queries_per_language() {
        assert_eq!(example_queries(Language::En).len(), example_queries(Language::Ar).len());
        assert!(example_queries(Language::En)[0].contains("24 hours"));
    }
}
