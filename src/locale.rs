//! 表示言語のコンテキスト
//!
//! グローバル状態ではなく、表示側に明示的に渡すオブジェクト。
//! 言語が変わったら購読者へ通知し、表示を作り直させる（翻訳済み文字列はキャッシュしない）。

use mirqab_common::{Language, TextDirection, TextKey, translate, translate_str};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct LanguageContext {
    sender: Arc<watch::Sender<Language>>,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        let (sender, _) = watch::channel(language);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn language(&self) -> Language {
        *self.sender.borrow()
    }

    /// 言語を設定。値が変わった場合のみ通知し `true` を返す
    pub fn set_language(&self, language: Language) -> bool {
        let changed = self.sender.send_if_modified(|current| {
            if *current == language {
                false
            } else {
                *current = language;
                true
            }
        });
        if changed {
            tracing::debug!(language = %language, "表示言語を変更");
        }
        changed
    }

    /// アラビア語 ⇔ 英語を切り替え
    pub fn toggle(&self) -> Language {
        let next = self.language().other();
        self.set_language(next);
        next
    }

    pub fn is_rtl(&self) -> bool {
        self.language().is_rtl()
    }

    pub fn direction(&self) -> TextDirection {
        self.language().direction()
    }

    /// 現在の言語で翻訳
    pub fn t(&self, key: TextKey) -> &'static str {
        translate(key, self.language())
    }

    /// 文字列キーで翻訳（未知のキーはそのまま返す）
    pub fn t_str(&self, key: &str) -> String {
        translate_str(key, self.language())
    }

    /// 言語変更の購読
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.sender.subscribe()
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
