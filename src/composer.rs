use serde::{Deserialize, Serialize};

/// The comment composer: closed, or open against one news item with a single
/// shared draft buffer.
///
/// Opening while already open simply retargets; the draft buffer survives
/// until cancel or submit clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerState {
    target: Option<u64>,
    draft: String,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// The news item currently targeted, if any.
    pub fn target(&self) -> Option<u64> {
        self.target
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn open(&mut self, news_id: u64) {
        self.target = Some(news_id);
    }

    /// Cancel: back to closed, draft discarded.
    pub fn close(&mut self) {
        self.target = None;
        self.draft.clear();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Takes the draft for submission against `news_id`.
    ///
    /// Returns the trimmed text and resets to closed when the composer is
    /// open on `news_id` and the draft has any non-whitespace content.
    /// Otherwise this is a silent no-op: state and draft are left untouched.
    pub fn take_submission(&mut self, news_id: u64) -> Option<String> {
        if self.target != Some(news_id) {
            return None;
        }
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        let text = trimmed.to_string();
        self.close();
        Some(text)
    }
}
