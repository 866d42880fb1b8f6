use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Display-formatted date string; never parsed.
    pub date: String,
    pub likes: u32,
    pub dislikes: u32,
    /// Arithmetic mean of all cast star ratings, full precision.
    pub rating: f64,
    pub rating_count: u32,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique across all comments, not just within one news item.
    pub id: u64,
    pub author: String,
    pub text: String,
    pub date: String,
    pub likes: u32,
    pub dislikes: u32,
}

impl NewsItem {
    /// Rating formatted the way cards display it (one decimal place).
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Display name attached to comments submitted through the composer.
    pub author_name: String,
    /// How many comments a card shows before the "show N more" affordance.
    pub visible_comment_limit: usize,
    /// Half-open range for the decorative per-render view count.
    pub view_count_min: u32,
    pub view_count_max: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            author_name: "You".to_string(),
            visible_comment_limit: 2,
            view_count_min: 100,
            view_count_max: 600,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("Duplicate news id in seed: {id}")]
    DuplicateNewsId { id: u64 },

    #[error("Duplicate comment id in seed: {id}")]
    DuplicateCommentId { id: u64 },

    #[error("Seed rating out of range for news {id}: {rating}")]
    RatingOutOfRange { id: u64, rating: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;
