use crate::types::{Comment, NewsItem, PortalError, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// The fixed dataset every store starts from.
pub fn seed_items() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: "New technologies in education".to_string(),
            description: "A study shows how AI is changing the learning process and making \
                          education more accessible for every category of student."
                .to_string(),
            category: "Technology".to_string(),
            date: "July 29, 2025".to_string(),
            likes: 24,
            dislikes: 3,
            rating: 4.5,
            rating_count: 18,
            comments: vec![
                Comment {
                    id: 1,
                    author: "Anna K.".to_string(),
                    text: "Really interesting article! AI is genuinely revolutionizing education."
                        .to_string(),
                    date: "July 29, 2025".to_string(),
                    likes: 12,
                    dislikes: 1,
                },
                Comment {
                    id: 2,
                    author: "Michael S.".to_string(),
                    text: "What about the ethical questions of using AI in schools?".to_string(),
                    date: "July 29, 2025".to_string(),
                    likes: 8,
                    dislikes: 2,
                },
            ],
        },
        NewsItem {
            id: 2,
            title: "City environmental initiatives".to_string(),
            description: "An analysis of successful greening projects and carbon footprint \
                          reduction in major cities around the world."
                .to_string(),
            category: "Ecology".to_string(),
            date: "July 28, 2025".to_string(),
            likes: 31,
            dislikes: 2,
            rating: 4.8,
            rating_count: 22,
            comments: vec![Comment {
                id: 3,
                author: "Elena R.".to_string(),
                text: "Great examples! We need more initiatives like these in our city."
                    .to_string(),
                date: "July 28, 2025".to_string(),
                likes: 15,
                dislikes: 0,
            }],
        },
        NewsItem {
            id: 3,
            title: "Advances in space technology".to_string(),
            description: "The latest achievements in spaceflight and the plans for reaching \
                          Mars over the coming decades."
                .to_string(),
            category: "Space".to_string(),
            date: "July 27, 2025".to_string(),
            likes: 19,
            dislikes: 4,
            rating: 4.2,
            rating_count: 14,
            comments: vec![],
        },
    ]
}

/// Loads a seed dataset from a JSON file and validates it.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<NewsItem>> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let items: Vec<NewsItem> = serde_json::from_str(&raw)?;
    validate_seed(&items)?;
    info!(
        "Loaded {} news items from {}",
        items.len(),
        path.as_ref().display()
    );
    Ok(items)
}

/// Checks the seed invariants: unique news ids, globally unique comment ids,
/// ratings within [0, 5].
pub fn validate_seed(items: &[NewsItem]) -> Result<()> {
    let mut news_ids = HashSet::new();
    let mut comment_ids = HashSet::new();

    for item in items {
        if !news_ids.insert(item.id) {
            return Err(PortalError::DuplicateNewsId { id: item.id });
        }
        if !(0.0..=5.0).contains(&item.rating) {
            return Err(PortalError::RatingOutOfRange {
                id: item.id,
                rating: item.rating,
            });
        }
        for comment in &item.comments {
            if !comment_ids.insert(comment.id) {
                return Err(PortalError::DuplicateCommentId { id: comment.id });
            }
        }
    }

    Ok(())
}
