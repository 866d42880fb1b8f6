use crate::composer::ComposerState;
use crate::filter;
use crate::rating;
use crate::reactions::{self, UserReactionState, Vote};
use crate::seed;
use crate::types::{Comment, NewsItem, PortalConfig, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Owns the whole page state: the news collection, the local user's
/// reactions, and the comment composer. All transitions run to completion
/// synchronously; presentation reads state back through [`snapshot`].
///
/// Operations taking ids expect ids drawn from the current collection.
/// Unknown ids are a caller contract violation and degrade to a logged no-op.
///
/// [`snapshot`]: PortalStore::snapshot
#[derive(Debug, Clone)]
pub struct PortalStore {
    items: Vec<NewsItem>,
    reactions: UserReactionState,
    composer: ComposerState,
    config: PortalConfig,
    next_comment_id: u64,
}

impl PortalStore {
    /// Store over the built-in seed dataset with default configuration.
    pub fn new() -> Self {
        Self::from_items(seed::seed_items(), PortalConfig::default())
            .expect("built-in seed satisfies the seed invariants")
    }

    /// Store over a caller-provided dataset. Fails on seed invariant
    /// violations (duplicate ids, out-of-range ratings).
    pub fn from_items(items: Vec<NewsItem>, config: PortalConfig) -> Result<Self> {
        seed::validate_seed(&items)?;
        let next_comment_id = items
            .iter()
            .flat_map(|item| &item.comments)
            .map(|comment| comment.id)
            .max()
            .map_or(1, |max| max + 1);
        info!("Initialized store with {} news items", items.len());
        Ok(Self {
            items,
            reactions: UserReactionState::new(),
            composer: ComposerState::new(),
            config,
            next_comment_id,
        })
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn reactions(&self) -> &UserReactionState {
        &self.reactions
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn toggle_news_like(&mut self, news_id: u64) {
        self.toggle_news(news_id, Vote::Like);
    }

    pub fn toggle_news_dislike(&mut self, news_id: u64) {
        self.toggle_news(news_id, Vote::Dislike);
    }

    fn toggle_news(&mut self, news_id: u64, vote: Vote) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == news_id) else {
            warn!("Ignoring {:?} toggle for unknown news id {}", vote, news_id);
            return;
        };
        let (next, delta) = reactions::toggle(&self.reactions.news, news_id, vote);
        self.reactions.news = next;
        (item.likes, item.dislikes) = reactions::apply_delta(item.likes, item.dislikes, delta);
        debug!(
            "News {} now at {} likes / {} dislikes",
            news_id, item.likes, item.dislikes
        );
    }

    pub fn toggle_comment_like(&mut self, comment_id: u64) {
        self.toggle_comment(comment_id, Vote::Like);
    }

    pub fn toggle_comment_dislike(&mut self, comment_id: u64) {
        self.toggle_comment(comment_id, Vote::Dislike);
    }

    fn toggle_comment(&mut self, comment_id: u64, vote: Vote) {
        let Some(comment) = self
            .items
            .iter_mut()
            .flat_map(|item| item.comments.iter_mut())
            .find(|comment| comment.id == comment_id)
        else {
            warn!(
                "Ignoring {:?} toggle for unknown comment id {}",
                vote, comment_id
            );
            return;
        };
        let (next, delta) = reactions::toggle(&self.reactions.comments, comment_id, vote);
        self.reactions.comments = next;
        (comment.likes, comment.dislikes) =
            reactions::apply_delta(comment.likes, comment.dislikes, delta);
        debug!(
            "Comment {} now at {} likes / {} dislikes",
            comment_id, comment.likes, comment.dislikes
        );
    }

    /// Casts or replaces the user's star rating for a news item.
    pub fn rate(&mut self, news_id: u64, stars: u8) {
        if !rating::valid_stars(stars) {
            warn!("Ignoring out-of-range rating {} for news {}", stars, news_id);
            return;
        }
        let Some(item) = self.items.iter_mut().find(|item| item.id == news_id) else {
            warn!("Ignoring rating for unknown news id {}", news_id);
            return;
        };
        let prior = self.reactions.rating_for(news_id);
        let (mean, count) = rating::recompute(item.rating, item.rating_count, prior, stars);
        item.rating = mean;
        item.rating_count = count;
        self.reactions.ratings.insert(news_id, stars);
        debug!(
            "News {} rated {} stars (was {:?}), mean now {:.3} over {} casts",
            news_id, stars, prior, mean, count
        );
    }

    /// Opens (or retargets) the composer against a news item.
    pub fn open_composer(&mut self, news_id: u64) {
        if !self.items.iter().any(|item| item.id == news_id) {
            warn!("Ignoring composer open for unknown news id {}", news_id);
            return;
        }
        self.composer.open(news_id);
    }

    /// Cancels the composer, discarding any draft.
    pub fn close_composer(&mut self) {
        self.composer.close();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.composer.set_draft(text);
    }

    /// Submits the draft as a new comment on `news_id`.
    ///
    /// Empty or whitespace-only drafts are a silent no-op: the composer stays
    /// open and the draft is kept. On success the comment is appended, the
    /// composer closes and the draft clears.
    pub fn submit_comment(&mut self, news_id: u64) {
        if !self.items.iter().any(|item| item.id == news_id) {
            warn!("Ignoring comment submit for unknown news id {}", news_id);
            return;
        }
        let Some(text) = self.composer.take_submission(news_id) else {
            return;
        };
        let comment = Comment {
            id: self.next_comment_id,
            author: self.config.author_name.clone(),
            text,
            date: chrono::Local::now().format("%B %-d, %Y").to_string(),
            likes: 0,
            dislikes: 0,
        };
        self.next_comment_id += 1;
        info!("Added comment {} to news {}", comment.id, news_id);
        if let Some(item) = self.items.iter_mut().find(|item| item.id == news_id) {
            item.comments.push(comment);
        }
    }

    /// Derives the read-only snapshot presentation renders from: the filtered
    /// news collection as per-card views plus copies of the reaction and
    /// composer state. Recomputed in full on every call.
    pub fn snapshot(&self, search_term: &str) -> PortalSnapshot {
        let mut rng = rand::thread_rng();
        let items = filter::filter(&self.items, search_term)
            .into_iter()
            .map(|item| self.view_of(item, &mut rng))
            .collect();
        PortalSnapshot {
            items,
            total_items: self.items.len(),
            reactions: self.reactions.clone(),
            composer: self.composer.clone(),
        }
    }

    fn view_of(&self, item: &NewsItem, rng: &mut impl Rng) -> NewsView {
        let limit = self.config.visible_comment_limit;
        let visible_comments = item
            .comments
            .iter()
            .take(limit)
            .map(|comment| CommentView {
                comment: comment.clone(),
                liked: self.reactions.comments.is_liked(comment.id),
                disliked: self.reactions.comments.is_disliked(comment.id),
            })
            .collect();
        NewsView {
            item: item.clone(),
            liked: self.reactions.news.is_liked(item.id),
            disliked: self.reactions.news.is_disliked(item.id),
            user_rating: self.reactions.rating_for(item.id),
            visible_comments,
            hidden_comment_count: item.comments.len().saturating_sub(limit),
            view_count: if self.config.view_count_min < self.config.view_count_max {
                rng.gen_range(self.config.view_count_min..self.config.view_count_max)
            } else {
                self.config.view_count_min
            },
        }
    }
}

impl Default for PortalStore {
    fn default() -> Self {
        Self::new()
    }
}

/// One news card, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsView {
    pub item: NewsItem,
    pub liked: bool,
    pub disliked: bool,
    /// The user's own star vote, for highlighting the interactive stars.
    pub user_rating: Option<u8>,
    /// First comments up to the configured limit.
    pub visible_comments: Vec<CommentView>,
    /// How many more sit behind the "show more" affordance.
    pub hidden_comment_count: usize,
    /// Decorative, regenerated per snapshot; never part of the model.
    pub view_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub comment: Comment,
    pub liked: bool,
    pub disliked: bool,
}

/// Read-only state handed to presentation after every transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSnapshot {
    /// Post-filter news views, source order preserved.
    pub items: Vec<NewsView>,
    /// Size of the unfiltered collection.
    pub total_items: usize,
    pub reactions: UserReactionState,
    pub composer: ComposerState,
}
