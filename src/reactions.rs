use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Which way a toggle points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vote {
    Like,
    Dislike,
}

/// Paired like/dislike id sets; an id is never in both at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionSets {
    pub liked: HashSet<u64>,
    pub disliked: HashSet<u64>,
}

impl ReactionSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_liked(&self, id: u64) -> bool {
        self.liked.contains(&id)
    }

    pub fn is_disliked(&self, id: u64) -> bool {
        self.disliked.contains(&id)
    }
}

/// Counter adjustment produced by one toggle; each field is -1, 0 or +1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteDelta {
    pub likes: i32,
    pub dislikes: i32,
}

/// Applies one like/dislike toggle and returns the next sets plus the
/// adjustment to apply to the item's counters.
///
/// - Toggling the side the id is already on removes the vote (counter -1).
/// - Toggling the opposite side moves the id across (both counters move by 1).
/// - Otherwise it is a fresh vote (counter +1).
pub fn toggle(sets: &ReactionSets, id: u64, vote: Vote) -> (ReactionSets, VoteDelta) {
    let mut next = sets.clone();
    let (own, other) = match vote {
        Vote::Like => toggle_in(&mut next.liked, &mut next.disliked, id),
        Vote::Dislike => toggle_in(&mut next.disliked, &mut next.liked, id),
    };
    let delta = match vote {
        Vote::Like => VoteDelta { likes: own, dislikes: other },
        Vote::Dislike => VoteDelta { likes: other, dislikes: own },
    };
    (next, delta)
}

fn toggle_in(target: &mut HashSet<u64>, opposing: &mut HashSet<u64>, id: u64) -> (i32, i32) {
    if target.remove(&id) {
        // Un-vote: id was already on this side.
        (-1, 0)
    } else {
        let other = if opposing.remove(&id) { -1 } else { 0 };
        target.insert(id);
        (1, other)
    }
}

/// Everything the single local user has reacted to this session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserReactionState {
    pub news: ReactionSets,
    pub comments: ReactionSets,
    /// News id -> the user's current star vote (1..=5). Absent = not rated.
    pub ratings: HashMap<u64, u8>,
}

impl UserReactionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating_for(&self, news_id: u64) -> Option<u8> {
        self.ratings.get(&news_id).copied()
    }
}

/// Applies a delta to a counter pair, saturating at zero.
pub fn apply_delta(likes: u32, dislikes: u32, delta: VoteDelta) -> (u32, u32) {
    let next_likes = likes.saturating_add_signed(delta.likes);
    let next_dislikes = dislikes.saturating_add_signed(delta.dislikes);
    (next_likes, next_dislikes)
}
