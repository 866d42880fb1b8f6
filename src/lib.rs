pub mod composer;
pub mod filter;
pub mod rating;
pub mod reactions;
pub mod seed;
pub mod store;
pub mod types;

pub use composer::ComposerState;
pub use filter::{filter, matches};
pub use rating::recompute;
pub use reactions::{toggle, ReactionSets, UserReactionState, Vote, VoteDelta};
pub use seed::{load_seed, seed_items, validate_seed};
pub use store::{CommentView, NewsView, PortalSnapshot, PortalStore};
pub use types::*;
