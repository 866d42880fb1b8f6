/// Recomputes a news item's mean rating and cast count for one star vote.
///
/// A first cast adds a vote: `(mean*count + stars) / (count+1)`. A re-cast
/// replaces the user's prior vote in place, leaving the count alone:
/// `(mean*count - prior + stars) / count`. Full precision is kept here;
/// rounding to one decimal is a display concern.
pub fn recompute(old_mean: f64, old_count: u32, prior_vote: Option<u8>, stars: u8) -> (f64, u32) {
    let total = old_mean * f64::from(old_count);
    match prior_vote {
        Some(prior) => {
            let new_total = total - f64::from(prior) + f64::from(stars);
            (new_total / f64::from(old_count), old_count)
        }
        None => {
            let new_count = old_count + 1;
            ((total + f64::from(stars)) / f64::from(new_count), new_count)
        }
    }
}

/// Valid star votes are 1..=5.
pub fn valid_stars(stars: u8) -> bool {
    (1..=5).contains(&stars)
}
