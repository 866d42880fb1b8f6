use crate::types::NewsItem;

/// True when `term` is a case-insensitive substring of the item's title,
/// description or category. An empty term matches everything.
pub fn matches(item: &NewsItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
        || item.category.to_lowercase().contains(&needle)
}

/// Ordered subsequence of `items` matching `term`. Pure substring
/// containment, OR across the three text fields, no ranking.
pub fn filter<'a>(items: &'a [NewsItem], term: &str) -> Vec<&'a NewsItem> {
    items.iter().filter(|item| matches(item, term)).collect()
}
