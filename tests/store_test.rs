use news_portal::{types::Result, PortalConfig, PortalStore};
use tracing::info;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

#[test]
fn test_news_toggle_sequence_from_seed() {
    init_tracing();
    let mut store = PortalStore::new();

    // Seed item 1 starts at 24 likes / 3 dislikes.
    let item = &store.items()[0];
    assert_eq!(item.id, 1);
    assert_eq!((item.likes, item.dislikes), (24, 3));

    info!("Disliking news 1");
    store.toggle_news_dislike(1);
    let item = &store.items()[0];
    assert_eq!((item.likes, item.dislikes), (24, 4), "fresh dislike adds one");
    assert!(store.reactions().news.is_disliked(1));
    assert!(!store.reactions().news.is_liked(1));

    info!("Liking news 1 while disliked");
    store.toggle_news_like(1);
    let item = &store.items()[0];
    assert_eq!(
        (item.likes, item.dislikes),
        (25, 3),
        "like-while-disliked moves both counters by one"
    );
    assert!(store.reactions().news.is_liked(1));
    assert!(!store.reactions().news.is_disliked(1));

    info!("Liking news 1 again un-votes");
    store.toggle_news_like(1);
    let item = &store.items()[0];
    assert_eq!((item.likes, item.dislikes), (24, 3), "double toggle round-trips");
    assert!(!store.reactions().news.is_liked(1));
    assert!(!store.reactions().news.is_disliked(1));
}

#[test]
fn test_mutual_exclusion_under_arbitrary_toggles() {
    init_tracing();
    let mut store = PortalStore::new();

    // Any interleaving of toggles keeps the sets mutually exclusive.
    let script = [true, true, false, true, false, false, true, false, false, true];
    for like in script {
        if like {
            store.toggle_news_like(2);
        } else {
            store.toggle_news_dislike(2);
        }
        let reactions = &store.reactions().news;
        assert!(
            !(reactions.is_liked(2) && reactions.is_disliked(2)),
            "id 2 must never be in both sets"
        );
        let item = store.items().iter().find(|item| item.id == 2).unwrap();
        assert!(item.likes <= 32 && item.dislikes <= 3, "counters stay within one of seed");
    }
}

#[test]
fn test_comment_toggle_sequence() {
    init_tracing();
    let mut store = PortalStore::new();

    // Comment 1 on news 1 starts at 12 likes / 1 dislike.
    store.toggle_comment_like(1);
    let comment = &store.items()[0].comments[0];
    assert_eq!((comment.likes, comment.dislikes), (13, 1));

    store.toggle_comment_dislike(1);
    let comment = &store.items()[0].comments[0];
    assert_eq!(
        (comment.likes, comment.dislikes),
        (12, 2),
        "dislike-while-liked swaps the vote"
    );
    assert!(store.reactions().comments.is_disliked(1));
    assert!(!store.reactions().comments.is_liked(1));

    store.toggle_comment_dislike(1);
    let comment = &store.items()[0].comments[0];
    assert_eq!((comment.likes, comment.dislikes), (12, 1), "back to seed counts");
}

#[test]
fn test_rating_cast_then_replace() {
    init_tracing();
    let mut store = PortalStore::new();

    // Seed item 1: mean 4.5 over 18 casts.
    store.rate(1, 5);
    let item = &store.items()[0];
    assert_eq!(item.rating_count, 19, "first cast adds a vote");
    assert!(
        (item.rating - (4.5 * 18.0 + 5.0) / 19.0).abs() < 1e-9,
        "mean folds the new vote in, got {}",
        item.rating
    );
    assert_eq!(store.reactions().rating_for(1), Some(5));

    store.rate(1, 3);
    let item = &store.items()[0];
    assert_eq!(item.rating_count, 19, "re-cast keeps the count");
    assert!(
        (item.rating - (4.5 * 18.0 + 3.0) / 19.0).abs() < 1e-9,
        "re-cast replaces the prior vote, got {}",
        item.rating
    );
    assert_eq!(store.reactions().rating_for(1), Some(3));
    assert_eq!(item.rating_display(), "4.4");
}

#[test]
fn test_composer_submit_appends_comment() {
    init_tracing();
    let mut store = PortalStore::new();

    // News 3 has no comments in the seed.
    store.open_composer(3);
    assert_eq!(store.composer().target(), Some(3));

    store.set_draft("   \n\t ");
    store.submit_comment(3);
    assert_eq!(
        store.composer().target(),
        Some(3),
        "whitespace-only draft is silently rejected"
    );
    assert_eq!(store.composer().draft(), "   \n\t ", "rejected draft is kept");
    assert!(store.items()[2].comments.is_empty());

    store.set_draft("  Mars by 2040 seems optimistic.  ");
    store.submit_comment(3);
    assert!(!store.composer().is_open(), "submit closes the composer");
    assert_eq!(store.composer().draft(), "", "submit clears the draft");

    let comments = &store.items()[2].comments;
    assert_eq!(comments.len(), 1);
    let comment = &comments[0];
    assert_eq!(comment.text, "Mars by 2040 seems optimistic.", "text is trimmed");
    assert_eq!(comment.author, "You");
    assert_eq!(comment.id, 4, "comment ids keep counting past the seed maximum");
    assert_eq!((comment.likes, comment.dislikes), (0, 0));
}

#[test]
fn test_composer_cancel_discards_draft() {
    init_tracing();
    let mut store = PortalStore::new();

    store.open_composer(1);
    store.set_draft("half a thought");
    store.close_composer();
    assert!(!store.composer().is_open());
    assert_eq!(store.composer().draft(), "");
    assert_eq!(store.items()[0].comments.len(), 2, "cancel never appends");
}

#[test]
fn test_snapshot_filtering_and_preview() {
    init_tracing();
    let mut store = PortalStore::new();

    let all = store.snapshot("");
    assert_eq!(all.total_items, 3);
    assert_eq!(all.items.len(), 3, "empty term matches everything");
    let ids: Vec<u64> = all.items.iter().map(|view| view.item.id).collect();
    assert_eq!(ids, vec![1, 2, 3], "source order is preserved");

    let none = store.snapshot("zzz-no-match");
    assert_eq!(none.items.len(), 0);
    assert_eq!(none.total_items, 3, "total still reports the full collection");

    let by_category = store.snapshot("eCoLoGy");
    assert_eq!(by_category.items.len(), 1, "category matches are case-insensitive");
    assert_eq!(by_category.items[0].item.id, 2);

    let by_description = store.snapshot("carbon");
    assert_eq!(by_description.items.len(), 1, "description text is searched too");

    // Push news 1 to three comments so the preview rule has something to hide.
    store.open_composer(1);
    store.set_draft("Third comment.");
    store.submit_comment(1);

    let snapshot = store.snapshot("");
    let first = &snapshot.items[0];
    assert_eq!(first.visible_comments.len(), 2, "cards preview two comments");
    assert_eq!(first.hidden_comment_count, 1);
    assert_eq!(first.item.comments.len(), 3, "the full list still rides along");
}

#[test]
fn test_snapshot_reflects_reaction_state() {
    init_tracing();
    let mut store = PortalStore::new();

    store.toggle_news_like(1);
    store.toggle_comment_dislike(3);
    store.rate(2, 4);

    let snapshot = store.snapshot("");
    assert!(snapshot.items[0].liked);
    assert!(!snapshot.items[0].disliked);
    assert_eq!(snapshot.items[1].user_rating, Some(4));
    assert_eq!(snapshot.items[0].user_rating, None);

    let elena = &snapshot.items[1].visible_comments[0];
    assert_eq!(elena.comment.id, 3);
    assert!(elena.disliked);
    assert!(snapshot.reactions.news.is_liked(1));
    assert_eq!(snapshot.composer.target(), None);
}

#[test]
fn test_unknown_ids_are_noops() {
    init_tracing();
    let mut store = PortalStore::new();
    let before: Vec<_> = store
        .items()
        .iter()
        .map(|item| (item.id, item.likes, item.dislikes, item.rating_count))
        .collect();

    store.toggle_news_like(999);
    store.toggle_news_dislike(999);
    store.toggle_comment_like(999);
    store.rate(999, 5);
    store.rate(1, 0);
    store.rate(1, 6);
    store.open_composer(999);

    let after: Vec<_> = store
        .items()
        .iter()
        .map(|item| (item.id, item.likes, item.dislikes, item.rating_count))
        .collect();
    assert_eq!(before, after, "out-of-contract calls change nothing");
    assert!(store.reactions().news.liked.is_empty());
    assert!(store.reactions().ratings.is_empty());
    assert!(!store.composer().is_open(), "composer only opens on known ids");
}

#[test]
fn test_custom_dataset_and_config() -> Result<()> {
    init_tracing();
    let mut items = news_portal::seed_items();
    items.truncate(1);

    let config = PortalConfig {
        author_name: "Reviewer".to_string(),
        visible_comment_limit: 1,
        ..PortalConfig::default()
    };
    let mut store = PortalStore::from_items(items, config)?;

    store.open_composer(1);
    store.set_draft("Signed comment");
    store.submit_comment(1);

    let snapshot = store.snapshot("");
    assert_eq!(snapshot.items[0].visible_comments.len(), 1, "limit comes from config");
    assert_eq!(snapshot.items[0].hidden_comment_count, 2);
    assert_eq!(store.items()[0].comments[2].author, "Reviewer");
    Ok(())
}
