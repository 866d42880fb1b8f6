use clap::Parser;
use news_portal::{load_seed, PortalConfig, PortalSnapshot, PortalStore};
use std::path::PathBuf;
use tracing::info;

/// Headless demo of the news portal core: seeds the store, runs a scripted
/// session over every operation, and logs the snapshots presentation would
/// render.
#[derive(Debug, Parser)]
#[command(name = "news-portal", version)]
struct Args {
    /// JSON file with news items to use instead of the built-in seed
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Search term to filter the final snapshot with
    #[arg(long, default_value = "")]
    search: String,

    /// Enable debug-level logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("Starting news portal demo session");

    let mut store = match &args.seed {
        Some(path) => PortalStore::from_items(load_seed(path)?, PortalConfig::default())?,
        None => PortalStore::new(),
    };

    // Scripted session: one of everything the presentation layer can do.
    let first = store.items().first().map(|item| item.id);
    if let Some(news_id) = first {
        info!("Reacting to news {}", news_id);
        store.toggle_news_dislike(news_id);
        store.toggle_news_like(news_id); // change of heart
        store.rate(news_id, 5);
        store.rate(news_id, 4); // replaces the 5

        if let Some(comment_id) = store
            .items()
            .iter()
            .flat_map(|item| &item.comments)
            .map(|comment| comment.id)
            .next()
        {
            info!("Liking comment {}", comment_id);
            store.toggle_comment_like(comment_id);
        }

        info!("Composing a comment on news {}", news_id);
        store.open_composer(news_id);
        store.set_draft("   "); // whitespace-only, silently rejected
        store.submit_comment(news_id);
        store.set_draft("Looking forward to the follow-up piece.");
        store.submit_comment(news_id);
    }

    let snapshot = store.snapshot(&args.search);
    print_snapshot(&snapshot, &args.search);

    info!("Demo session finished");
    Ok(())
}

fn print_snapshot(snapshot: &PortalSnapshot, search: &str) {
    if search.is_empty() {
        info!("Snapshot: {} news items", snapshot.total_items);
    } else {
        info!(
            "Snapshot: {} of {} news items match \"{}\"",
            snapshot.items.len(),
            snapshot.total_items,
            search
        );
    }

    for view in &snapshot.items {
        info!(
            "[{}] {} | {} | mean {} over {} casts | {} likes / {} dislikes | your stars: {} | {} views",
            view.item.category,
            view.item.title,
            view.item.date,
            view.item.rating_display(),
            view.item.rating_count,
            view.item.likes,
            view.item.dislikes,
            view.user_rating
                .map_or_else(|| "-".to_string(), |stars| stars.to_string()),
            view.view_count
        );
        for comment in &view.visible_comments {
            info!(
                "    {}: {} (+{} / -{})",
                comment.comment.author,
                comment.comment.text,
                comment.comment.likes,
                comment.comment.dislikes
            );
        }
        if view.hidden_comment_count > 0 {
            info!("    ... and {} more comments", view.hidden_comment_count);
        }
    }
}
