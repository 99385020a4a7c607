//! Plain-text output for search results and the trending list.

use search_core::{ResultView, SearchState, Sneaker};
use std::sync::Arc;

pub fn format_state(state: &SearchState) -> String {
    if state.query.is_empty() {
        return "(no active search)\n".to_string();
    }
    if state.no_results_found() {
        return format!("No results found for \"{}\"\n", state.query);
    }
    format_view(&state.query, &state.visible())
}

pub fn format_view(query: &str, view: &ResultView<'_>) -> String {
    let mut out = format!("Results for \"{}\" ({} shown)\n", query, view.total());

    if !view.users.is_empty() {
        out.push_str("Users:\n");
        for user in view.users {
            out.push_str(&format!("  @{} ({})\n", user.username, user.display_name));
        }
    }
    if !view.sneakers.is_empty() {
        out.push_str("Sneakers:\n");
        for sneaker in view.sneakers {
            out.push_str(&format!("  {}\n", sneaker_line(sneaker)));
        }
    }
    if !view.posts.is_empty() {
        out.push_str("Posts:\n");
        for post in view.posts {
            out.push_str("  ");
            out.push_str(&post.caption);
            if !post.sneaker_tags.is_empty() {
                out.push_str(&format!(" [{}]", post.sneaker_tags.join(", ")));
            }
            out.push('\n');
        }
    }
    out
}

pub fn format_trending(trending: &[Arc<Sneaker>]) -> String {
    trending
        .iter()
        .enumerate()
        .fold(String::from("Trending sneakers:\n"), |mut out, (rank, sneaker)| {
            out.push_str(&format!(
                "{:>2}. {} - owned by {}\n",
                rank + 1,
                sneaker_line(sneaker),
                sneaker.owned_by_users
            ));
            out
        })
}

fn sneaker_line(sneaker: &Sneaker) -> String {
    if sneaker.colorway.is_empty() {
        format!("{} {}", sneaker.brand, sneaker.model)
    } else {
        format!("{} {} \"{}\"", sneaker.brand, sneaker.model, sneaker.colorway)
    }
}
