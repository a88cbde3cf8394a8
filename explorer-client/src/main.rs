use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

mod api;
mod models;
mod notify;
mod recent;
mod view;

use api::GatewayClient;
use notify::NoticeKind;
use recent::FileStore;
use view::{Phase, ViewState};

fn print_notices(state: &mut ViewState) {
    for notice in state.notices.drain() {
        let mark = match notice.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
        };
        println!("{} {}", mark, notice.message);
    }
}

fn print_recent(state: &ViewState) {
    if !state.recent_terms().is_empty() {
        println!("Recent: {}", state.recent_terms().join(", "));
    }
}

fn print_cards(state: &ViewState) {
    println!("Search Results");
    for (i, card) in state.cards().iter().enumerate() {
        let cover = card
            .cover_url
            .clone()
            .unwrap_or_else(|| "No cover".to_string());
        println!("[{}] {}", i, card.title);
        if let Some(author) = &card.author_line {
            println!("    {}", author);
        }
        if let Some(year) = &card.year_line {
            println!("    {}", year);
        }
        println!("    {}", cover);
    }
    println!("Commands: open <n> | recent <n> | close | quit | <new search>");
}

fn print_detail(state: &ViewState) {
    let Some(detail) = state.detail() else { return };
    println!("=== {} ===", detail.title);
    println!(
        "Cover: {}",
        detail
            .cover_url
            .unwrap_or_else(|| "No cover available".to_string())
    );
    if let Some(author) = detail.author {
        println!("Author: {}", author);
    }
    if let Some(year) = detail.year {
        println!("First Published: {}", year);
    }
    if let Some(publisher) = detail.publisher {
        println!("Publisher: {}", publisher);
    }
    if let Some(subjects) = detail.subjects {
        println!("Subjects: {}", subjects.join(", "));
    }
    println!("Description: {}", detail.description);
    println!("Link: {}", detail.permalink);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("explorer_client=info")
        .init();

    let gateway_url =
        std::env::var("GATEWAY_URL").unwrap_or_else(|_| "http://0.0.0.0:3000".to_string());
    let store_path = std::env::var("RECENT_SEARCHES_PATH")
        .unwrap_or_else(|_| "recent_searches.json".to_string());

    info!("Using gateway at {}", gateway_url);

    let client = Arc::new(GatewayClient::new(gateway_url));
    let mut state = ViewState::new(Box::new(FileStore::new(store_path)));
    let (desc_tx, mut desc_rx) = mpsc::channel::<Result<String, String>>(4);

    println!("Book Explorer");
    print_recent(&state);
    println!("Type a search term, or: open <n> | recent <n> | close | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim().to_string();

                if line == "quit" || line == "exit" {
                    break;
                } else if line == "close" {
                    state.dismiss();
                    if state.phase() == Phase::ResultsShown {
                        print_cards(&state);
                    }
                } else if let Some(n) = line.strip_prefix("open ") {
                    let selected = n.parse().ok().and_then(|i| state.select(i));
                    match selected {
                        Some(book) => {
                            // Detail renders right away; the description
                            // fetch runs on its own task and reports back.
                            print_detail(&state);
                            let client = Arc::clone(&client);
                            let tx = desc_tx.clone();
                            tokio::spawn(async move {
                                let outcome = client
                                    .describe(&book)
                                    .await
                                    .map_err(|e| e.to_string());
                                let _ = tx.send(outcome).await;
                            });
                        }
                        None => println!("No such result"),
                    }
                } else if let Some(n) = line.strip_prefix("recent ") {
                    match n.parse().ok() {
                        Some(i) if state.recall_recent(i) => {
                            println!("Search: {}", state.input());
                        }
                        _ => println!("No such recent search"),
                    }
                } else {
                    state.set_input(&line);
                    if let Some(query) = state.begin_search() {
                        let outcome = client.search(&query).await;
                        state.finish_search(&query, outcome);
                        if state.results_visible() {
                            print_cards(&state);
                        }
                        print_recent(&state);
                    }
                    print_notices(&mut state);
                }
            }
            Some(outcome) = desc_rx.recv() => {
                state.resolve_description(outcome);
                if let Some(detail) = state.detail() {
                    println!("Description: {}", detail.description);
                }
            }
        }
    }

    Ok(())
}
