// ABOUTME: Command-line front end for komik-core queries.
// ABOUTME: Runs one query against the comic site and prints the canonical result as JSON.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use komik_core::{extract_page_value, find_genre, genres, Client, ScrapeError, Site};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "komik")]
#[command(about = "Query comic listings, details and chapter images as JSON", long_about = None)]
struct Args {
    /// Page origin of the comic site.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Origin serving cover art.
    #[arg(long, global = true)]
    cover_origin: Option<String>,

    /// Origin serving chapter images.
    #[arg(long, global = true)]
    image_origin: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Newly released comics from the home page.
    NewReleases,
    /// Recently updated comics from the home page.
    Latest,
    /// One page of the comic list, optionally filtered by a search term.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        search: Option<String>,
    },
    /// Browse comics of one type (manga, manhwa, manhua).
    Type {
        name: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Browse comics tagged with a genre.
    Genre {
        slug: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Full detail for one comic.
    Detail { slug: String },
    /// Image URLs for one chapter of a comic.
    Chapter { slug: String, number: String },
    /// The built-in genre list.
    Genres,
    /// Dump the raw page payload for a site path.
    Raw { path: String },
}

fn build_client(args: &Args) -> Client {
    let defaults = Site::default();
    let site = Site::new(
        args.base_url.clone().unwrap_or(defaults.base_url),
        args.cover_origin.clone().unwrap_or(defaults.cover_origin),
        args.image_origin.clone().unwrap_or(defaults.image_origin),
    );

    let mut builder = Client::builder().site(site);
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

fn emit<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", out);
    Ok(())
}

/// Run the selected command. `Ok(false)` means the lookup found nothing.
async fn run(args: &Args) -> Result<bool> {
    let client = build_client(args);
    let compact = args.compact;

    match &args.command {
        Command::NewReleases => emit(&client.new_releases().await?, compact)?,
        Command::Latest => emit(&client.latest_updates().await?, compact)?,
        Command::List { page, search } => {
            emit(&client.list(*page, search.as_deref()).await?, compact)?
        }
        Command::Type { name, page } => emit(&client.by_type(name, *page).await?, compact)?,
        Command::Genre { slug, page } => {
            if find_genre(slug).is_none() {
                tracing::warn!(genre = %slug, "genre not in the built-in list");
            }
            emit(&client.by_genre(slug, *page).await?, compact)?
        }
        Command::Detail { slug } => match client.detail(slug).await? {
            Some(detail) => emit(&detail, compact)?,
            None => return Ok(false),
        },
        Command::Chapter { slug, number } => match client.chapter(slug, number).await {
            Some(chapter) => emit(&chapter, compact)?,
            None => return Ok(false),
        },
        Command::Genres => emit(&genres(), compact)?,
        Command::Raw { path } => {
            let html = client
                .fetch_html(path)
                .await
                .with_context(|| format!("fetching {}", path))?;
            match extract_page_value(&html) {
                Some(value) => emit(&value, compact)?,
                None => return Ok(false),
            }
        }
    }

    Ok(true)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("error: not found");
            ExitCode::from(2)
        }
        Err(err) => {
            if err.downcast_ref::<ScrapeError>().is_some() {
                eprintln!("error: upstream unavailable: {:#}", err);
            } else {
                eprintln!("error: {:#}", err);
            }
            ExitCode::from(1)
        }
    }
}
