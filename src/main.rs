//! booklog - render a reading log offline

use std::fs;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use booklog::date::parse_iso_date;
use booklog::render::render_text;
use booklog::{
    BookStore, PageConfig, Period, RenderOptions, SortOrder, TimeFilter, ViewState, apply_view,
    featured_markup, render_list_html, select_featured,
};

#[derive(Parser)]
#[command(name = "booklog")]
#[command(version, about = "Filter, sort, and render a reading log", long_about = None)]
#[command(after_help = "EXAMPLES:
    booklog books2025.json                         All books, newest first
    booklog books2025.json -f this-year -s rating-desc
    booklog books2025.json -f specific-period -p 2025-06 --format html")]
struct Cli {
    /// Book data file (JSON array of records)
    #[arg(value_name = "DATA")]
    data: String,

    /// Time filter: all, this-month, this-year, last-3-months, specific-period
    #[arg(short, long)]
    filter: Option<String>,

    /// Sort order: date-asc, date-desc, rating-asc, rating-desc
    #[arg(short, long)]
    sort: Option<String>,

    /// Period for specific-period (YYYY-MM)
    #[arg(short, long)]
    period: Option<String>,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the featured book before the list
    #[arg(long)]
    featured: bool,

    /// Page configuration file (JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> booklog::Result<()> {
    let config = match &cli.config {
        Some(path) => PageConfig::load(path)?,
        None => PageConfig::default(),
    };

    let mut view: ViewState = config.initial_view();
    if let Some(filter) = &cli.filter {
        view.filter = filter.parse::<TimeFilter>()?;
    }
    if let Some(sort) = &cli.sort {
        view.sort = sort.parse::<SortOrder>()?;
    }
    if let Some(period) = &cli.period {
        view.period = Period::from_picker(period)?;
    }
    let today = match &cli.today {
        Some(date) => parse_iso_date(date)?,
        None => booklog::today(),
    };

    let mut store = BookStore::new();
    store.populate_from_json(&fs::read(&cli.data)?)?;
    let visible = apply_view(store.books(), &view, today);
    log::info!("{} of {} books match {}/{}", visible.len(), store.len(), view.filter, view.sort);

    let options = RenderOptions::from(&config);
    let featured = if cli.featured {
        select_featured(store.books())
    } else {
        None
    };

    match cli.format {
        OutputFormat::Text => {
            if let Some(book) = featured {
                println!("Featured: {} by {}\n", book.title, book.author);
            }
            print!("{}", render_text(&visible, &options));
        }
        OutputFormat::Html => {
            if let Some(book) = featured {
                println!("<div id=\"{}\">{}</div>", config.featured_id, featured_markup(book));
            }
            println!("<div id=\"{}\">", config.book_list_id);
            print!("{}", render_list_html(&visible, &options));
            println!("</div>");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "view": view,
                "today": today,
                "featured": featured,
                "books": visible,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
