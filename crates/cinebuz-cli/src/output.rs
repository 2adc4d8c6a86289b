use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use owo_colors::OwoColorize;
use serde_json::json;

use cinebuz_catalog::tmdb::image_url;
use cinebuz_catalog::Page;
use cinebuz_models::{CatalogItem, MediaDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{} {}", "✓".green(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "success", "message": msg.as_ref() }));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors are shown even in quiet mode.
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "error", "message": msg.as_ref() }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "info", "message": msg.as_ref() }));
            }
        }
    }

    /// Print one page of a listing, with the effective page position.
    pub fn listing(&self, page: &Page, current_page: u32, last_page: u32) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {
                let mut table = Table::new();
                table.load_preset(UTF8_FULL_CONDENSED);
                table.set_header(vec!["ID", "Kind", "Title", "Year", "Rating"]);
                for item in &page.results {
                    table.add_row(item_row(item));
                }
                println!("{table}");
                println!("Page {} of {}", current_page, last_page);
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "listing",
                    "page": current_page,
                    "total_pages": last_page,
                    "results": page.results,
                }));
            }
        }
    }

    pub fn detail(&self, detail: &MediaDetail) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {
                println!("{} ({})", detail.title.bold(), detail.kind.path_segment());
                if let Some(tagline) = &detail.tagline {
                    println!("{}", tagline.italic());
                }
                if let Some(overview) = &detail.overview {
                    println!("\n{overview}");
                }
                let mut facts = Vec::new();
                if let Some(date) = &detail.release_date {
                    facts.push(format!("Released {date}"));
                }
                if let Some(vote) = detail.vote_average {
                    facts.push(format!("Rated {vote:.1}"));
                }
                if let Some(runtime) = detail.runtime_minutes {
                    facts.push(format!("{runtime} min"));
                }
                if let Some(seasons) = detail.number_of_seasons {
                    facts.push(format!("{seasons} seasons"));
                }
                if !facts.is_empty() {
                    println!("\n{}", facts.join(" | "));
                }
                if !detail.genres.is_empty() {
                    let names: Vec<&str> =
                        detail.genres.iter().map(|g| g.name.as_str()).collect();
                    println!("Genres: {}", names.join(", "));
                }
                if !detail.cast.is_empty() {
                    let names: Vec<&str> =
                        detail.cast.iter().map(|c| c.name.as_str()).collect();
                    println!("Cast: {}", names.join(", "));
                }
                if let Some(path) = &detail.poster_path {
                    println!("Poster: {}", image_url("w500", path));
                }
                if let Some(key) = &detail.trailer_key {
                    println!("Trailer: https://www.youtube.com/watch?v={key}");
                }
                if !detail.similar.is_empty() {
                    println!("\nSimilar:");
                    let mut table = Table::new();
                    table.load_preset(UTF8_FULL_CONDENSED);
                    table.set_header(vec!["ID", "Kind", "Title", "Year", "Rating"]);
                    for item in &detail.similar {
                        table.add_row(item_row(item));
                    }
                    println!("{table}");
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "detail", "detail": detail }));
            }
        }
    }

    fn print_json(&self, value: &serde_json::Value) {
        match self.format {
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default())
            }
            _ => println!("{}", serde_json::to_string(value).unwrap_or_default()),
        }
    }
}

fn item_row(item: &CatalogItem) -> Vec<String> {
    vec![
        item.id.to_string(),
        item.kind.path_segment().to_string(),
        item.title.clone(),
        item.release_year().unwrap_or("").to_string(),
        item.vote_average
            .map(|v| format!("{v:.1}"))
            .unwrap_or_default(),
    ]
}
