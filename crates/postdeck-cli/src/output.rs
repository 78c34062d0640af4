//! View-model rendering

use colored::*;
use postdeck_core::types::Post;
use postdeck_core::{PageView, ViewModel};

use crate::error::CliResult;

/// Output format for rendered views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON view-model per render
    Json,
}

/// Print a view in the specified format
pub fn print_view(view: &ViewModel, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => println!("{}", format_view(view)),
        OutputFormat::Json => println!("{}", serde_json::to_string(view)?),
    }
    Ok(())
}

/// Render a view as text
pub fn format_view(view: &ViewModel) -> String {
    match view {
        ViewModel::Loading => format!("{}", "Loading posts...".dimmed()),
        ViewModel::Error { message } => {
            format!("{} Failed to load posts: {}", "✗".red(), message)
        }
        ViewModel::Ready(_) if view.is_empty_result() => {
            format!("{}", "No Posts Found".dimmed())
        }
        ViewModel::Ready(page) => format_page(page),
    }
}

fn format_page(page: &PageView) -> String {
    let nav = format_navigation(page);
    let rule = "─".repeat(40).dimmed().to_string();

    let mut out = Vec::new();
    out.push(format!("{} Results", page.result_count).bold().to_string());
    out.push(nav.clone());
    out.push(rule.clone());
    for post in &page.visible {
        out.push(format_post(post));
        out.push(rule.clone());
    }
    out.push(nav);
    out.join("\n")
}

/// `<< < [page/total] > >>`, dimming moves that go nowhere
fn format_navigation(page: &PageView) -> String {
    let back = |s: &str| {
        if page.can_go_previous() {
            s.normal()
        } else {
            s.dimmed()
        }
    };
    let forward = |s: &str| {
        if page.can_go_next() {
            s.normal()
        } else {
            s.dimmed()
        }
    };

    format!(
        "{} {} [{}/{}] {} {}",
        back("<<"),
        back("<"),
        page.current_page,
        page.total_pages.max(1),
        forward(">"),
        forward(">>"),
    )
}

fn format_post(post: &Post) -> String {
    let categories: Vec<&str> = post.category_names().collect();
    let mut lines = vec![
        post.title.bold().to_string(),
        format!(
            "Date Published: {}",
            post.publish_date.format("%a, %d %b %Y %H:%M:%S GMT")
        ),
        format!("Author: {}", post.author.name),
        format!("Avatar: {}", post.author.avatar.dimmed()),
        post.summary.clone(),
    ];
    if !categories.is_empty() {
        lines.push(format!("Categories: {}", categories.join(", ").cyan()));
    }
    lines.join("\n")
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
}
