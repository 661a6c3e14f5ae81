//! # Rendering
//!
//! Plain-string renderers for the CLI. Each function returns the full text to print,
//! so the layout can be tested without capturing stdout.
//!
//! Column widths are computed with `unicode-width` so titles in any script stay
//! aligned. Color comes from `colored`, which disables itself when stdout is not a
//! terminal or `NO_COLOR` is set.

use colored::*;
use serde::Serialize;
use shelfapp::api::{CatalogSummary, CmdMessage, MessageLevel};
use shelfapp::error::Result;
use shelfapp::model::Book;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ID_WIDTH: usize = 4;
pub const NAME_WIDTH: usize = 36;
pub const AUTHOR_WIDTH: usize = 24;
pub const YEAR_WIDTH: usize = 6;
const ELLIPSIS: char = '…';

/// Pad `text` to exactly `width` display columns, truncating with an ellipsis.
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

pub fn render_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    let mut out = String::new();
    let header = format!(
        "{} {} {} {} {}",
        fit("ID", ID_WIDTH),
        fit("Title", NAME_WIDTH),
        fit("Author", AUTHOR_WIDTH),
        fit("Year", YEAR_WIDTH),
        "Category"
    );
    out.push_str(&format!("{}\n", header.bold()));

    for book in books {
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            fit(&book.id.to_string(), ID_WIDTH).yellow(),
            fit(&book.name, NAME_WIDTH),
            fit(&book.author, AUTHOR_WIDTH),
            fit(&book.date.to_string(), YEAR_WIDTH),
            book.category.cyan()
        ));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories.\n".to_string();
    }
    categories.iter().map(|c| format!("{}\n", c)).collect()
}

pub fn render_summary(summary: &CatalogSummary) -> String {
    let mut out = format!("{} {}\n", "Total books:".bold(), summary.total_books);
    let width = summary
        .categories
        .keys()
        .map(|c| c.width())
        .max()
        .unwrap_or(0);
    for (category, count) in &summary.categories {
        out.push_str(&format!("  {} {}\n", fit(category, width), count));
    }
    out
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
