//! # Rendering Module
//!
//! Turns command results into terminal text using the templates in
//! [`templates`](super::templates) and the theme in [`styles`](super::styles).
//!
//! Layout calculations (key column width) stay in Rust because they need Unicode-aware
//! widths; templates only decide structure and which style applies where.

use super::styles::{names, DIRECTORY_THEME};
use super::templates::{
    MENU_TEMPLATE, MESSAGES_TEMPLATE, PAGE_TEMPLATE, RECORDS_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use minijinja::{Environment, Error, Value};
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::model::{Field, RecordFields};
use phonebook::page::{ListedRecord, PageView};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const SEPARATOR: &str = "---------------------------------";

#[derive(Serialize)]
struct FieldLine {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct EntryData {
    header: String,
    fields: Vec<FieldLine>,
}

#[derive(Serialize)]
struct PageData {
    entries: Vec<EntryData>,
    separator: &'static str,
}

#[derive(Serialize)]
struct RecordsData {
    title: &'static str,
    records: Vec<EntryData>,
    separator: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MenuItem {
    key: String,
    label: String,
}

#[derive(Serialize)]
struct MenuData {
    items: Vec<MenuItem>,
}

fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        DIRECTORY_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

/// `key:` padded so values line up in one column.
fn field_lines(fields: &RecordFields) -> Vec<FieldLine> {
    let key_width = Field::ALL
        .iter()
        .map(|f| f.key().width() + 1)
        .max()
        .unwrap_or(0);

    fields
        .entries()
        .into_iter()
        .map(|(field, value)| {
            let key = format!("{}:", field.key());
            let padding = " ".repeat(key_width.saturating_sub(key.width()));
            FieldLine {
                key: format!("{}{}", key, padding),
                value: value.to_string(),
            }
        })
        .collect()
}

/// Renders one page view. `PageView::Stop` renders nothing.
pub fn render_page(view: &PageView, use_color: bool) -> String {
    let PageView::Page { entries, .. } = view else {
        return String::new();
    };

    let data = PageData {
        entries: entries
            .iter()
            .map(|entry| EntryData {
                header: format!("Page {}, record {}", entry.page, entry.position),
                fields: field_lines(&entry.fields),
            })
            .collect(),
        separator: SEPARATOR,
    };

    render_template(PAGE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_pages(views: &[PageView], use_color: bool) -> String {
    views.iter().map(|v| render_page(v, use_color)).collect()
}

/// Renders records with their position in the whole set, e.g. search results.
pub fn render_records(records: &[ListedRecord], use_color: bool) -> String {
    render_listed("Found records:", records, use_color)
}

/// The record picked for editing.
pub fn render_current(record: &ListedRecord, use_color: bool) -> String {
    render_listed("Current record:", std::slice::from_ref(record), use_color)
}

fn render_listed(title: &'static str, records: &[ListedRecord], use_color: bool) -> String {
    let data = RecordsData {
        title,
        records: records
            .iter()
            .map(|lr| EntryData {
                header: format!("Record {} (id {})", lr.position, lr.record.id),
                fields: field_lines(&lr.record.fields()),
            })
            .collect(),
        separator: SEPARATOR,
    };

    render_template(RECORDS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn render_menu(items: &[(usize, &str)], use_color: bool) -> String {
    let data = MenuData {
        items: items
            .iter()
            .map(|(key, label)| MenuItem {
                key: key.to_string(),
                label: label.to_string(),
            })
            .collect(),
    };

    render_template(MENU_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        items
            .iter()
            .map(|(key, label)| format!("{} {}\n", key, label))
            .collect()
    })
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}
