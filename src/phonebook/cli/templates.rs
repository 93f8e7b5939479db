//! Terminal output templates.
//!
//! Templates are minijinja files kept next to this module and compiled in as string
//! constants. They are rendered with `trim_blocks` and `lstrip_blocks`, so a line holding
//! only a block tag produces no output and every expression line ends in exactly one
//! newline.
//!
//! Styling goes through the `style` filter (`{{ text | style("header") }}`); layout
//! (column padding, labels) is computed in Rust before the data reaches the template.

pub const PAGE_TEMPLATE: &str = include_str!("templates/page.tmp");
pub const RECORDS_TEMPLATE: &str = include_str!("templates/records.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MENU_TEMPLATE: &str = include_str!("templates/menu.tmp");
