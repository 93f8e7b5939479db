use crate::commands::{CmdMessage, CmdResult};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::{DirectoryError, Result};
use crate::model::Record;
use crate::page::{PageEntry, PageView, Pages};
use std::collections::BTreeMap;

/// Groups records into pages of `page_size`, numbered from 1.
///
/// The last page may be short. An empty slice yields no pages. A `page_size` of 0
/// falls back to the default.
pub fn paginate(records: &[Record], page_size: usize) -> Pages {
    let size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };

    let pages: BTreeMap<usize, Vec<Record>> = records
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| (i + 1, chunk.to_vec()))
        .collect();

    Pages::from_map(pages)
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size)
}

/// Resolves a page request.
///
/// `0` means stop paging. Any other number outside `1..=page_count` is an
/// [`DirectoryError::InvalidPage`] the caller should re-prompt for.
pub fn render_page(page_number: usize, pages: &Pages) -> Result<PageView> {
    if page_number == 0 {
        return Ok(PageView::Stop);
    }

    let records = pages.get(page_number).ok_or(DirectoryError::InvalidPage {
        page: page_number,
        page_count: pages.page_count(),
    })?;

    let entries = records
        .iter()
        .enumerate()
        .map(|(i, record)| PageEntry {
            page: page_number,
            position: i + 1,
            fields: record.fields(),
        })
        .collect();

    Ok(PageView::Page {
        number: page_number,
        page_count: pages.page_count(),
        entries,
    })
}

/// Renders one page, or every page when `page` is `None`.
pub fn run(records: &[Record], page_size: usize, page: Option<usize>) -> Result<CmdResult> {
    let pages = paginate(records, page_size);
    let mut result = CmdResult::default();

    if pages.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
        return Ok(result);
    }

    let views = match page {
        Some(number) => match render_page(number, &pages)? {
            PageView::Stop => Vec::new(),
            view => vec![view],
        },
        None => pages
            .iter()
            .map(|(number, _)| render_page(number, &pages))
            .collect::<Result<Vec<_>>>()?,
    };

    Ok(result.with_pages(views))
}
