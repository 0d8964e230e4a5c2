//! Offset pagination over an already ordered collection.
//!
//! Pages are 1-based. A page is out of range only when its start offset lies
//! strictly past the end of the collection, so the page starting exactly at
//! `len` comes back empty rather than as an error.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum PageError {
    #[error("page {page} is out of range for {total} items")]
    OutOfRange { page: u32, total: usize },
}

/// Slice out page `page` of `items`, `page_size` items per page.
pub fn select_page<T>(items: &[T], page: u32, page_size: usize) -> Result<&[T], PageError> {
    let total = items.len();
    let out_of_range = PageError::OutOfRange { page, total };

    if page == 0 {
        return Err(out_of_range);
    }
    let start = (page as usize - 1)
        .checked_mul(page_size)
        .ok_or(out_of_range)?;
    if start > total {
        return Err(out_of_range);
    }
    let end = start.saturating_add(page_size).min(total);
    Ok(&items[start..end])
}

/// Parse the raw `page` query value; anything that is not an integer falls
/// back to the first page. Negative numbers map to page 0 (out of range).
pub fn parse_page(raw: Option<&str>) -> u32 {
    match raw.map(str::trim).map(str::parse::<i64>) {
        Some(Ok(n)) if n < 0 => 0,
        Some(Ok(n)) => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}
