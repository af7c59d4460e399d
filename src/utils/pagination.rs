use serde::Deserialize;

fn first_page() -> i64 {
    1
}

/// `?page=N` query, 1-based.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: i64,
}

impl Pagination {
    /// Zero-based page index, `None` for pages below 1.
    pub fn index(&self) -> Option<u64> {
        u64::try_from(self.page.checked_sub(1)?).ok()
    }

    /// Zero-based page index if the page holds at least one of `total` items.
    pub fn index_within(&self, total: u64, per_page: u64) -> Option<u64> {
        self.index().filter(|&index| index < total.div_ceil(per_page))
    }
}
