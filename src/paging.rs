/// 1-based page cursor over the catalog's fixed-size identifier windows.
///
/// There is no upper bound: the catalog reports past-the-end pages as empty
/// windows, so "next" always advances. "previous" clamps at page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    page_size: u32,
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    pub fn at_first_page(&self) -> bool {
        self.page == 1
    }

    pub fn next(&mut self) {
        self.page += 1;
    }

    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}
