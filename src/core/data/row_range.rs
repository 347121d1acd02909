/// Half-open `[start, end)` interval of grid rows owned by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RowRange {
    pub start: u32,
    pub end: u32,
}

impl RowRange {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
