pub const START: &str = "-START-";
pub const START2: &str = "-START2-";
pub const END: &str = "-END-";
pub const END2: &str = "-END2-";

/// Offsets reachable from any sentence position without bounds checks.
pub const WINDOW: isize = 2;

/// A sentence padded with two sentinels on each side so every position
/// has a full `-2..=2` window.
#[derive(Debug, Clone)]
pub struct Context {
    items: Vec<String>,
}

impl Context {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let items = items.into_iter();
        let mut padded = Vec::with_capacity(items.size_hint().0 + 4);
        padded.push(START.to_string());
        padded.push(START2.to_string());
        padded.extend(items);
        padded.push(END.to_string());
        padded.push(END2.to_string());
        Self { items: padded }
    }

    /// Number of real (unpadded) items.
    pub fn len(&self) -> usize {
        self.items.len() - 4
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at sentence position `k` shifted by `offset` (within `±WINDOW`).
    #[inline]
    pub fn at(&self, k: usize, offset: isize) -> &str {
        debug_assert!(offset.abs() <= WINDOW);
        &self.items[(k + WINDOW as usize).wrapping_add_signed(offset)]
    }
}
