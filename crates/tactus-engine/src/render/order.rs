use core::cmp::Ordering;

/// Render-bin number.
///
/// Negative bins are drawn before the parent's own leaves, the rest after them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
pub struct BinNumber(pub i32);

impl BinNumber {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn is_pre_bin(self) -> bool {
        self.0 < 0
    }
}

/// Stable sort key for child bins.
///
/// Ordering rules:
/// 1) `number`: ascending
/// 2) `order`: ascending (insertion order for equal numbers)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BinKey {
    pub number: BinNumber,
    pub order: u32,
}

impl BinKey {
    #[inline]
    pub const fn new(number: BinNumber, order: u32) -> Self {
        Self { number, order }
    }
}

impl Ord for BinKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.number.cmp(&other.number) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for BinKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_dominates_insertion_order() {
        let a = BinKey::new(BinNumber(-1), 5);
        let b = BinKey::new(BinNumber(0), 0);
        assert!(a < b);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        let a = BinKey::new(BinNumber(2), 0);
        let b = BinKey::new(BinNumber(2), 1);
        assert!(a < b);
    }

    #[test]
    fn zero_is_a_post_bin() {
        assert!(BinNumber(-1).is_pre_bin());
        assert!(!BinNumber(0).is_pre_bin());
    }
}
