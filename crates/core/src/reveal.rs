//! One-shot reveal bookkeeping.
//!
//! Each watched element becomes visible at most once. The host's
//! intersection callbacks may re-deliver an element after it fired
//! (unobserve races the next batch); `mark_visible` absorbs that.

/// Pending-key set for a fixed group of watched elements. Keys are the
/// registration indices assigned by the caller.
#[derive(Debug, Clone)]
pub struct RevealSet {
    pending: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            pending: vec![true; count],
        }
    }

    /// Mark `key` visible. True exactly once per key; out-of-range keys
    /// and repeats return false.
    pub fn mark_visible(&mut self, key: usize) -> bool {
        match self.pending.get_mut(key) {
            Some(p) if *p => {
                *p = false;
                true
            }
            _ => false,
        }
    }

    /// Keys still awaiting their first intersection.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|&&p| p).count()
    }

    pub fn is_done(&self) -> bool {
        self.pending() == 0
    }
}

/// Parse a skill bar's progress marker, clamped to 0–100.
pub fn clamp_progress(raw: &str) -> Option<u8> {
    let value: i64 = raw.trim().parse().ok()?;
    Some(value.clamp(0, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_key_fires_once() {
        let mut set = RevealSet::new(3);
        assert!(set.mark_visible(1));
        assert!(!set.mark_visible(1));
        assert_eq!(set.pending(), 2);
    }

    #[test]
    fn out_of_range_key_is_ignored() {
        let mut set = RevealSet::new(2);
        assert!(!set.mark_visible(7));
        assert_eq!(set.pending(), 2);
    }

    #[test]
    fn done_after_all_fire() {
        let mut set = RevealSet::new(2);
        set.mark_visible(0);
        set.mark_visible(1);
        assert!(set.is_done());
    }

    #[test]
    fn progress_parses_and_clamps() {
        assert_eq!(clamp_progress("85"), Some(85));
        assert_eq!(clamp_progress(" 40 "), Some(40));
        assert_eq!(clamp_progress("140"), Some(100));
        assert_eq!(clamp_progress("-5"), Some(0));
        assert_eq!(clamp_progress("wide"), None);
        assert_eq!(clamp_progress(""), None);
    }
}
