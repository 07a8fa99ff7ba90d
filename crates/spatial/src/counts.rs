use serde::{Deserialize, Serialize};

/// Hostile / non-hostile split of one mob bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MobTally {
    pub hostile: u32,
    pub non_hostile: u32,
}

impl MobTally {
    pub fn record(&mut self, hostile: bool) {
        if hostile {
            self.hostile += 1;
        } else {
            self.non_hostile += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.hostile + self.non_hostile
    }
}

/// Fixed-size per-bucket counters, replaced wholesale on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterSet<T> {
    buckets: Vec<T>,
}

impl<T: Copy + Default> CounterSet<T> {
    /// A zeroed set with `len` buckets.
    pub fn zeroed(len: usize) -> Self {
        Self {
            buckets: vec![T::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Value of a bucket, or the zero value when `index` is out of range.
    pub fn get(&self, index: usize) -> T {
        self.buckets.get(index).copied().unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buckets
    }

    /// Zero every bucket, keeping the bucket count.
    pub fn clear(&mut self) {
        self.buckets.fill(T::default());
    }

    pub(crate) fn bucket_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buckets.get_mut(index)
    }
}

impl<T> From<Vec<T>> for CounterSet<T> {
    fn from(buckets: Vec<T>) -> Self {
        Self { buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_returns_default() {
        let set: CounterSet<u32> = CounterSet::zeroed(3);
        assert_eq!(set.get(2), 0);
        assert_eq!(set.get(3), 0);
        assert_eq!(set.get(usize::MAX), 0);

        let mobs: CounterSet<MobTally> = CounterSet::zeroed(1);
        assert_eq!(mobs.get(9), MobTally::default());
    }

    #[test]
    fn clear_keeps_length() {
        let mut set: CounterSet<u32> = CounterSet::zeroed(2);
        *set.bucket_mut(1).unwrap() = 5;
        assert_eq!(set.get(1), 5);
        set.clear();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &[0, 0]);
    }

    #[test]
    fn tally_splits_by_hostility() {
        let mut t = MobTally::default();
        t.record(true);
        t.record(false);
        t.record(true);
        assert_eq!(t.hostile, 2);
        assert_eq!(t.non_hostile, 1);
        assert_eq!(t.total(), 3);
    }
}
