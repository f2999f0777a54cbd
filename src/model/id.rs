use std::collections::BTreeSet;

use chrono::Utc;

/// Hands out list and task ids.
///
/// Ids are decimal millisecond timestamps, bumped so that every id is strictly
/// greater than the one before it. Two ids requested within the same
/// millisecond therefore never collide, and ids still sort in creation order.
/// Once the counter reaches `u64::MAX` ids stop sorting but stay unique: the
/// first value at or after the clock that is not already taken is used.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
    /// Every numeric id seen or issued
    taken: BTreeSet<u64>,
}

impl IdGenerator {
    /// Seed from existing ids so new ids never reuse a stored one.
    /// Non-numeric ids are ignored.
    pub fn seeded<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let taken: BTreeSet<u64> = ids
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .collect();
        let last = taken.last().copied().unwrap_or(0);
        IdGenerator { last, taken }
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(now_millis())
    }

    fn next_at(&mut self, now: u64) -> String {
        let id = match self.last.checked_add(1) {
            Some(next) => now.max(next),
            None => (now..=u64::MAX)
                .chain(0..now)
                .find(|v| !self.taken.contains(v))
                .unwrap_or(now),
        };
        self.last = self.last.max(id);
        self.taken.insert(id);
        id.to_string()
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
