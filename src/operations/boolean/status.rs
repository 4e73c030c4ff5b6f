use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Bound;

use slotmap::SecondaryMap;

use crate::math::{signed_area, Point2};

use super::sweep_event::{compare_events, EventArena, EventId, EventKey};

/// A segment as stored in the sweep status, keyed by its left event.
///
/// The endpoints are captured on insertion. Later splits only move the right
/// endpoint along the same line, so the captured order stays valid.
#[derive(Debug, Clone, Copy)]
struct StatusKey {
    left: Point2,
    right: Point2,
    is_subject: bool,
    contour_id: usize,
    seq: usize,
    id: EventId,
}

impl StatusKey {
    fn is_below(&self, p: &Point2) -> bool {
        signed_area(&self.left, &self.right, p) > 0.0
    }

    fn event_key(&self) -> EventKey {
        EventKey {
            point: self.left,
            left: true,
            other_point: self.right,
            is_subject: self.is_subject,
            seq: self.seq,
        }
    }
}

/// Vertical order of two segments crossing the sweep line.
fn compare_segments(a: &StatusKey, b: &StatusKey) -> Ordering {
    if a.id == b.id {
        return Ordering::Equal;
    }

    let collinear =
        signed_area(&a.left, &a.right, &b.left) == 0.0 && signed_area(&a.left, &a.right, &b.right) == 0.0;

    if !collinear {
        if a.left == b.left {
            return if a.is_below(&b.right) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        if a.left.x == b.left.x {
            return if a.left.y < b.left.y {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        // Whichever segment entered the sweep later is placed against the other one.
        if compare_events(&a.event_key(), &b.event_key()) == Ordering::Greater {
            return if b.is_below(&a.left) {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        return if a.is_below(&b.left) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    if a.is_subject != b.is_subject {
        return if a.is_subject {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if a.left == b.left {
        if a.right == b.right {
            return a.seq.cmp(&b.seq);
        }
        return a
            .contour_id
            .cmp(&b.contour_id)
            .then(a.seq.cmp(&b.seq));
    }
    compare_events(&a.event_key(), &b.event_key())
}

impl PartialEq for StatusKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StatusKey {}

impl PartialOrd for StatusKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StatusKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_segments(self, other)
    }
}

/// Segments currently crossing the sweep line, ordered bottom to top.
#[derive(Default)]
pub(super) struct SweepStatus {
    set: BTreeSet<StatusKey>,
    keys: SecondaryMap<EventId, StatusKey>,
}

impl SweepStatus {
    /// Inserts the segment whose left event is `id`.
    pub fn insert(&mut self, arena: &EventArena, id: EventId) {
        let e = &arena[id];
        let key = StatusKey {
            left: e.point,
            right: arena.other_point(id),
            is_subject: e.is_subject,
            contour_id: e.contour_id,
            seq: e.seq,
            id,
        };
        self.set.insert(key);
        self.keys.insert(id, key);
    }

    /// Removes the segment whose left event is `id`; false if it was not present.
    pub fn remove(&mut self, id: EventId) -> bool {
        match self.keys.remove(id) {
            Some(key) => self.set.remove(&key),
            None => false,
        }
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.keys.contains_key(id)
    }

    /// Segment directly below `id`.
    pub fn prev(&self, id: EventId) -> Option<EventId> {
        let key = self.keys.get(id)?;
        self.set.range(..*key).next_back().map(|k| k.id)
    }

    /// Segment directly above `id`.
    pub fn next(&self, id: EventId) -> Option<EventId> {
        let key = self.keys.get(id)?;
        self.set
            .range((Bound::Excluded(*key), Bound::Unbounded))
            .next()
            .map(|k| k.id)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }
}
