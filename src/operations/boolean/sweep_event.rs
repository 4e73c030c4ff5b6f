use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::{Index, IndexMut};

use slotmap::SlotMap;

use crate::math::{signed_area, Point2};

slotmap::new_key_type! {
    /// Handle of a sweep event in the [`EventArena`].
    pub(super) struct EventId;
}

/// How a segment relates to a coincident segment of the other operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EdgeType {
    Normal,
    NonContributing,
    SameTransition,
    DifferentTransition,
}

/// Origin of a line-operand segment, used to rebuild chains in input order.
#[derive(Debug, Clone, Copy)]
pub(super) struct EdgeRef {
    /// Index of the input chain.
    pub chain: usize,
    /// Index of the edge within the chain.
    pub index: usize,
    /// Start vertex of the unsplit input edge.
    pub origin: Point2,
}

/// One endpoint of a segment taking part in the sweep.
#[derive(Debug, Clone)]
pub(super) struct SweepEvent {
    pub point: Point2,
    pub left: bool,
    pub other: EventId,
    pub is_subject: bool,
    pub contour_id: usize,
    pub edge: Option<EdgeRef>,
    /// Creation order, used as the final tie-break of every ordering.
    pub seq: usize,
    /// Bumped whenever a queued event changes; older queue entries are stale.
    pub version: u32,
    pub edge_type: EdgeType,
    /// The segment is an inside-outside transition of its own operand.
    pub in_out: bool,
    /// The region below the segment lies outside the other operand.
    pub other_in_out: bool,
    /// `+1` entering the result upwards, `-1` leaving it, `0` not in the result.
    pub result_transition: i8,
    /// The segment coincides with a segment of the other operand.
    pub on_boundary: bool,
}

impl SweepEvent {
    pub fn in_result(&self) -> bool {
        self.result_transition != 0
    }
}

/// Owns every sweep event of one boolean operation.
#[derive(Default)]
pub(super) struct EventArena {
    events: SlotMap<EventId, SweepEvent>,
    next_seq: usize,
}

impl Index<EventId> for EventArena {
    type Output = SweepEvent;

    fn index(&self, id: EventId) -> &SweepEvent {
        &self.events[id]
    }
}

impl IndexMut<EventId> for EventArena {
    fn index_mut(&mut self, id: EventId) -> &mut SweepEvent {
        &mut self.events[id]
    }
}

impl EventArena {
    /// Creates a single event. `other` must be linked by the caller if not yet known.
    pub fn create(
        &mut self,
        point: Point2,
        left: bool,
        other: EventId,
        is_subject: bool,
        contour_id: usize,
        edge: Option<EdgeRef>,
    ) -> EventId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.insert(SweepEvent {
            point,
            left,
            other,
            is_subject,
            contour_id,
            edge,
            seq,
            version: 0,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            result_transition: 0,
            on_boundary: false,
        })
    }

    /// Creates both events of the segment `a`–`b` and marks the smaller one as left.
    pub fn create_segment(
        &mut self,
        a: Point2,
        b: Point2,
        is_subject: bool,
        contour_id: usize,
        edge: Option<EdgeRef>,
    ) -> (EventId, EventId) {
        let e1 = self.create(a, false, EventId::default(), is_subject, contour_id, edge);
        let e2 = self.create(b, false, e1, is_subject, contour_id, edge);
        self[e1].other = e2;
        if self.compare(e1, e2) == Ordering::Greater {
            self[e2].left = true;
        } else {
            self[e1].left = true;
        }
        (e1, e2)
    }

    pub fn other_point(&self, id: EventId) -> Point2 {
        self[self[id].other].point
    }

    pub fn is_vertical(&self, id: EventId) -> bool {
        self[id].point.x == self.other_point(id).x
    }

    /// Snapshot of the fields that decide the event order.
    pub fn key(&self, id: EventId) -> EventKey {
        let e = &self[id];
        EventKey {
            point: e.point,
            left: e.left,
            other_point: self.other_point(id),
            is_subject: e.is_subject,
            seq: e.seq,
        }
    }

    /// Sweep order of two events.
    pub fn compare(&self, a: EventId, b: EventId) -> Ordering {
        compare_events(&self.key(a), &self.key(b))
    }
}

/// Order-relevant state of an event, detached from the arena.
#[derive(Debug, Clone, Copy)]
pub(super) struct EventKey {
    pub point: Point2,
    pub left: bool,
    pub other_point: Point2,
    pub is_subject: bool,
    pub seq: usize,
}

impl EventKey {
    /// Whether `p` lies strictly above the line of this event's segment.
    pub fn is_below(&self, p: &Point2) -> bool {
        if self.left {
            signed_area(&self.point, &self.other_point, p) > 0.0
        } else {
            signed_area(&self.other_point, &self.point, p) > 0.0
        }
    }
}

/// Sweep order: by x, then y, right endpoints before left ones, then the
/// lower segment first, then subject before clipping.
pub(super) fn compare_events(e1: &EventKey, e2: &EventKey) -> Ordering {
    let (p1, p2) = (e1.point, e2.point);
    if p1.x != p2.x {
        return p1.x.total_cmp(&p2.x);
    }
    if p1.y != p2.y {
        return p1.y.total_cmp(&p2.y);
    }
    if e1.left != e2.left {
        return if e1.left {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if signed_area(&p1, &e1.other_point, &e2.other_point) != 0.0 {
        return if e1.is_below(&e2.other_point) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    match (e1.is_subject, e2.is_subject) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        _ => e1.seq.cmp(&e2.seq),
    }
}

struct QueueEntry {
    key: EventKey,
    id: EventId,
    version: u32,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    // Reversed: the heap must yield the smallest event first.
    fn cmp(&self, other: &Self) -> Ordering {
        compare_events(&other.key, &self.key)
    }
}

/// Priority queue of pending events.
///
/// Entries carry a snapshot of their ordering key. An event that changes
/// while queued is pushed again with a bumped version, and the outdated
/// entry is skipped when it surfaces.
#[derive(Default)]
pub(super) struct EventQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl EventQueue {
    pub fn push(&mut self, arena: &EventArena, id: EventId) {
        self.heap.push(QueueEntry {
            key: arena.key(id),
            id,
            version: arena[id].version,
        });
    }

    pub fn pop(&mut self, arena: &EventArena) -> Option<EventId> {
        while let Some(entry) = self.heap.pop() {
            if arena[entry.id].version == entry.version {
                return Some(entry.id);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
