//! Active touch contacts and per-round color assignment
//!
//! Raw touch streams are unreliable: duplicate downs, moves that arrive
//! before their down, ups for ids we never saw. The tracker tolerates all of
//! these silently instead of rejecting them.

use std::collections::BTreeMap;

use glam::Vec2;

use crate::config::Palette;

/// Hardware-assigned pointer id. Ids are transient and may be reused by the
/// platform after the finger lifts, so a `ContactId` is only meaningful while
/// its contact is (or was) in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(pub u32);

/// One actively tracked finger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub pos: Vec2,
    /// Palette index, fixed for the contact's lifetime
    pub color: usize,
}

/// Contacts keyed by pointer id. `BTreeMap` keeps iteration order stable,
/// which keeps replays and tests deterministic.
pub type ContactSet = BTreeMap<ContactId, Contact>;

/// Hands out palette indices to new contacts in arrival order, wrapping
/// around the palette. Reset only by starting a new round.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette_len: usize,
    issued: usize,
}

impl ColorAssigner {
    /// `palette_len` must be >= 1, enforced by round construction.
    pub fn new(palette_len: usize) -> Self {
        Self {
            palette_len,
            issued: 0,
        }
    }

    /// Palette index for the next new contact. The Nth distinct contact of a
    /// round gets `(N-1) % palette_len`, regardless of removals in between.
    pub fn next_color(&mut self) -> usize {
        let color = self.issued % self.palette_len;
        self.issued += 1;
        color
    }

    /// How many colors have been issued this round
    pub fn issued(&self) -> usize {
        self.issued
    }
}

/// Maintains the set of currently active touch contacts
#[derive(Debug, Clone)]
pub struct ContactTracker {
    contacts: ContactSet,
    colors: ColorAssigner,
}

impl ContactTracker {
    pub fn new(palette: &Palette) -> Self {
        Self {
            contacts: ContactSet::new(),
            colors: ColorAssigner::new(palette.len()),
        }
    }

    /// Finger down. A duplicate down for a live id keeps the existing color
    /// and just moves the contact.
    pub fn on_down(&mut self, id: ContactId, pos: Vec2) {
        match self.contacts.get_mut(&id) {
            Some(contact) => contact.pos = pos,
            None => self.insert_new(id, pos),
        }
    }

    /// Finger moved. A move for an unknown id is an implicit down: with
    /// multi-touch event batching a move can arrive before its down is
    /// recognized, and dropping it would lose the finger entirely.
    pub fn on_move(&mut self, id: ContactId, pos: Vec2) {
        match self.contacts.get_mut(&id) {
            Some(contact) => contact.pos = pos,
            None => self.insert_new(id, pos),
        }
    }

    /// Finger up. Unknown ids are ignored.
    pub fn on_up(&mut self, id: ContactId) {
        self.contacts.remove(&id);
    }

    /// Touch stream cancelled for this id; same effect as a lift.
    pub fn on_cancel(&mut self, id: ContactId) {
        self.contacts.remove(&id);
    }

    /// Read-only copy of the current contact set
    pub fn snapshot(&self) -> ContactSet {
        self.contacts.clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.contacts.contains_key(&id)
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.get(&id)
    }

    fn insert_new(&mut self, id: ContactId, pos: Vec2) {
        let color = self.colors.next_color();
        log::trace!("contact {:?} down at {:?}, palette index {}", id, pos, color);
        self.contacts.insert(id, Contact { id, pos, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> ContactTracker {
        ContactTracker::new(&Palette::default())
    }

    fn small_tracker(palette_len: usize) -> ContactTracker {
        let colors = (0..palette_len as u32).map(|i| i * 0x111111).collect();
        ContactTracker::new(&Palette::new(colors).unwrap())
    }

    #[test]
    fn test_down_creates_contact() {
        let mut t = tracker();
        t.on_down(ContactId(3), Vec2::new(10.0, 20.0));

        let contact = t.get(ContactId(3)).unwrap();
        assert_eq!(contact.pos, Vec2::new(10.0, 20.0));
        assert_eq!(contact.color, 0);
    }

    #[test]
    fn test_duplicate_down_keeps_color() {
        let mut t = tracker();
        t.on_down(ContactId(1), Vec2::ZERO);
        t.on_down(ContactId(1), Vec2::new(5.0, 5.0));

        let contact = t.get(ContactId(1)).unwrap();
        assert_eq!(contact.color, 0);
        assert_eq!(contact.pos, Vec2::new(5.0, 5.0));
        // No second color was consumed
        t.on_down(ContactId(2), Vec2::ZERO);
        assert_eq!(t.get(ContactId(2)).unwrap().color, 1);
    }

    #[test]
    fn test_move_before_down_is_implicit_add() {
        let mut t = tracker();
        t.on_move(ContactId(7), Vec2::new(1.0, 2.0));

        assert!(t.contains(ContactId(7)));
        assert_eq!(t.get(ContactId(7)).unwrap().color, 0);
    }

    #[test]
    fn test_move_updates_position_only() {
        let mut t = tracker();
        t.on_down(ContactId(1), Vec2::ZERO);
        t.on_move(ContactId(1), Vec2::new(42.0, 9.0));

        let contact = t.get(ContactId(1)).unwrap();
        assert_eq!(contact.pos, Vec2::new(42.0, 9.0));
        assert_eq!(contact.color, 0);
    }

    #[test]
    fn test_up_and_cancel_remove() {
        let mut t = tracker();
        t.on_down(ContactId(1), Vec2::ZERO);
        t.on_down(ContactId(2), Vec2::ZERO);

        t.on_up(ContactId(1));
        t.on_cancel(ContactId(2));
        assert!(t.is_empty());

        // Unknown ids are a silent no-op
        t.on_up(ContactId(99));
        t.on_cancel(ContactId(99));
    }

    #[test]
    fn test_colors_cycle_in_arrival_order() {
        let mut t = small_tracker(3);
        for id in 0..5u32 {
            t.on_down(ContactId(id), Vec2::ZERO);
        }
        let colors: Vec<usize> = (0..5u32)
            .map(|id| t.get(ContactId(id)).unwrap().color)
            .collect();
        assert_eq!(colors, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_color_counter_survives_removals() {
        let mut t = small_tracker(4);
        t.on_down(ContactId(1), Vec2::ZERO); // color 0
        t.on_down(ContactId(2), Vec2::ZERO); // color 1
        t.on_up(ContactId(1));
        t.on_down(ContactId(3), Vec2::ZERO); // color 2, not 0

        assert_eq!(t.get(ContactId(3)).unwrap().color, 2);
    }

    #[test]
    fn test_readded_id_is_a_fresh_contact() {
        let mut t = small_tracker(4);
        t.on_down(ContactId(5), Vec2::ZERO); // color 0
        t.on_up(ContactId(5));
        t.on_down(ContactId(5), Vec2::ZERO); // reused id, new contact

        assert_eq!(t.get(ContactId(5)).unwrap().color, 1);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut t = tracker();
        t.on_down(ContactId(1), Vec2::ZERO);

        let mut snap = t.snapshot();
        snap.clear();
        assert_eq!(t.len(), 1);
    }

    /// A raw touch event for replay testing
    #[derive(Debug, Clone)]
    enum Event {
        Down(u32, f32, f32),
        Move(u32, f32, f32),
        Up(u32),
        Cancel(u32),
    }

    fn event_strategy() -> impl Strategy<Value = Event> {
        let id = 0..8u32;
        let coord = -500.0..500.0f32;
        prop_oneof![
            (id.clone(), coord.clone(), coord.clone()).prop_map(|(i, x, y)| Event::Down(i, x, y)),
            (id.clone(), coord.clone(), coord).prop_map(|(i, x, y)| Event::Move(i, x, y)),
            id.clone().prop_map(Event::Up),
            id.prop_map(Event::Cancel),
        ]
    }

    proptest! {
        /// After any event sequence the set holds exactly the ids whose last
        /// event was a down or move, and colors follow arrival order.
        #[test]
        fn replay_matches_last_event_per_id(events in proptest::collection::vec(event_strategy(), 0..64)) {
            let mut t = small_tracker(3);
            let mut expected_live: std::collections::BTreeSet<u32> = Default::default();
            let mut expected_colors: std::collections::BTreeMap<u32, usize> = Default::default();
            let mut issued = 0usize;

            for event in &events {
                match *event {
                    Event::Down(id, x, y) | Event::Move(id, x, y) => {
                        t_apply(&mut t, event);
                        if expected_live.insert(id) {
                            expected_colors.insert(id, issued % 3);
                            issued += 1;
                        }
                        let contact = t.get(ContactId(id)).unwrap();
                        prop_assert_eq!(contact.pos, Vec2::new(x, y));
                    }
                    Event::Up(id) | Event::Cancel(id) => {
                        t_apply(&mut t, event);
                        expected_live.remove(&id);
                        expected_colors.remove(&id);
                    }
                }
            }

            let snap = t.snapshot();
            let live: std::collections::BTreeSet<u32> = snap.keys().map(|id| id.0).collect();
            prop_assert_eq!(&live, &expected_live);
            for (id, contact) in &snap {
                prop_assert_eq!(contact.color, expected_colors[&id.0]);
            }
            prop_assert_eq!(t.colors.issued(), issued);
        }
    }

    fn t_apply(t: &mut ContactTracker, event: &Event) {
        match *event {
            Event::Down(id, x, y) => t.on_down(ContactId(id), Vec2::new(x, y)),
            Event::Move(id, x, y) => t.on_move(ContactId(id), Vec2::new(x, y)),
            Event::Up(id) => t.on_up(ContactId(id)),
            Event::Cancel(id) => t.on_cancel(ContactId(id)),
        }
    }
}
