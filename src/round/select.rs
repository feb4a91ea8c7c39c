//! Uniform winner selection over a contact snapshot

use rand::Rng;

use super::contact::{ContactId, ContactSet};

/// Pick one contact uniformly at random, or `None` if nobody is touching.
///
/// Pure in its snapshot: only the RNG advances. The draw is a single
/// `random_range` over the set size, so every contact has probability 1/N
/// regardless of how ids are distributed or when fingers arrived. The
/// controller guarantees this is called exactly once per round.
pub fn select_winner<R: Rng>(contacts: &ContactSet, rng: &mut R) -> Option<ContactId> {
    if contacts.is_empty() {
        return None;
    }
    let index = rng.random_range(0..contacts.len());
    contacts.keys().nth(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::contact::Contact;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn set_of(ids: &[u32]) -> ContactSet {
        ids.iter()
            .map(|&id| {
                let id = ContactId(id);
                (
                    id,
                    Contact {
                        id,
                        pos: Vec2::ZERO,
                        color: 0,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_set_has_no_winner() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(select_winner(&ContactSet::new(), &mut rng), None);
    }

    #[test]
    fn test_single_contact_always_wins() {
        let contacts = set_of(&[42]);
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(select_winner(&contacts, &mut rng), Some(ContactId(42)));
        }
    }

    #[test]
    fn test_winner_is_a_member() {
        let contacts = set_of(&[3, 17, 29]);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let winner = select_winner(&contacts, &mut rng).unwrap();
            assert!(contacts.contains_key(&winner));
        }
    }

    #[test]
    fn test_uniform_over_five_contacts() {
        // Ids are deliberately sparse and unordered-looking so a biased
        // draw over the id space (rather than the member list) would fail.
        let ids = [2u32, 9, 11, 40, 300];
        let contacts = set_of(&ids);
        let mut rng = Pcg32::seed_from_u64(0xDECAF);

        let mut hits = std::collections::BTreeMap::new();
        const DRAWS: u32 = 10_000;
        for _ in 0..DRAWS {
            let winner = select_winner(&contacts, &mut rng).unwrap();
            *hits.entry(winner).or_insert(0u32) += 1;
        }

        let expected = DRAWS as f64 / ids.len() as f64;
        for &id in &ids {
            let count = hits[&ContactId(id)] as f64;
            let deviation = (count - expected).abs() / expected;
            assert!(
                deviation < 0.20,
                "contact {} drawn {} times, expected ~{}",
                id,
                count,
                expected
            );
        }
    }
}
