use proptest::prelude::*;
use quickcheck::quickcheck;
use rand::seq::SliceRandom;
use unique_chars::{first_duplicate, is_unique, ASCII_SIZE};

quickcheck! {
    fn longer_than_alphabet_is_never_unique(s: Vec<u8>) -> bool {
        let mut s = s;
        while s.len() <= ASCII_SIZE {
            s.push(s.len() as u8);
        }
        !is_unique(&s)
    }
}

quickcheck! {
    fn check_is_idempotent(s: Vec<u8>) -> bool {
        is_unique(&s) == is_unique(&s)
    }
}

proptest! {
    #[test]
    fn inserted_repeat_is_found(
        s in proptest::collection::vec(0u8..128, 1..=64),
        pick in any::<prop::sample::Index>(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut s = s;
        let code = s[pick.index(s.len())];
        let pos = at.index(s.len() + 1);
        s.insert(pos, code);
        prop_assert!(!is_unique(&s));
        prop_assert!(first_duplicate(&s).is_some());
    }

    #[test]
    fn agrees_with_first_duplicate(s in proptest::collection::vec(0u8..128, 0..=ASCII_SIZE)) {
        prop_assert_eq!(is_unique(&s), first_duplicate(&s).is_none());
    }

    #[test]
    fn duplicate_positions_hold_same_code(s in proptest::collection::vec(any::<u8>(), 0..300)) {
        if let Some(dup) = first_duplicate(&s) {
            prop_assert!(dup.first < dup.second);
            prop_assert_eq!(s[dup.first], dup.code);
            prop_assert_eq!(s[dup.second], dup.code);
            prop_assert!(first_duplicate(&s[..dup.second]).is_none());
        }
    }
}

#[test]
fn shuffled_distinct_codes_are_unique() {
    let mut rng = rand::thread_rng();
    let mut alphabet: Vec<u8> = (0..ASCII_SIZE as u8).collect();
    for _ in 0..100 {
        alphabet.shuffle(&mut rng);
        let take = (alphabet[0] as usize) % (ASCII_SIZE + 1);
        assert!(is_unique(&alphabet[..take]));
    }
}
