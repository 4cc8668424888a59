//! Property tests for padding and hashing

use proptest::prelude::*;
use sha256ref::constants::{BLOCK_SIZE, LENGTH_FIELD_SIZE};
use sha256ref::padding::pad;
use sha256ref::{hash, Hasher};

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..600)
}

proptest! {
    #[test]
    fn hashing_is_deterministic(msg in message()) {
        prop_assert_eq!(hash(&msg).unwrap(), hash(&msg).unwrap());
    }

    #[test]
    fn padded_length_and_trailer(msg in message()) {
        let padded = pad(&msg).unwrap();
        prop_assert_eq!(padded.len() % BLOCK_SIZE, 0);
        prop_assert!(padded.len() > msg.len() + LENGTH_FIELD_SIZE);
        prop_assert!(padded.len() <= msg.len() + BLOCK_SIZE + LENGTH_FIELD_SIZE);
        prop_assert_eq!(&padded[..msg.len()], &msg[..]);
        prop_assert_eq!(padded[msg.len()], 0x80);

        let mut field = [0u8; LENGTH_FIELD_SIZE];
        field.copy_from_slice(&padded[padded.len() - LENGTH_FIELD_SIZE..]);
        prop_assert_eq!(u64::from_be_bytes(field), msg.len() as u64 * 8);
    }

    #[test]
    fn single_bit_flip_changes_digest(
        msg in prop::collection::vec(any::<u8>(), 1..300),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut flipped = msg.clone();
        flipped[index.index(msg.len())] ^= 1 << bit;
        prop_assert_ne!(hash(&msg).unwrap(), hash(&flipped).unwrap());
    }

    #[test]
    fn incremental_matches_one_shot(
        msg in message(),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut cuts: Vec<usize> = cuts.iter().map(|i| i.index(msg.len() + 1)).collect();
        cuts.sort_unstable();

        let mut hasher = Hasher::new();
        let mut start = 0;
        for cut in cuts {
            hasher.update(&msg[start..cut]).unwrap();
            start = cut;
        }
        hasher.update(&msg[start..]).unwrap();

        prop_assert_eq!(hasher.finalize().unwrap(), hash(&msg).unwrap());
    }
}
