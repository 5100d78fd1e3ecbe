//! Property tests for the address codec and unit conversion.

use proptest::prelude::*;
use solbal_primitives::{from_display_units, to_display_units, Address, PrimitiveError};

proptest! {
    #[test]
    fn address_round_trips(bytes in any::<[u8; 32]>()) {
        let address = Address::new(bytes);
        let decoded = Address::decode(&address.encode()).unwrap();
        prop_assert_eq!(decoded, address);
    }

    #[test]
    fn wrong_length_is_rejected(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(bytes.len() != 32);
        let text = bs58::encode(&bytes).into_string();
        prop_assert_eq!(
            Address::decode(&text),
            Err(PrimitiveError::InvalidLength { expected: 32, actual: bytes.len() })
        );
    }

    #[test]
    fn lamports_round_trip(lamports in any::<u64>()) {
        prop_assert_eq!(from_display_units(to_display_units(lamports)), Some(lamports));
    }
}
