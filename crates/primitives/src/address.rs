//! Implementation of `Address`, the 32-byte identifier of a ledger account.

use crate::base58;
use crate::constants::ADDRESS_SIZE;
use crate::error::{PrimitiveError, PrimitiveResult};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 32-byte account address (public key), displayed as base-58.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Alias for the address width in bytes.
    pub const LENGTH: usize = ADDRESS_SIZE;

    /// Creates an address from its raw bytes.
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if the slice is not exactly 32 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        <[u8; ADDRESS_SIZE]>::try_from(value)
            .map(Self)
            .map_err(|_| PrimitiveError::InvalidLength {
                expected: ADDRESS_SIZE,
                actual: value.len(),
            })
    }

    /// Decodes a base-58 address.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidEncoding` for characters outside the
    /// base-58 alphabet and `PrimitiveError::InvalidLength` when the decoded
    /// value is not 32 bytes long.
    pub fn decode(text: &str) -> PrimitiveResult<Self> {
        base58::decode_fixed::<ADDRESS_SIZE>(text).map(Self)
    }

    /// Encodes the address as base-58.
    #[must_use]
    pub fn encode(&self) -> String {
        base58::encode(&self.0)
    }

    /// Returns the raw bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Consumes the address, returning its bytes.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; ADDRESS_SIZE] {
        self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = PrimitiveError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encode())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::decode(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";
    const WALLET: &str = "5BgTrJEQw1XWSJ1DiX1hT78xiHC1RpNtcV8rwrbmGfwU";
    /// Longest base-58 string that can decode to 32 bytes.
    const MAX_BASE58_LEN: usize = 44;

    #[test]
    fn decodes_all_zero_address() {
        let address = Address::decode(SYSTEM_PROGRAM).unwrap();
        assert_eq!(address, Address::default());
        assert_eq!(address.encode(), SYSTEM_PROGRAM);
    }

    #[test]
    fn wallet_address_round_trips() {
        let address: Address = WALLET.parse().unwrap();
        assert_eq!(address.to_string(), WALLET);
        assert!(WALLET.len() <= MAX_BASE58_LEN);
        assert_eq!(Address::new([0xff; 32]).encode().len(), MAX_BASE58_LEN);
    }

    #[test]
    fn rejects_short_and_long_payloads() {
        let short = "1".repeat(31);
        assert_eq!(
            Address::decode(&short),
            Err(PrimitiveError::InvalidLength {
                expected: 32,
                actual: 31
            })
        );

        let long = "1".repeat(33);
        assert_eq!(
            Address::decode(&long),
            Err(PrimitiveError::InvalidLength {
                expected: 32,
                actual: 33
            })
        );

        assert_eq!(
            Address::decode(""),
            Err(PrimitiveError::InvalidLength {
                expected: 32,
                actual: 0
            })
        );
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        for bad in ['0', 'O', 'I', 'l'] {
            let mut text = WALLET.to_string();
            text.replace_range(3..4, &bad.to_string());
            assert_eq!(
                Address::decode(&text),
                Err(PrimitiveError::InvalidEncoding {
                    character: bad,
                    index: 3
                })
            );
        }
    }

    #[test]
    fn from_bytes_checks_length() {
        assert!(Address::from_bytes(&[7u8; 32]).is_ok());
        assert!(matches!(
            Address::from_bytes(&[7u8; 20]),
            Err(PrimitiveError::InvalidLength { actual: 20, .. })
        ));
    }

    #[test]
    fn serde_uses_base58_text() {
        let address = Address::decode(WALLET).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{WALLET}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
        assert!(serde_json::from_str::<Address>("\"0OIl\"").is_err());
    }
}
