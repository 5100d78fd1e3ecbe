//! Protocol constants.

/// Size of an account address in bytes.
pub const ADDRESS_SIZE: usize = 32;

/// Size of a transaction signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Number of fractional digits in a SOL amount.
pub const SOL_DECIMALS: u32 = 9;
