//! # solbal Primitives
//!
//! Fundamental types shared by the solbal crates:
//! - `Address`: 32-byte account identifier, displayed as base-58
//! - `Signature`: 64-byte transaction signature, displayed as base-58
//! - `native_token`: conversion between lamports and SOL
//!
//! ## Example
//!
//! ```rust
//! use solbal_primitives::{native_token, Address};
//!
//! let address: Address = "11111111111111111111111111111111".parse().unwrap();
//! assert_eq!(address.as_bytes(), &[0u8; 32]);
//!
//! let sol = native_token::to_display_units(2_500_000_000);
//! assert_eq!(sol.to_string(), "2.5");
//! ```

pub mod address;
mod base58;
pub mod constants;
pub mod error;
pub mod native_token;
pub mod signature;

// Re-exports
pub use address::Address;
pub use constants::*;
pub use error::{PrimitiveError, PrimitiveResult};
pub use native_token::{from_display_units, to_display_units};
pub use signature::Signature;
