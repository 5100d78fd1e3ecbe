//! Conversion between lamports (atomic unit) and SOL (display unit).

use crate::constants::{LAMPORTS_PER_SOL, SOL_DECIMALS};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Converts a lamport amount to SOL.
///
/// The result is exact for every `u64`; trailing zeros are stripped so that
/// `2_500_000_000` displays as `2.5`.
#[must_use]
pub fn to_display_units(lamports: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(lamports), SOL_DECIMALS).normalize()
}

/// Converts a SOL amount to lamports.
///
/// Returns `None` for negative amounts, amounts with more than nine
/// fractional digits, and amounts that do not fit in a `u64`.
#[must_use]
pub fn from_display_units(sol: Decimal) -> Option<u64> {
    if sol.is_sign_negative() && !sol.is_zero() {
        return None;
    }
    let lamports = sol.checked_mul(Decimal::from(LAMPORTS_PER_SOL))?;
    if !lamports.fract().is_zero() {
        return None;
    }
    lamports.trunc().to_u64()
}
