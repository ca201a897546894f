//! Mint tier evaluation.
//!
//! Issuance quantity is decided solely by the payment attached to the
//! mint call:
//! - Zero payment: the free tier, issuing the base quantity.
//! - Payment at or above the paid-tier threshold: another base quantity.
//! - Anything in between (or negative): rejected, no fallback to the
//!   free tier.
//!
//! Tiers are cumulative. An address that minted the free tier and then
//! the paid tier holds 10 units.

/// Units issued per successful mint, for either tier.
pub const BASE_ISSUE_QUANTITY: u32 = 5;

/// Minimum payment for the paid tier, in stroops (0.01 XLM).
pub const PAID_TIER_THRESHOLD: i128 = 100_000;

/// Quantity issued for the given payment, or None when the payment
/// matches no tier.
pub fn quantity_for_payment(payment: i128) -> Option<u32> {
    if payment == 0 || payment >= PAID_TIER_THRESHOLD {
        Some(BASE_ISSUE_QUANTITY)
    } else {
        None
    }
}
