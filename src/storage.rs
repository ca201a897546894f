//! Storage key definitions for the business card contract.

use soroban_sdk::{contracttype, Address};

/// Storage keys for the business card contract.
///
/// Card, token, ownership and issuer entries live in persistent storage;
/// the global counters live in instance storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum CardKey {
    /// Maps Address to CardInfo struct.
    /// Primary storage for registered card data.
    Card(Address),

    /// Maps token id to its CardToken struct.
    Token(u64),

    /// Maps Address to the Vec of token ids it currently holds.
    /// The list length is the address's balance.
    Owned(Address),

    /// Maps issuer Address to its outstanding-issue counter.
    Issued(Address),

    /// Next token id to assign at mint.
    NextTokenId,

    /// Total units currently in circulation.
    TotalSupply,
}

/// Time-to-live for card and token data in ledger entries.
pub const CARD_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const CARD_TTL_EXTEND: u32 = 2592000; // ~150 days
