//! # Soroban Business Card
//!
//! Digital business-card registry with a tiered token issuance ledger for
//! the Soroban blockchain ecosystem.
//!
//! Each participant registers card info (name, personality code, phone,
//! company) and can mint token units representing that card:
//!
//! - Free-form card info, one record per address, overwrite in place
//! - Tiered minting: 5 units free, 5 more at or above the paid threshold
//! - Transfers move single units and keep the issuer tag immutable
//! - Per-issuer outstanding counters tracked separately from balances
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Register card info
//! client.register_info(&caller, &name, &personality, &phone, &company);
//!
//! // Mint the free tier, then the paid tier
//! client.mint(&caller, &uri, &0);
//! client.mint(&caller, &uri, &100_000);
//!
//! // Hand a card to someone
//! client.transfer(&caller, &recipient, &front_text, &back_text);
//! ```

#![no_std]

mod card;
mod events;
mod storage;
mod tiers;

pub use card::{CardInfo, CardToken};
pub use storage::CardKey;
pub use tiers::{quantity_for_payment, BASE_ISSUE_QUANTITY, PAID_TIER_THRESHOLD};

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

use crate::events::*;
use crate::storage::{CARD_TTL_EXTEND, CARD_TTL_THRESHOLD};

/// Error codes for the business card contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CardError {
    /// Caller holds fewer tokens than the operation requires.
    InsufficientBalance = 1,
    /// Mint payment is above zero but below the paid-tier threshold.
    UnderfundedMint = 2,
    /// Transfer target is not a valid recipient.
    InvalidRecipient = 3,
    /// Referenced token id does not exist.
    TokenNotFound = 4,
}

impl From<CardError> for soroban_sdk::Error {
    fn from(e: CardError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct BusinessCardContract;

#[contractimpl]
impl BusinessCardContract {
    // ========== Card Info ==========

    /// Register business-card info for the caller.
    ///
    /// All four fields are free-form text; empty strings are legal and no
    /// validation is applied. A repeated call overwrites the prior record
    /// in place.
    pub fn register_info(
        env: Env,
        caller: Address,
        name: String,
        personality: String,
        phone: String,
        company: String,
    ) {
        caller.require_auth();

        let card = CardInfo::new(name, personality, phone, company);
        env.storage()
            .persistent()
            .set(&CardKey::Card(caller.clone()), &card);

        env.storage().persistent().extend_ttl(
            &CardKey::Card(caller.clone()),
            CARD_TTL_THRESHOLD,
            CARD_TTL_EXTEND,
        );

        emit_card_registered(&env, &caller);
    }

    /// Get the card info registered for an address.
    ///
    /// An address that never registered returns an all-empty record
    /// rather than an error.
    pub fn get_info(env: Env, address: Address) -> CardInfo {
        env.storage()
            .persistent()
            .get(&CardKey::Card(address))
            .unwrap_or_else(|| CardInfo::empty(&env))
    }

    // ========== Issuance ==========

    /// Mint card tokens to the caller.
    ///
    /// The quantity is decided solely by `payment` (in stroops):
    /// zero issues the free tier of 5 units, a payment at or above
    /// [`PAID_TIER_THRESHOLD`] issues 5 more. Tiers are cumulative and
    /// the free tier may be minted repeatedly.
    ///
    /// Every issued unit is tagged with issuer = caller; the tag never
    /// changes afterwards. `uri` is opaque metadata stored on each unit.
    ///
    /// # Returns
    /// The quantity issued.
    ///
    /// # Panics
    /// - If `payment` is negative, or above zero but below the threshold
    pub fn mint(env: Env, caller: Address, uri: String, payment: i128) -> u32 {
        caller.require_auth();

        let quantity = tiers::quantity_for_payment(payment)
            .unwrap_or_else(|| panic_with_error!(&env, CardError::UnderfundedMint));

        let mut next_id: u64 = env
            .storage()
            .instance()
            .get(&CardKey::NextTokenId)
            .unwrap_or(0);
        let mut owned = Self::owned_tokens(&env, &caller);

        for _ in 0..quantity {
            let token = CardToken::new(&env, caller.clone(), uri.clone());
            env.storage()
                .persistent()
                .set(&CardKey::Token(next_id), &token);
            env.storage().persistent().extend_ttl(
                &CardKey::Token(next_id),
                CARD_TTL_THRESHOLD,
                CARD_TTL_EXTEND,
            );
            owned.push_back(next_id);
            next_id += 1;
        }

        Self::write_owned(&env, &caller, &owned);
        env.storage()
            .instance()
            .set(&CardKey::NextTokenId, &next_id);

        // Issuer provenance: incremented here, decremented only when the
        // issuer transfers a unit out first-hand or a unit is burned.
        let issued: u32 = env
            .storage()
            .persistent()
            .get(&CardKey::Issued(caller.clone()))
            .unwrap_or(0);
        env.storage()
            .persistent()
            .set(&CardKey::Issued(caller.clone()), &(issued + quantity));
        env.storage().persistent().extend_ttl(
            &CardKey::Issued(caller.clone()),
            CARD_TTL_THRESHOLD,
            CARD_TTL_EXTEND,
        );

        let supply: u64 = env
            .storage()
            .instance()
            .get(&CardKey::TotalSupply)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&CardKey::TotalSupply, &(supply + quantity as u64));

        emit_cards_minted(&env, &caller, quantity, payment);

        quantity
    }

    /// Transfer one card token from the caller to `to`.
    ///
    /// Moves the most recently acquired unit in the caller's holdings.
    /// `front_text` and `back_text` are opaque pass-through data stored
    /// on the unit for external rendering; they have no ledger effect.
    ///
    /// The unit's issuer tag is unchanged. The issuer's outstanding
    /// counter drops by one only when the caller is the issuer handing
    /// the unit out first-hand; second-hand transfers never touch it.
    ///
    /// # Returns
    /// `true` if the transfer succeeded
    ///
    /// # Panics
    /// - If the caller holds no tokens
    /// - If `to` is the caller
    pub fn transfer(
        env: Env,
        caller: Address,
        to: Address,
        front_text: String,
        back_text: String,
    ) -> bool {
        caller.require_auth();

        if to == caller {
            panic_with_error!(&env, CardError::InvalidRecipient);
        }

        let mut from_owned = Self::owned_tokens(&env, &caller);
        let token_id = from_owned
            .pop_back()
            .unwrap_or_else(|| panic_with_error!(&env, CardError::InsufficientBalance));

        let mut token: CardToken = env
            .storage()
            .persistent()
            .get(&CardKey::Token(token_id))
            .unwrap_or_else(|| panic_with_error!(&env, CardError::TokenNotFound));

        token.owner = to.clone();
        token.front_text = front_text;
        token.back_text = back_text;

        env.storage()
            .persistent()
            .set(&CardKey::Token(token_id), &token);
        env.storage().persistent().extend_ttl(
            &CardKey::Token(token_id),
            CARD_TTL_THRESHOLD,
            CARD_TTL_EXTEND,
        );

        Self::write_owned(&env, &caller, &from_owned);

        let mut to_owned = Self::owned_tokens(&env, &to);
        to_owned.push_back(token_id);
        Self::write_owned(&env, &to, &to_owned);

        if token.issuer == caller {
            Self::decrement_issued(&env, &caller);
        }

        emit_card_transferred(&env, &caller, &to, token_id);

        true
    }

    /// Burn one card token held by the caller.
    ///
    /// Removes the most recently acquired unit from circulation and
    /// decrements the outstanding counter of that unit's issuer.
    ///
    /// # Returns
    /// The id of the burned token.
    ///
    /// # Panics
    /// - If the caller holds no tokens
    pub fn burn(env: Env, caller: Address) -> u64 {
        caller.require_auth();

        let mut owned = Self::owned_tokens(&env, &caller);
        let token_id = owned
            .pop_back()
            .unwrap_or_else(|| panic_with_error!(&env, CardError::InsufficientBalance));

        let token: CardToken = env
            .storage()
            .persistent()
            .get(&CardKey::Token(token_id))
            .unwrap_or_else(|| panic_with_error!(&env, CardError::TokenNotFound));

        env.storage().persistent().remove(&CardKey::Token(token_id));
        Self::write_owned(&env, &caller, &owned);
        Self::decrement_issued(&env, &token.issuer);

        let supply: u64 = env
            .storage()
            .instance()
            .get(&CardKey::TotalSupply)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&CardKey::TotalSupply, &(supply - 1));

        emit_card_burned(&env, &caller, &token.issuer, token_id);

        token_id
    }

    // ========== Ledger Queries ==========

    /// Number of tokens currently held by an address.
    pub fn balance(env: Env, address: Address) -> u32 {
        Self::owned_tokens(&env, &address).len()
    }

    /// Outstanding tokens attributable to an issuer.
    ///
    /// This is not a live holder count: it rises at mint and falls only
    /// on the issuer's own first-hand transfers and on burns.
    pub fn issued_by(env: Env, address: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&CardKey::Issued(address))
            .unwrap_or(0)
    }

    /// Total tokens currently in circulation.
    pub fn total_supply(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&CardKey::TotalSupply)
            .unwrap_or(0)
    }

    /// Get a token unit record by id.
    pub fn token(env: Env, token_id: u64) -> Option<CardToken> {
        env.storage().persistent().get(&CardKey::Token(token_id))
    }

    /// Ids of the tokens currently held by an address.
    pub fn tokens_of(env: Env, address: Address) -> Vec<u64> {
        Self::owned_tokens(&env, &address)
    }

    // ========== Internal Helpers ==========

    fn owned_tokens(env: &Env, address: &Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&CardKey::Owned(address.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }

    fn write_owned(env: &Env, address: &Address, owned: &Vec<u64>) {
        env.storage()
            .persistent()
            .set(&CardKey::Owned(address.clone()), owned);
        env.storage().persistent().extend_ttl(
            &CardKey::Owned(address.clone()),
            CARD_TTL_THRESHOLD,
            CARD_TTL_EXTEND,
        );
    }

    fn decrement_issued(env: &Env, issuer: &Address) {
        let issued: u32 = env
            .storage()
            .persistent()
            .get(&CardKey::Issued(issuer.clone()))
            .unwrap_or(0);
        env.storage()
            .persistent()
            .set(&CardKey::Issued(issuer.clone()), &issued.saturating_sub(1));
    }
}
