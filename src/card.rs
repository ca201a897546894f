//! Business card info and token unit types.

use soroban_sdk::{contracttype, Address, Env, String};

/// Registered business-card information for an address.
///
/// All four fields are free-form text. Empty strings are legal and no
/// format validation is applied; a later registration overwrites the
/// record in place.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardInfo {
    /// Holder's name.
    pub name: String,

    /// Personality code (e.g. an MBTI string). Free-form.
    pub personality: String,

    /// Phone number. Free-form.
    pub phone: String,

    /// Company or organization name.
    pub company: String,
}

impl CardInfo {
    /// Create a card record from the four text fields.
    pub fn new(name: String, personality: String, phone: String, company: String) -> Self {
        Self {
            name,
            personality,
            phone,
            company,
        }
    }

    /// The record returned for an address that never registered.
    pub fn empty(env: &Env) -> Self {
        Self {
            name: String::from_str(env, ""),
            personality: String::from_str(env, ""),
            phone: String::from_str(env, ""),
            company: String::from_str(env, ""),
        }
    }
}

/// A single card token unit.
///
/// `issuer` is fixed at mint time and never changes; `owner` changes on
/// transfer. The text fields are opaque pass-through data for external
/// rendering and have no effect on the ledger.
#[contracttype]
#[derive(Clone, Debug)]
pub struct CardToken {
    /// Address that minted this unit. Immutable for the unit's lifetime.
    pub issuer: Address,

    /// Current holder.
    pub owner: Address,

    /// Opaque metadata supplied at mint (intended as a token URI).
    pub uri: String,

    /// Opaque text attached by the most recent transfer.
    pub front_text: String,

    /// Opaque text attached by the most recent transfer.
    pub back_text: String,
}

impl CardToken {
    /// Create a freshly minted unit, issued to and held by `issuer`.
    pub fn new(env: &Env, issuer: Address, uri: String) -> Self {
        Self {
            owner: issuer.clone(),
            issuer,
            uri,
            front_text: String::from_str(env, ""),
            back_text: String::from_str(env, ""),
        }
    }
}
