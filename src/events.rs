//! Event emission helpers for the business card contract.

use soroban_sdk::{Address, Env, Symbol};

/// Emit an event when card info is registered or overwritten.
pub fn emit_card_registered(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "card_registered"),);
    env.events().publish(topics, address.clone());
}

/// Emit an event when card tokens are minted.
pub fn emit_cards_minted(env: &Env, issuer: &Address, quantity: u32, payment: i128) {
    let topics = (Symbol::new(env, "cards_minted"),);
    env.events().publish(topics, (issuer.clone(), quantity, payment));
}

/// Emit an event when a card token changes hands.
pub fn emit_card_transferred(env: &Env, from: &Address, to: &Address, token_id: u64) {
    let topics = (Symbol::new(env, "card_transferred"),);
    env.events().publish(topics, (from.clone(), to.clone(), token_id));
}

/// Emit an event when a card token is burned.
pub fn emit_card_burned(env: &Env, owner: &Address, issuer: &Address, token_id: u64) {
    let topics = (Symbol::new(env, "card_burned"),);
    env.events().publish(topics, (owner.clone(), issuer.clone(), token_id));
}
