//! Turn and rules engine for an authoritative Uno session.
//!
//! A host seats players on a [`uno::Uno`], calls [`uno::Uno::start`] and then
//! forwards each player's intent to [`uno::Uno::play_card`],
//! [`uno::Uno::choose_color`] or [`uno::Uno::draw_card`]. Sessions are plain
//! owned values; [`session::SessionRegistry`] keeps several of them behind
//! per-session locks.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod hand;
pub mod pile;
pub mod player;
pub mod session;
pub mod status;
pub mod turn;
pub mod uno;
