//! A Set card game rule engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that tracks the deck, the table and the
//! current selection, decides whether a selected triple matches, and deals or
//! back-fills cards as play proceeds. Rendering and input are left to the
//! caller, which reads state back through the accessors.
//!
//! # Example
//!
//! ```
//! use setrs::{Game, GameOptions};
//!
//! let game = Game::classic(GameOptions::default(), 42).unwrap();
//! if let Some([a, b, c]) = game.hint() {
//!     game.choose(a);
//!     game.choose(b);
//!     game.choose(c);
//!     assert_eq!(game.matched().len(), 3);
//!     game.replace_matched(3);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod content;
pub mod error;
pub mod game;
pub mod options;
pub mod rule;
mod sync;

// Re-export main types
pub use card::{Card, CardId, SET_SIZE};
pub use content::{CardContent, Level, UNIVERSE_SIZE};
pub use error::NewGameError;
pub use game::{Choice, Game, Outcome, Phase, Resolution};
pub use options::{GameOptions, Resolve};
pub use rule::{MatchRule, SetRule, attribute_fits};
