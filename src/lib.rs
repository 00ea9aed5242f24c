//! Cryptograms
//!
//! Letter-substitution puzzles: a quote is enciphered so that every letter
//! stands for a different one, and the player works out the substitution.
//!
//! # Quick Start
//!
//! ```rust
//! use cryptograms::commands::{Controller, Reply};
//! use cryptograms::puzzle::CryptogramModel;
//!
//! let mut game = Controller::new(CryptogramModel::from_answer("Talk is cheap"));
//! assert!(!game.is_game_over());
//!
//! // Ask for a hint, then apply it as a guess
//! let hint = game.model().next_hint().unwrap();
//! let reply = game.handle_line(&format!("{} = {}", hint.cipher, hint.plain));
//! assert_eq!(reply, Reply::Silent);
//! assert!(game.model().decrypted_text().starts_with('T'));
//! ```

// Core data structures
pub mod core;

// Puzzle generation and state
pub mod puzzle;

// Quote sources
pub mod quotes;

// Command protocol, controller and text mode
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
