//! The rotor-cipher collaborator the Bombe is built around.
//!
//! The Bombe only needs three things from a rotor: map a letter forward,
//! map it backward, and step. [`Rotor`] provides exactly that on top of a
//! shared [`Wiring`] table. The rest of this module (plugboard, a complete
//! [`EnigmaMachine`] and the historical [`catalog`]) exists so results can
//! be produced and checked end to end.

pub mod catalog;
mod enigma;
mod pairs;
mod plugboard;
mod reflector;
mod rotor;

pub use enigma::EnigmaMachine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{Rotor, Wiring};
