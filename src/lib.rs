//! Turing-Welchman Bombe emulation.
//!
//! Given an Enigma ciphertext and a crib (plaintext known to sit at the
//! start of it), the Bombe tries every rotor position for a given rotor
//! order and reports the positions, and the plugboard pairs, consistent
//! with the crib. A human (or a further tool) then takes the short list of
//! candidates to a real Enigma.
//!
//! # Architecture
//!
//! ```text
//! Menu            (letter graph of crib vs ciphertext; picks the piece with most loops)
//!     ↓ one scrambler per menu edge
//! Scrambler       (private fast rotor + crib offset)
//!     ↕ shares slow rotors, reflector and route caches
//! SharedScrambler
//!     ↓ wired into 26x26 wires with a diagonal board
//! Bombe           (energise, classify stops, checking machine, trial decryption)
//!     ↓ rotor sets swapped in
//! MultiBombe      (every rotor order x reflector)
//! ```
//!
//! # Examples
//!
//! Encrypt with an Enigma, then recover the start position with a Bombe:
//!
//! ```
//! use bombe::machine::catalog::{reflector_by_name, rotor_by_name};
//! use bombe::{Bombe, EnigmaMachine, Plugboard, Reflector};
//!
//! let spec = |n: &str| rotor_by_name(n).unwrap().spec;
//! let ukw = || Reflector::parse(reflector_by_name("B").unwrap().spec).unwrap();
//!
//! let mut enigma = EnigmaMachine::new(
//!     &[spec("I"), spec("II"), spec("III")],
//!     ukw(),
//!     "AAA",
//!     "BLA",
//!     Plugboard::parse("AR GK OX").unwrap(),
//! )
//! .unwrap();
//! let ciphertext = enigma.encrypt("WETTERVORHERSAGEFUERDIEBISKAYA").unwrap();
//!
//! // Fast rotor first.
//! let mut bombe = Bombe::new(
//!     &[spec("III"), spec("II"), spec("I")],
//!     ukw(),
//!     &ciphertext,
//!     "WETTERVORHERSAGEFUER",
//!     true,
//! )
//! .unwrap();
//! let stops = bombe.run();
//! assert!(stops.iter().any(|c| c.setting == "BLA"));
//! ```

#![deny(clippy::all)]

pub mod bombe;
pub mod config;
pub mod error;
pub mod machine;
pub mod menu;
pub mod multi;
mod scrambler;
mod shared_scrambler;
pub mod utils;

pub use bombe::{Bombe, Candidate, Progress, UNKNOWN_STECKERS};
pub use config::{BombeConfig, ConfigError};
pub use error::BombeError;
pub use machine::{EnigmaMachine, Plugboard, Reflector, Rotor, Wiring};
pub use menu::{Menu, MenuEdge, Subgraph};
pub use multi::{Component, MultiBombe, MultiCandidate};
