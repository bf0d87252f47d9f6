//! Search over rotor orders and reflectors.
//!
//! A single [`Bombe`] run assumes the rotor order is known. In practice it
//! was not, and many Bombes ran side by side, one per wheel order. This
//! module does the same sequentially: it keeps one Bombe (one menu) and
//! swaps rotor sets in with [`Bombe::change_rotors`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bombe::{Bombe, Candidate, Progress};
use crate::error::BombeError;
use crate::machine::catalog::CatalogEntry;
use crate::machine::{Reflector, Wiring};

/// Rotor slots that are filled from the main pool.
const STEPPING_SLOTS: usize = 3;

/// A named rotor or reflector wiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Name used when reporting results.
    pub name: String,
    /// Wiring spec, as accepted by [`Wiring::parse`] or [`Reflector::parse`].
    pub spec: String,
}

impl Component {
    /// Creates a component from a reporting name and a wiring spec.
    ///
    /// ```
    /// let rotor = bombe::Component::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ<Q");
    /// assert_eq!(rotor.name, "I");
    /// ```
    pub fn new(name: impl Into<String>, spec: impl Into<String>) -> Self {
        Component {
            name: name.into(),
            spec: spec.into(),
        }
    }
}

impl From<&CatalogEntry> for Component {
    fn from(entry: &CatalogEntry) -> Self {
        Component::new(entry.name, entry.spec)
    }
}

/// A stop together with the rotor order and reflector that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiCandidate {
    /// Rotor names, left to right as an operator would load them.
    pub rotors: Vec<String>,
    /// Reflector name.
    pub reflector: String,
    #[serde(flatten)]
    pub candidate: Candidate,
}

/// One wheel order: indices into the pools, left to right.
#[derive(Debug, Clone, Copy)]
struct Order {
    fourth: Option<usize>,
    stepping: [usize; STEPPING_SLOTS],
}

/// Runs a Bombe for every rotor order and reflector drawn from the pools.
pub struct MultiBombe {
    bombe: Bombe,
    rotors: Vec<Component>,
    fourth: Vec<Component>,
    reflectors: Vec<(Component, Reflector)>,
    orders: Vec<Order>,
}

impl MultiBombe {
    /// Sets up the search.
    ///
    /// # Parameters
    /// - `rotors`: pool for the three stepping slots; each order uses three
    ///   distinct rotors.
    /// - `fourth`: pool for the non-stepping fourth slot, if any. An empty
    ///   slice means three-rotor machines.
    /// - `reflectors`: every reflector to try.
    /// - `ciphertext`, `crib`, `check`: as for [`Bombe::new`].
    ///
    /// # Errors
    /// [`BombeError::RotorPoolTooSmall`], [`BombeError::EmptyReflectorPool`],
    /// parse errors for any pool entry, and the crib errors of [`Bombe::new`].
    pub fn new(
        rotors: &[Component],
        fourth: &[Component],
        reflectors: &[Component],
        ciphertext: &str,
        crib: &str,
        check: bool,
    ) -> Result<Self, BombeError> {
        if rotors.len() < STEPPING_SLOTS {
            return Err(BombeError::RotorPoolTooSmall {
                needed: STEPPING_SLOTS,
                got: rotors.len(),
            });
        }
        if reflectors.is_empty() {
            return Err(BombeError::EmptyReflectorPool);
        }
        for component in rotors.iter().chain(fourth) {
            Wiring::parse(&component.spec)?;
        }
        let reflectors = reflectors
            .iter()
            .map(|c| Ok((c.clone(), Reflector::parse(&c.spec)?)))
            .collect::<Result<Vec<_>, BombeError>>()?;

        let orders = Self::enumerate(rotors.len(), fourth.len());
        let specs = Self::specs(rotors, fourth, orders[0]);
        let bombe = Bombe::new(&specs, reflectors[0].1.clone(), ciphertext, crib, check)?;
        Ok(MultiBombe {
            bombe,
            rotors: rotors.to_vec(),
            fourth: fourth.to_vec(),
            reflectors,
            orders,
        })
    }

    fn enumerate(pool: usize, fourth: usize) -> Vec<Order> {
        let fourths: Vec<Option<usize>> = if fourth == 0 {
            vec![None]
        } else {
            (0..fourth).map(Some).collect()
        };
        let mut orders = Vec::new();
        for &f in &fourths {
            for l in 0..pool {
                for m in (0..pool).filter(|&m| m != l) {
                    for r in (0..pool).filter(|&r| r != l && r != m) {
                        orders.push(Order {
                            fourth: f,
                            stepping: [l, m, r],
                        });
                    }
                }
            }
        }
        orders
    }

    /// Wiring specs for an order, fast to slow as the Bombe expects.
    fn specs<'a>(rotors: &'a [Component], fourth: &'a [Component], order: Order) -> Vec<&'a str> {
        let mut specs: Vec<&str> = order
            .stepping
            .iter()
            .rev()
            .map(|&i| rotors[i].spec.as_str())
            .collect();
        if let Some(f) = order.fourth {
            specs.push(fourth[f].spec.as_str());
        }
        specs
    }

    /// Rotor names for an order, left to right.
    fn names(&self, order: Order) -> Vec<String> {
        order
            .fourth
            .map(|f| self.fourth[f].name.clone())
            .into_iter()
            .chain(order.stepping.iter().map(|&i| self.rotors[i].name.clone()))
            .collect()
    }

    /// Rotor-order and reflector combinations the search will try.
    pub fn combination_count(&self) -> usize {
        self.orders.len() * self.reflectors.len()
    }

    /// Loops in the menu shared by every combination.
    pub fn loops(&self) -> usize {
        self.bombe.loops()
    }

    /// Runs every combination.
    ///
    /// # Errors
    /// Only wiring errors, which are already ruled out by [`MultiBombe::new`].
    pub fn run(&mut self) -> Result<Vec<MultiCandidate>, BombeError> {
        self.run_with_progress(|_| {})
    }

    /// Runs every combination, reporting progress after each one.
    ///
    /// `fraction` in the progress report counts completed combinations.
    pub fn run_with_progress<F>(&mut self, mut progress: F) -> Result<Vec<MultiCandidate>, BombeError>
    where
        F: FnMut(Progress),
    {
        let total = self.combination_count();
        info!(
            combinations = total,
            loops = self.bombe.loops(),
            "multi-order search started"
        );

        let mut result = Vec::new();
        let mut done = 0;
        for &order in &self.orders {
            let names = self.names(order);
            for (component, reflector) in &self.reflectors {
                let specs = Self::specs(&self.rotors, &self.fourth, order);
                self.bombe.change_rotors(&specs, reflector.clone())?;

                let stops = self.bombe.run();
                debug!(
                    rotors = %names.join("-"),
                    reflector = %component.name,
                    stops = stops.len(),
                    "rotor order finished"
                );
                result.extend(stops.into_iter().map(|candidate| MultiCandidate {
                    rotors: names.clone(),
                    reflector: component.name.clone(),
                    candidate,
                }));

                done += 1;
                progress(Progress {
                    loops: self.bombe.loops(),
                    stops: result.len(),
                    fraction: done as f64 / total as f64,
                });
            }
        }

        info!(stops = result.len(), "multi-order search finished");
        Ok(result)
    }
}
