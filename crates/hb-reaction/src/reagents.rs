//! Reagent amounts and molar fractions.

use crate::error::{ReactionError, ReactionResult, checked_div};
use crate::species::Species;

/// Molar amounts keyed by species identifier (`"H_2"`, `"N_2"`, `"NH_3"`, ...).
///
/// Amounts are stored as given, not normalized. Keys keep their insertion
/// order so the total is always summed in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reagents {
    items: Vec<(String, f64)>,
}

impl Reagents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amounts for the three reacting species.
    pub fn from_species(h2: f64, n2: f64, nh3: f64) -> Self {
        [(Species::H2, h2), (Species::N2, n2), (Species::NH3, nh3)]
            .into_iter()
            .map(|(s, amount)| (s.key(), amount))
            .collect()
    }

    /// Set the amount for `key`, replacing any previous amount.
    pub fn insert(&mut self, key: impl Into<String>, amount: f64) {
        let key = key.into();
        match self.items.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = amount,
            None => self.items.push((key, amount)),
        }
    }

    /// Amount stored for `key`, if present.
    pub fn amount(&self, key: &str) -> Option<f64> {
        self.items.iter().find(|(k, _)| k == key).map(|(_, a)| *a)
    }

    /// Sum of all amounts, in insertion order.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|(_, a)| *a).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(k, a)| (k.as_str(), *a))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Reagents {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut reagents = Reagents::new();
        for (key, amount) in iter {
            reagents.insert(key, amount);
        }
        reagents
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Reagents {
    fn from(items: [(K, f64); N]) -> Self {
        items.into_iter().collect()
    }
}

/// Molar fraction of species `key`: its amount over the total amount.
///
/// Fails with `UnknownSpecies` when `key` is absent (checked first) and with
/// `DivisionByZero` when the amounts sum to zero.
pub fn molar_fraction(key: &str, reagents: &Reagents) -> ReactionResult<f64> {
    let amount = reagents
        .amount(key)
        .ok_or_else(|| ReactionError::UnknownSpecies {
            key: key.to_string(),
        })?;
    checked_div(amount, reagents.total(), "total reagent amount")
}
