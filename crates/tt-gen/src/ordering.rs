//! `SubjectOrder` — how subjects are ordered for each variant.
//!
//! The assembler calls [`SubjectOrder::arrange`] once per variant with a
//! fresh copy of the subject list.  The default, [`RandomOrder`], draws an
//! independent uniform shuffle per variant; [`CatalogOrder`] leaves the list
//! untouched, which makes placements fully predictable.

use tt_core::ShuffleRng;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Hook deciding the order in which a variant's subjects are placed.
///
/// # Contract
///
/// - Must leave `items` a permutation of its input.
/// - Must be deterministic given the same internal state.
/// - Must not block or perform I/O.
pub trait SubjectOrder {
    /// Reorder `items` for variant number `variant` (1-based).
    fn arrange<T>(&mut self, variant: usize, items: &mut [T]);
}

// ── Random ────────────────────────────────────────────────────────────────────

/// Uniform random permutation per variant, each from its own child stream.
pub struct RandomOrder {
    root: ShuffleRng,
}

impl RandomOrder {
    /// Reproducible orderings from a fixed root seed.
    pub fn seeded(seed: u64) -> Self {
        Self { root: ShuffleRng::new(seed) }
    }

    /// Fresh orderings on every run.
    pub fn from_entropy() -> Self {
        Self { root: ShuffleRng::from_entropy() }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self { root: ShuffleRng::from_optional_seed(seed) }
    }
}

impl SubjectOrder for RandomOrder {
    fn arrange<T>(&mut self, variant: usize, items: &mut [T]) {
        let mut rng = self.root.child(variant as u64);
        rng.shuffle(items);
    }
}

// ── Catalog order ─────────────────────────────────────────────────────────────

/// Keeps subjects in catalog order for every variant.
pub struct CatalogOrder;

impl SubjectOrder for CatalogOrder {
    #[inline]
    fn arrange<T>(&mut self, _variant: usize, _items: &mut [T]) {}
}
