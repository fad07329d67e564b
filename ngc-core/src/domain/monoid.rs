//! Monoid trait used to merge accumulators
//!
//! Occurrence and summary tables gathered from separate inputs combine by
//! key-wise addition. That operation is associative and commutative with the
//! empty table as identity, so partial results can be merged in any grouping.

use smallvec::SmallVec;

/// An associative combine with an identity element
///
/// - Associativity: (a ⊕ b) ⊕ c = a ⊕ (b ⊕ c)
/// - Identity: a ⊕ identity = identity ⊕ a = a
pub trait Monoid: Clone + Send + Sync {
    /// Returns the identity element of the monoid
    fn identity() -> Self;

    /// Combines two elements of the monoid
    fn combine(&self, other: &Self) -> Self;
}

/// Extension trait for monoids that can be reduced from collections
pub trait MonoidReduce: Monoid {
    /// Reduces a collection of monoid elements to a single result
    ///
    /// Uses tree reduction to keep the combine depth logarithmic.
    fn reduce<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut items: SmallVec<[Self; 16]> = iter.into_iter().collect();

        while items.len() > 1 {
            let mut next_level = SmallVec::<[Self; 16]>::new();
            for pair in items.chunks(2) {
                match pair {
                    [left, right] => next_level.push(left.combine(right)),
                    [single] => next_level.push(single.clone()),
                    _ => {}
                }
            }

            items = next_level;
        }

        items.into_iter().next().unwrap_or_else(Self::identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Sum(u64);

    impl Monoid for Sum {
        fn identity() -> Self {
            Sum(0)
        }

        fn combine(&self, other: &Self) -> Self {
            Sum(self.0 + other.0)
        }
    }

    impl MonoidReduce for Sum {}

    #[test]
    fn test_identity_property() {
        let a = Sum(42);
        let id = Sum::identity();

        assert_eq!(a.combine(&id), a);
        assert_eq!(id.combine(&a), a);
    }

    #[test]
    fn test_associativity() {
        let (a, b, c) = (Sum(1), Sum(2), Sum(3));
        assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
    }

    #[test]
    fn test_reduce_empty() {
        let empty: Vec<Sum> = vec![];
        assert_eq!(Sum::reduce(empty), Sum::identity());
    }

    #[test]
    fn test_reduce_odd_count() {
        let values = vec![Sum(1), Sum(2), Sum(3), Sum(4), Sum(5)];
        assert_eq!(Sum::reduce(values), Sum(15));
    }
}
