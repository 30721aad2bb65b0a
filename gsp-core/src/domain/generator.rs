//! Candidate generation: level-1 seeds and the GSP join

use super::dataset::Dataset;
use super::types::{Candidate, Item};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// How survivors sharing a join key are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinStrategy {
    /// Every survivor contributing to a key takes part in the join
    #[default]
    Grouped,
    /// One survivor per key; later survivors in sorted order overwrite
    /// earlier ones. Loses candidates whenever keys collide.
    LastWins,
}

/// Every distinct item in the dataset as a length-1 candidate
pub fn seed<T: Item>(dataset: &Dataset<T>) -> HashSet<Candidate<T>> {
    dataset
        .items()
        .collect::<HashSet<_>>()
        .into_iter()
        .map(|item| Candidate::single(item.clone()))
        .collect()
}

/// Join length-k survivors into length-(k+1) candidates.
///
/// For `k == 1` this is the full ordered cross product. For `k > 1` a
/// survivor whose tail equals another survivor's head yields
/// `first + shared middle + last`.
pub fn join<'a, T, I>(survivors: I, strategy: JoinStrategy) -> Result<HashSet<Candidate<T>>>
where
    T: Item + 'a,
    I: IntoIterator<Item = &'a Candidate<T>>,
{
    let mut survivors: Vec<&Candidate<T>> = survivors.into_iter().collect();
    let Some(k) = survivors.first().map(|candidate| candidate.len()) else {
        return Ok(HashSet::new());
    };

    if let Some(odd) = survivors.iter().find(|candidate| candidate.len() != k) {
        return Err(Error::invalid_argument(format!(
            "join input must have uniform length {k}, found length {}",
            odd.len()
        )));
    }
    if k == 0 {
        return Err(Error::invalid_argument("cannot join empty candidates"));
    }

    if k == 1 {
        return Ok(cross_product(&survivors));
    }

    // Sorting makes `LastWins` independent of the caller's iteration order.
    survivors.sort_unstable();
    survivors.dedup();

    let joined = match strategy {
        JoinStrategy::Grouped => join_grouped(&survivors),
        JoinStrategy::LastWins => join_last_wins(&survivors),
    };
    Ok(joined)
}

fn cross_product<T: Item>(survivors: &[&Candidate<T>]) -> HashSet<Candidate<T>> {
    let mut joined = HashSet::with_capacity(survivors.len() * survivors.len());
    for x in survivors {
        for y in survivors {
            joined.insert(Candidate::new(
                x.iter().chain(y.iter()).cloned(),
            ));
        }
    }
    joined
}

fn join_grouped<T: Item>(survivors: &[&Candidate<T>]) -> HashSet<Candidate<T>> {
    let mut firsts_by_suffix: HashMap<&[T], Vec<&T>> = HashMap::new();
    let mut lasts_by_prefix: HashMap<&[T], Vec<&T>> = HashMap::new();

    for candidate in survivors {
        if let Some((first, suffix)) = candidate.as_slice().split_first() {
            firsts_by_suffix.entry(suffix).or_default().push(first);
        }
        if let Some((last, prefix)) = candidate.as_slice().split_last() {
            lasts_by_prefix.entry(prefix).or_default().push(last);
        }
    }

    let mut joined = HashSet::new();
    for (middle, firsts) in &firsts_by_suffix {
        let Some(lasts) = lasts_by_prefix.get(middle) else {
            continue;
        };
        for first in firsts {
            for last in lasts {
                joined.insert(Candidate::joined(*first, middle, *last));
            }
        }
    }
    joined
}

fn join_last_wins<T: Item>(survivors: &[&Candidate<T>]) -> HashSet<Candidate<T>> {
    let mut first_by_suffix: HashMap<&[T], &T> = HashMap::new();
    let mut last_by_prefix: HashMap<&[T], &T> = HashMap::new();

    for candidate in survivors {
        if let Some((first, suffix)) = candidate.as_slice().split_first() {
            first_by_suffix.insert(suffix, first);
        }
        if let Some((last, prefix)) = candidate.as_slice().split_last() {
            last_by_prefix.insert(prefix, last);
        }
    }

    first_by_suffix
        .iter()
        .filter_map(|(middle, first)| {
            last_by_prefix
                .get(middle)
                .map(|last| Candidate::joined(*first, middle, *last))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Element;

    fn c(items: &[&'static str]) -> Candidate<&'static str> {
        Candidate::new(items.iter().copied())
    }

    #[test]
    fn test_seed_expands_item_sets_once() {
        let dataset = Dataset::new(vec![
            vec![Element::item("a"), Element::set(["b", "c"])],
            vec![Element::item("c"), Element::item("a")],
        ])
        .unwrap();

        let seeds = seed(&dataset);
        assert_eq!(seeds.len(), 3);
        for item in ["a", "b", "c"] {
            assert!(seeds.contains(&c(&[item])));
        }
    }

    #[test]
    fn test_join_level_one_is_full_cross_product() {
        let survivors = [c(&["a"]), c(&["b"])];
        let joined = join(&survivors, JoinStrategy::Grouped).unwrap();

        assert_eq!(joined.len(), 4);
        for pair in [["a", "a"], ["a", "b"], ["b", "a"], ["b", "b"]] {
            assert!(joined.contains(&c(&pair)));
        }
    }

    #[test]
    fn test_join_overlap() {
        let survivors = [c(&["a", "b", "c"]), c(&["b", "c", "e"])];
        let joined = join(&survivors, JoinStrategy::Grouped).unwrap();

        assert_eq!(joined.len(), 1);
        assert!(joined.contains(&c(&["a", "b", "c", "e"])));
    }

    #[test]
    fn test_join_self_overlap() {
        let survivors = [c(&["a", "a"])];
        let joined = join(&survivors, JoinStrategy::Grouped).unwrap();
        assert_eq!(joined, HashSet::from([c(&["a", "a", "a"])]));
    }

    #[test]
    fn test_join_no_overlap() {
        let survivors = [c(&["a", "b"]), c(&["c", "d"])];
        assert!(join(&survivors, JoinStrategy::Grouped).unwrap().is_empty());
    }

    #[test]
    fn test_grouped_keeps_colliding_pairs() {
        // (x, b) and (y, b) share the suffix (b); (b, p) and (b, q) share the
        // prefix (b).
        let survivors = [c(&["x", "b"]), c(&["y", "b"]), c(&["b", "p"]), c(&["b", "q"])];

        let grouped = join(&survivors, JoinStrategy::Grouped).unwrap();
        assert_eq!(grouped.len(), 4);
        for expected in [["x", "b", "p"], ["x", "b", "q"], ["y", "b", "p"], ["y", "b", "q"]] {
            assert!(grouped.contains(&c(&expected)));
        }

        let last_wins = join(&survivors, JoinStrategy::LastWins).unwrap();
        assert_eq!(last_wins, HashSet::from([c(&["y", "b", "q"])]));
    }

    #[test]
    fn test_last_wins_is_order_independent() {
        let forward = [c(&["x", "b"]), c(&["y", "b"]), c(&["b", "p"])];
        let backward = [c(&["b", "p"]), c(&["y", "b"]), c(&["x", "b"])];
        assert_eq!(
            join(&forward, JoinStrategy::LastWins).unwrap(),
            join(&backward, JoinStrategy::LastWins).unwrap()
        );
    }

    #[test]
    fn test_join_rejects_mixed_lengths() {
        let survivors = [c(&["a"]), c(&["a", "b"])];
        let result = join(&survivors, JoinStrategy::Grouped);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_join_empty_input() {
        let survivors: Vec<Candidate<&str>> = Vec::new();
        assert!(join(&survivors, JoinStrategy::Grouped).unwrap().is_empty());
    }
}
