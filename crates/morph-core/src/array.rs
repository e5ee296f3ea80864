//! Slice transformation helpers.
//!
//! Every function is a pure transformation of its input: slices are borrowed,
//! new vectors are returned, and nothing is mutated in place. Where the
//! dynamic original keyed into objects by property name, these take closures,
//! so shape violations are unrepresentable and the functions need no error
//! channel.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns a new vector with duplicate elements removed, keeping the first
/// occurrence of each value in input order.
///
/// # Examples
///
/// ```rust
/// use morph_core::array::to_unique;
///
/// assert_eq!(to_unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn to_unique<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Returns a new vector where each element is the result of applying
/// `operation` to the element and a fixed `value`.
///
/// # Examples
///
/// ```rust
/// use morph_core::array::reproduce_to;
///
/// let doubled = reproduce_to(&[1, 2, 3], &2, |item, factor| item * factor);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn reproduce_to<T, V, F>(items: &[T], value: &V, operation: F) -> Vec<T>
where
    F: Fn(&T, &V) -> T,
{
    items.iter().map(|item| operation(item, value)).collect()
}

/// Returns the elements that pass the predicate.
pub fn filter_by<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Applies a callback to each element and collects the results.
pub fn map_by<T, U, F>(items: &[T], callback: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(callback).collect()
}

/// Groups elements by the key the accessor returns for each of them.
///
/// # Examples
///
/// ```rust
/// use morph_core::array::group_by;
///
/// let grouped = group_by(&["ant", "bee", "ape"], |word| word.as_bytes()[0]);
/// assert_eq!(grouped[&b'a'], vec!["ant", "ape"]);
/// assert_eq!(grouped[&b'b'], vec!["bee"]);
/// ```
pub fn group_by<T, K, F>(items: &[T], key: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Splits elements into those that pass the predicate and those that fail it.
///
/// # Examples
///
/// ```rust
/// use morph_core::array::partition_by;
///
/// let (even, odd) = partition_by(&[1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// assert_eq!(odd, vec![1, 3]);
/// ```
pub fn partition_by<T, P>(items: &[T], predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let mut pass = Vec::new();
    let mut fail = Vec::new();
    for item in items {
        if predicate(item) {
            pass.push(item.clone());
        } else {
            fail.push(item.clone());
        }
    }
    (pass, fail)
}

/// Retrieves one projected value from each element.
///
/// Equivalent to [`map_by`] but named for its intended use: extracting a
/// single field from a slice of records.
///
/// # Examples
///
/// ```rust
/// use morph_core::array::pluck;
///
/// struct User { name: &'static str }
/// let users = [User { name: "ada" }, User { name: "grace" }];
/// assert_eq!(pluck(&users, |user| user.name), vec!["ada", "grace"]);
/// ```
pub fn pluck<T, U, F>(items: &[T], accessor: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(accessor).collect()
}

/// Returns the present values of a slice of options.
///
/// # Examples
///
/// ```rust
/// use morph_core::array::compact;
///
/// assert_eq!(compact(&[Some(1), None, Some(3)]), vec![1, 3]);
/// ```
pub fn compact<T: Clone>(items: &[Option<T>]) -> Vec<T> {
    items.iter().filter_map(Clone::clone).collect()
}

/// Returns the elements for which `keep` holds; the closure form of
/// [`compact`] for slices of plain values.
pub fn compact_by<T, P>(items: &[T], keep: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| keep(item)).cloned().collect()
}

/// Sums a slice of numbers. An empty slice sums to zero.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Sums one projected number per element.
///
/// # Examples
///
/// ```rust
/// use morph_core::array::sum_by;
///
/// struct Item { price: f64 }
/// let cart = [Item { price: 1.5 }, Item { price: 2.5 }];
/// assert_eq!(sum_by(&cart, |item| item.price), 4.0);
/// ```
pub fn sum_by<T, F>(items: &[T], value: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().map(value).sum()
}
