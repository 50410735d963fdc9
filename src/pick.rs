//! Small list pickers used to fill the feed.
//!
//! Both helpers are total: asking for more elements than a list holds is not
//! an error, the result is just shorter.

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick up to `count` distinct elements of `items`, uniformly at random and
/// without replacement.
///
/// Returns `min(count, items.len())` elements. The order of the result carries
/// no meaning. `items` is left untouched.
pub fn random_sub_list<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    items.choose_multiple(rng, count).cloned().collect()
}

/// Return the first `count` elements of `items`, or all of them when the list
/// is shorter.
pub fn sub_list_non_strict<T>(items: &[T], count: usize) -> &[T] {
    &items[..count.min(items.len())]
}
