//! Sequential collection of outcomes.
//!
//! Collecting an iterator of outcomes stops at the first failure; later items
//! are never pulled. There is no error accumulation.

use super::outcome::Outcome;

/// Yields success values until the first failure, which is parked in `failure`.
struct Shunt<'a, I, E> {
    iter: I,
    failure: &'a mut Option<E>,
}

impl<I, T, E> Iterator for Shunt<'_, I, E>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }

        match self.iter.next()? {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                *self.failure = Some(error);
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failure.is_some() {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

/// Collects success values into `V`, or returns the first failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> = vec![
///     Outcome::success(1),
///     Outcome::failure("second"),
///     Outcome::failure("third"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(first_failure, Outcome::Failure("second"));
/// ```
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut failure = None;
        let collected: V = Shunt { iter: iter.into_iter(), failure: &mut failure }.collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}
