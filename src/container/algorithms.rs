use super::*;

/// Tests if two containers hold equal items in the same order.
///
/// The containers may be of different types as long as they hold the same
/// item type.
pub fn all_items_match<C1, C2>(some_container: &C1, another_container: &C2) -> bool
where C1: Container,
      C2: Container<Item = C1::Item>,
      C1::Item: PartialEq {
  if some_container.count() != another_container.count() {
    return false;
  }

  (0..some_container.count()).all(|i| {
    match (some_container.at(i), another_container.at(i)) {
      (Ok(a), Ok(b)) => a == b,
      _ => false,
    }
  })
}

/// Returns the position of the first item equal to `value`, if any.
pub fn find_index<C>(container: &C, value: &C::Item) -> Option<usize>
where C: Container,
      C::Item: PartialEq {
  (0..container.count()).find(|&i| {
    container.at(i).map(|item| item == value).unwrap_or(false)
  })
}
