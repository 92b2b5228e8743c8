// Skip List — ordered query tests: neighbors, extremes, error taxonomy.

use skipgrid::{Error, SkipList};

fn list_with(keys: &[u32]) -> SkipList<u32, u32> {
    let mut list = SkipList::new();
    for &k in keys {
        assert!(list.insert(k, k));
    }
    list
}

// =============================================================================
// Test 1: Neighbors of a middle key
// =============================================================================
#[test]
fn neighbors_of_middle_key() {
    let list = list_with(&[10, 20, 30]);
    assert_eq!(list.next_key(&20), Ok(&30));
    assert_eq!(list.previous_key(&20), Ok(&10));
}

// =============================================================================
// Test 2: Neighbors follow bottom-layer order, not insertion order
// =============================================================================
#[test]
fn neighbors_follow_sorted_order() {
    let list = list_with(&[30, 10, 20]);
    assert_eq!(list.next_key(&10), Ok(&20));
    assert_eq!(list.previous_key(&30), Ok(&20));
}

// =============================================================================
// Test 3: Extremal keys have no neighbor in that direction
// =============================================================================
#[test]
fn extremal_keys_raise_no_such_neighbor() {
    let list = list_with(&[10, 20, 30]);
    assert_eq!(list.next_key(&30), Err(Error::NoSuchNeighbor));
    assert_eq!(list.previous_key(&10), Err(Error::NoSuchNeighbor));
}

// =============================================================================
// Test 4: Neighbor queries on an absent key are NotFound
// =============================================================================
// Absence wins over direction: NotFound, never NoSuchNeighbor.
#[test]
fn neighbor_queries_on_absent_key_are_not_found() {
    let list = list_with(&[10, 20, 30]);
    assert_eq!(list.next_key(&15), Err(Error::NotFound));
    assert_eq!(list.previous_key(&15), Err(Error::NotFound));
    assert_eq!(list.next_key(&99), Err(Error::NotFound));
}

// =============================================================================
// Test 5: A single key is both the smallest and the largest
// =============================================================================
#[test]
fn single_key_is_both_extremes() {
    let list = list_with(&[5]);
    assert_eq!(list.is_smallest_key(&5), Ok(true));
    assert_eq!(list.is_largest_key(&5), Ok(true));
    assert_eq!(list.next_key(&5), Err(Error::NoSuchNeighbor));
    assert_eq!(list.previous_key(&5), Err(Error::NoSuchNeighbor));
}

// =============================================================================
// Test 6: Smallest/largest checks on present keys
// =============================================================================
#[test]
fn smallest_and_largest_checks() {
    let list = list_with(&[10, 20, 30]);
    assert_eq!(list.is_smallest_key(&10), Ok(true));
    assert_eq!(list.is_smallest_key(&20), Ok(false));
    assert_eq!(list.is_largest_key(&30), Ok(true));
    assert_eq!(list.is_largest_key(&10), Ok(false));
}

// =============================================================================
// Test 7: Smallest/largest checks on an absent key fail
// =============================================================================
// Documented-contract behavior: an absent key is an error, not a false.
#[test]
fn extreme_checks_on_absent_key_are_not_found() {
    let list = list_with(&[10, 20, 30]);
    assert_eq!(list.is_smallest_key(&5), Err(Error::NotFound));
    assert_eq!(list.is_largest_key(&99), Err(Error::NotFound));
}

// =============================================================================
// Test 8: contains_key
// =============================================================================
#[test]
fn contains_key_matches_membership() {
    let list = list_with(&[10, 20]);
    assert!(list.contains_key(&10));
    assert!(list.contains_key(&20));
    assert!(!list.contains_key(&15));
    assert!(!list.contains_key(&0));
}

// =============================================================================
// Test 9: Walking the whole list through next_key
// =============================================================================
#[test]
fn next_key_chain_visits_every_key_in_order() {
    let list = list_with(&[40, 10, 30, 20]);
    let mut walked = vec![10u32];
    let mut cur = 10u32;
    while let Ok(&next) = list.next_key(&cur) {
        walked.push(next);
        cur = next;
    }
    assert_eq!(walked, vec![10, 20, 30, 40]);
}
