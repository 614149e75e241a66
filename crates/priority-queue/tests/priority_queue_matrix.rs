use priority_queue::PriorityQueue;
use proptest::prelude::*;

const VALUES: [i32; 7] = [-9, -2, 1, 5, 7, 9, 10];

fn non_empty_queue() -> PriorityQueue {
    VALUES.into_iter().collect()
}

#[test]
fn empty_queue_matrix() {
    let mut queue = PriorityQueue::new();
    assert!(queue.head().is_none());
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    for i in -1..=1 {
        assert!(queue.find(i).is_none());
        assert!(!queue.remove(i));
    }
}

#[test]
fn insert_into_empty_queue_matrix() {
    let mut queue = PriorityQueue::new();
    queue.insert(0);
    let head = queue.head().unwrap();
    assert_eq!(head.value(), 0);
    assert!(head.next().is_none());

    queue.insert(1);
    assert_eq!(queue.head().map(|e| e.value()), Some(1));
    queue.insert(-1);
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 0, -1]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn non_empty_queue_is_descending_matrix() {
    let queue = non_empty_queue();
    let values: Vec<i32> = queue.iter().collect();
    let mut expected = VALUES.to_vec();
    expected.reverse();
    assert_eq!(values, expected);
    assert_eq!(queue.head().map(|e| e.value()), Some(10));
}

#[test]
fn find_matrix() {
    let queue = non_empty_queue();
    for i in -100..=100 {
        match queue.find(i) {
            Some(e) => {
                assert!(VALUES.contains(&i));
                assert_eq!(e.value(), i);
            }
            None => assert!(!VALUES.contains(&i), "missing {i}"),
        }
    }
}

#[test]
fn remove_head_middle_tail_matrix() {
    let mut queue = non_empty_queue();

    assert!(queue.remove(10));
    assert_eq!(queue.head().map(|e| e.value()), Some(9));

    assert!(queue.remove(1));
    assert!(queue.find(1).is_none());

    assert!(queue.remove(-9));
    assert_eq!(queue.iter().last(), Some(-2));

    for missing in [-9, 1, 10, 0, i32::MAX, i32::MIN] {
        assert!(!queue.remove(missing));
    }
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![9, 7, 5, -2]);
    assert_eq!(queue.len(), 4);
}

#[test]
fn remove_duplicates_one_at_a_time() {
    let mut queue: PriorityQueue = [3, 3, 3].into_iter().collect();
    assert!(queue.remove(3));
    assert_eq!(queue.len(), 2);
    assert!(queue.remove(3));
    assert!(queue.remove(3));
    assert!(!queue.remove(3));
    assert!(queue.is_empty());
}

#[test]
fn remove_all_matrix() {
    let mut queue = non_empty_queue();
    for v in VALUES {
        assert!(queue.remove(v));
    }
    assert!(queue.head().is_none());
    assert_eq!(format!("{queue:?}"), "[]");
}

proptest! {
    #[test]
    fn stays_sorted_like_a_reversed_sort(values in proptest::collection::vec(-1000..1000i32, 0..200)) {
        let queue: PriorityQueue = values.iter().copied().collect();
        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(queue.iter().collect::<Vec<_>>(), expected);
        prop_assert_eq!(queue.len(), values.len());
    }

    #[test]
    fn remove_matches_vec_model(
        values in proptest::collection::vec(-50..50i32, 0..100),
        removals in proptest::collection::vec(-50..50i32, 0..100),
    ) {
        let mut queue: PriorityQueue = values.iter().copied().collect();
        let mut model = values.clone();
        for r in removals {
            let pos = model.iter().position(|&v| v == r);
            prop_assert_eq!(queue.remove(r), pos.is_some());
            if let Some(pos) = pos {
                model.remove(pos);
            }
        }
        model.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(queue.iter().collect::<Vec<_>>(), model);
    }
}
