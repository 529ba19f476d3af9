//! History stack unit tests.

use mapboard::History;

#[test]
fn test_undo_and_redo_at_bounds_are_noops() {
    let mut history = History::new(0);
    assert_eq!(*history.undo(), 0);
    assert_eq!(*history.redo(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_full_walk_back_and_forth() {
    let mut history = History::new(0);
    for n in 1..=4 {
        assert!(history.commit(n));
    }
    assert_eq!(history.cursor(), 4);

    let walked_back: Vec<i32> = (0..4).map(|_| *history.undo()).collect();
    assert_eq!(walked_back, vec![3, 2, 1, 0]);

    let walked_forward: Vec<i32> = (0..4).map(|_| *history.redo()).collect();
    assert_eq!(walked_forward, vec![1, 2, 3, 4]);
}

#[test]
fn test_branching_prunes_redo() {
    let mut history = History::new("a");
    history.commit("b");
    history.commit("c");
    history.undo();
    history.undo();

    history.commit("x");

    assert_eq!(history.len(), 2);
    assert_eq!(*history.current(), "x");
    assert!(!history.can_redo());
    assert_eq!(*history.undo(), "a");
}

#[test]
fn test_commit_equal_to_current_is_skipped() {
    let mut history = History::new(vec![1, 2]);
    assert!(!history.commit(vec![1, 2]));
    assert_eq!(history.len(), 1);

    // Equal to an older entry but not the current one is recorded
    history.commit(vec![3]);
    assert!(history.commit(vec![1, 2]));
    assert_eq!(history.len(), 3);
}

#[test]
fn test_limit_drops_oldest_entries() {
    let mut history = History::with_limit(0, 3);
    for n in 1..=10 {
        history.commit(n);
    }

    assert_eq!(history.len(), 3);
    assert_eq!(history.max_entries(), 3);
    assert_eq!(*history.current(), 10);
    history.undo();
    assert_eq!(*history.undo(), 8);
    assert!(!history.can_undo());
}

#[test]
fn test_reset_starts_over() {
    let mut history = History::new(1);
    history.commit(2);
    history.commit(3);

    history.reset(7);

    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert_eq!(*history.current(), 7);
    assert!(!history.is_empty());
}
