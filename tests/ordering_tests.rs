use scope_timeline::item::ScopeItem;
use scope_timeline::ordering::{apply_move_with, apply_progress_with, move_item};

fn items(ids: &[&str]) -> Vec<ScopeItem> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| {
            let mut item = ScopeItem::new(*id, *id);
            item.order_index = index as u32;
            item
        })
        .collect()
}

fn ids(list: &[ScopeItem]) -> Vec<String> {
    list.iter().map(|item| item.id.clone()).collect()
}

#[test]
fn move_forward_and_backward() {
    let original = items(&["a", "b", "c", "d"]);
    let forward = move_item(&original, 0, 2);
    assert_eq!(ids(&forward), ["b", "c", "a", "d"]);
    let backward = move_item(&original, 3, 1);
    assert_eq!(ids(&backward), ["a", "d", "b", "c"]);
}

#[test]
fn order_indexes_are_reassigned_contiguously() {
    let moved = move_item(&items(&["a", "b", "c", "d"]), 0, 3);
    let indexes: Vec<u32> = moved.iter().map(|item| item.order_index).collect();
    assert_eq!(indexes, [0, 1, 2, 3]);
    assert_eq!(ids(&moved), ["b", "c", "d", "a"]);
}

#[test]
fn equal_or_out_of_range_indices_are_a_no_op() {
    let original = items(&["a", "b", "c"]);
    assert_eq!(move_item(&original, 1, 1), original);
    assert_eq!(move_item(&original, 3, 0), original);
    assert_eq!(move_item(&original, 0, 3), original);
    assert_eq!(move_item(&[], 0, 0), Vec::<ScopeItem>::new());
}

#[test]
fn move_composed_with_its_inverse_restores_order() {
    let original = items(&["a", "b", "c", "d", "e"]);
    for from in 0..original.len() {
        for to in 0..original.len() {
            let there = move_item(&original, from, to);
            let back = move_item(&there, to, from);
            assert_eq!(ids(&back), ids(&original), "from={from} to={to}");
        }
    }
}

#[test]
fn apply_move_commits_the_new_order() {
    let mut list = items(&["a", "b", "c"]);
    let mut committed: Vec<String> = Vec::new();
    let moved = apply_move_with(&mut list, 0, 2, |reordered| {
        committed = reordered.iter().map(|item| item.id.clone()).collect();
        Ok::<(), String>(())
    })
    .unwrap();
    assert!(moved);
    assert_eq!(ids(&list), ["b", "c", "a"]);
    assert_eq!(committed, ["b", "c", "a"]);
}

#[test]
fn apply_move_reverts_when_the_commit_fails() {
    let mut list = items(&["a", "b", "c"]);
    let result = apply_move_with(&mut list, 0, 2, |_| Err("network down".to_string()));
    assert_eq!(result, Err("network down".to_string()));
    // Prior visible order restored, indexes included.
    assert_eq!(ids(&list), ["a", "b", "c"]);
    let indexes: Vec<u32> = list.iter().map(|item| item.order_index).collect();
    assert_eq!(indexes, [0, 1, 2]);
}

#[test]
fn no_op_move_never_invokes_the_hook() {
    let mut list = items(&["a", "b"]);
    let mut calls = 0;
    let moved = apply_move_with(&mut list, 1, 1, |_| {
        calls += 1;
        Ok::<(), String>(())
    })
    .unwrap();
    assert!(!moved);
    assert_eq!(calls, 0);

    let moved = apply_move_with(&mut list, 0, 5, |_| {
        calls += 1;
        Ok::<(), String>(())
    })
    .unwrap();
    assert!(!moved);
    assert_eq!(calls, 0);
}

#[test]
fn progress_edit_clamps_and_commits() {
    let mut list = items(&["a", "b"]);
    let edited = apply_progress_with(&mut list, "b", 130, |item| {
        assert_eq!(item.percent_complete, 100);
        Ok::<(), String>(())
    })
    .unwrap();
    assert!(edited);
    assert_eq!(list[1].percent_complete, 100);
}

#[test]
fn progress_edit_restores_prior_value_on_failure() {
    let mut list = items(&["a", "b"]);
    list[0].percent_complete = 40;
    let result = apply_progress_with(&mut list, "a", 75, |_| Err("timeout".to_string()));
    assert_eq!(result, Err("timeout".to_string()));
    assert_eq!(list[0].percent_complete, 40);
}

#[test]
fn progress_edit_on_unknown_id_does_nothing() {
    let mut list = items(&["a"]);
    let mut calls = 0;
    let edited = apply_progress_with(&mut list, "zz", 50, |_| {
        calls += 1;
        Ok::<(), String>(())
    })
    .unwrap();
    assert!(!edited);
    assert_eq!(calls, 0);
    assert_eq!(list[0].percent_complete, 0);
}
