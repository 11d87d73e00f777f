use std::collections::HashMap;
use toolz::testing::*;
use toolz::*;

#[test]
fn zip_truncates_to_shorter() {
    let z = zip(&[1, 2, 3, 4], &["a", "b"]);
    assert_eq!(z, vec![Pair::new(1, "a"), Pair::new(2, "b")]);

    let z = zip(&['x'], &[10, 20, 30]);
    assert_eq!(z, vec![Pair::new('x', 10)]);

    assert!(zip(&[] as &[i32], &[1, 2]).is_empty());
}

#[test]
fn unzip_splits_in_order() {
    let pairs = [Pair::new(1, 'a'), Pair::new(2, 'b'), Pair::new(3, 'c')];
    let (firsts, seconds) = unzip(&pairs);
    assert_eq!(firsts, vec![1, 2, 3]);
    assert_eq!(seconds, vec!['a', 'b', 'c']);

    let (a, b) = unzip::<i32, i32>(&[]);
    assert!(a.is_empty() && b.is_empty());
}

#[test]
fn join_nested_order_outer_then_inner() {
    let left = [1, 2, 3];
    let right = [3, 1, 1];
    let rows = join(&left, &right, |a: &i32, b: &i32| a == b);
    assert_eq!(
        rows,
        vec![Pair::new(1, 1), Pair::new(1, 1), Pair::new(3, 3)]
    );
}

#[test]
fn join_across_types() {
    #[derive(Clone, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
    }
    #[derive(Clone, Debug, PartialEq)]
    struct Order {
        user_id: u32,
        total: u32,
    }

    let users = vec![
        User { id: 1, name: "Alice".into() },
        User { id: 2, name: "Bob".into() },
        User { id: 3, name: "Carol".into() },
    ];
    let orders = vec![
        Order { user_id: 2, total: 20 },
        Order { user_id: 1, total: 10 },
        Order { user_id: 2, total: 25 },
        Order { user_id: 9, total: 99 },
    ];

    let joined = join(&users, &orders, |u: &User, o: &Order| u.id == o.user_id);
    let summary = map(&joined, |p: &Pair<User, Order>| (p.first.name.clone(), p.second.total));
    assert_collections_equal(
        &summary,
        &[
            ("Alice".to_string(), 10),
            ("Bob".to_string(), 20),
            ("Bob".to_string(), 25),
        ],
    );
}

#[test]
fn join_with_no_matches_or_empty_side() {
    let none = join(&[1, 2], &[3, 4], |a: &i32, b: &i32| a == b);
    assert!(none.is_empty());
    let empty = join(&[] as &[i32], &[3, 4], |_: &i32, _: &i32| true);
    assert!(empty.is_empty());
}

#[test]
fn join_with_always_true_is_cartesian_product() {
    let rows = join(&['a', 'b'], &[1, 2, 3], |_: &char, _: &i32| true);
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], Pair::new('a', 1));
    assert_eq!(rows[3], Pair::new('b', 1));
}

#[test]
fn from_pairs_later_overwrites_earlier() {
    let pairs = [Pair::new("k", 1), Pair::new("j", 2), Pair::new("k", 3)];
    let m = from_pairs(&pairs);
    let expected = HashMap::from([("k", 3), ("j", 2)]);
    assert_maps_equal(&m, &expected);
}
