use anyhow::Result;
use toolz::testing::*;
use toolz::*;


#[test]
fn map_int_to_string() {
    let s = [1, 2, 3, 4, 5];
    let exp = ["1", "2", "3", "4", "5"];
    let res = map(&s, |i: &i32| i.to_string());
    assert!(equal_func(&res, &exp, |x: &String, y: &&str| x == y));
}

#[test]
fn map_preserves_length_and_order() {
    let words = ["gamma", "alpha", "beta"];
    assert_eq!(map(&words, |w: &&str| w.len()), vec![5, 5, 4]);
    assert!(map(&[] as &[i32], |x: &i32| x * 2).is_empty());
}

#[test]
fn flat_map_concatenates_outputs() {
    let lines = ["hello world", "", "hello rust"];
    let words = flat_map(&lines, |l: &&str| {
        l.split_whitespace().map(String::from).collect::<Vec<_>>()
    });
    assert_collections_equal(&words, &["hello", "world", "hello", "rust"].map(String::from));
}

#[test]
fn filter_keeps_order() {
    let data = [5, 8, 1, 6, 3, 4];
    assert_eq!(filter(&data, |x: &i32| x % 2 == 0), vec![8, 6, 4]);
    assert_eq!(filter(&data, |x: &i32| *x > 100), Vec::<i32>::new());
    assert!(filter(&[] as &[i32], |_: &i32| true).is_empty());
}

#[test]
fn partition_splits_matching_and_rest() {
    let data = [5, 8, 1, 6, 3, 4];
    let (even, odd) = partition(&data, |x: &i32| x % 2 == 0);
    assert_eq!(even, vec![8, 6, 4]);
    assert_eq!(odd, vec![5, 1, 3]);

    let (yes, no) = partition(&[] as &[i32], |_: &i32| true);
    assert!(yes.is_empty() && no.is_empty());
}

#[test]
fn chunk_eight_by_three() -> Result<()> {
    let data = [1, 2, 3, 4, 5, 6, 7, 8];
    let res = chunk(&data, 3)?;
    assert_eq!(res.len(), 3);
    assert_eq!(res[0], &[1, 2, 3]);
    assert_eq!(res[1], &[4, 5, 6]);
    assert_eq!(res[2], &[7, 8]);
    Ok(())
}

#[test]
fn chunk_exact_multiple_has_full_last_chunk() -> Result<()> {
    let data = [1, 2, 3, 4, 5, 6];
    let res = chunk(&data, 2)?;
    assert_eq!(res.len(), 3);
    assert_all(&res, |c: &&[i32]| c.len() == 2);
    Ok(())
}

#[test]
fn chunk_larger_than_input_and_empty_input() -> Result<()> {
    let data = [1, 2];
    assert_eq!(chunk(&data, 10)?, vec![&[1, 2][..]]);
    assert!(chunk(&[] as &[i32], 3)?.is_empty());
    Ok(())
}

#[test]
fn chunk_borrows_from_input() -> Result<()> {
    let data = vec![10, 20, 30, 40, 50];
    let res = chunk(&data, 2)?;
    assert!(std::ptr::eq(res[1].as_ptr(), &data[2]));
    Ok(())
}

#[test]
fn chunk_size_zero_fails() {
    assert_toolz_err!(chunk(&[1, 2, 3], 0), ToolzError::InvalidChunkSize { size: 0 });
}

#[test]
fn concat_preserves_order() {
    let data = [vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]];
    let res = concat(&data);
    assert_eq!(res.len(), 8);
    assert_eq!(res, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn concat_accepts_slices_and_empties() {
    let a = [1, 2];
    let b: [i32; 0] = [];
    let c = [3];
    let parts: [&[i32]; 3] = [&a, &b, &c];
    assert_eq!(concat(&parts), vec![1, 2, 3]);
    assert!(concat::<i32, Vec<i32>>(&[]).is_empty());
}

#[test]
fn concat_undoes_chunk() -> Result<()> {
    let data: Vec<u32> = (0..23).collect();
    let chunks = chunk(&data, 5)?;
    assert_eq!(concat(&chunks), data);
    Ok(())
}

#[test]
fn reverse_in_place() {
    let mut odd = [1, 2, 3, 4, 5];
    reverse(&mut odd);
    assert_eq!(odd, [5, 4, 3, 2, 1]);

    let mut even = vec!["a", "b", "c", "d"];
    reverse(&mut even);
    assert_eq!(even, vec!["d", "c", "b", "a"]);

    let mut empty: [i32; 0] = [];
    reverse(&mut empty);
    assert_eq!(empty, [0i32; 0]);

    let mut single = [9];
    reverse(&mut single);
    assert_eq!(single, [9]);
}
