use anyhow::Result;
use toolz::*;


fn double<T: Numeric>(x: T) -> T {
    x + x
}

fn abs_diff<T: OrderedNumeric>(a: T, b: T) -> T {
    if a > b { a - b } else { b - a }
}

fn negate<T: Signed>(x: T) -> T {
    -x
}

fn halve<T: Float>(x: T) -> T {
    x / (T::one() + T::one())
}

fn widest<T: Integer>(xs: &[T]) -> Option<T> {
    xs.iter().copied().max()
}

fn is_unsigned<T: Unsigned>(_: T) -> bool {
    true
}

fn largest<T: Ordered + Clone>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

#[test]
fn numeric_families_accept_their_members() {
    assert_eq!(double(21i8), 42);
    assert_eq!(double(21u64), 42);
    assert_eq!(double(usize::MAX / 2), usize::MAX - 1);
    assert_approx_eq!(double(1.25f32), 2.5f32, 1e-6);
    assert_eq!(abs_diff(3u8, 10u8), 7);
    assert_eq!(abs_diff(-3i64, 10i64), 13);
    assert_eq!(negate(5isize), -5);
    assert_eq!(negate(-7i32), 7);
    assert_approx_eq!(halve(3.0f64), 1.5);
    assert_eq!(widest(&[3u16, 9, 4]), Some(9));
    assert!(is_unsigned(0u128));
}

#[test]
fn ordered_covers_numbers_chars_and_strings() -> Result<()> {
    assert_eq!(largest(3, 7), 7);
    assert_eq!(largest('a', 'Z'), 'a');
    assert_eq!(largest("pear", "apple"), "pear");
    assert_eq!(largest(String::from("b"), String::from("a")), "b");
    assert_eq!(
        largest(ordered_float::NotNan::new(1.0f64)?, ordered_float::NotNan::new(2.0f64)?),
        ordered_float::NotNan::new(2.0f64)?
    );
    Ok(())
}

#[cfg(feature = "complex")]
#[test]
fn complex_exposes_parts() {
    use num_complex::Complex64;

    fn parts<C: Complex>(c: C) -> (C::Real, C::Real) {
        (c.real(), c.imag())
    }

    let c = double(Complex64::new(1.5, -2.0));
    assert_eq!(parts(c), (3.0, -4.0));
}

#[test]
fn pair_conversions() {
    let p: Pair<i32, &str> = (7, "seven").into();
    assert_eq!(p, Pair::new(7, "seven"));
    assert_eq!(p.as_refs(), (&7, &"seven"));
    assert_eq!(p.swap(), Pair::new("seven", 7));
    let t: (i32, &str) = p.into();
    assert_eq!(t, (7, "seven"));
    assert_eq!(Pair::<u8, bool>::default(), Pair::new(0, false));
}

#[test]
fn pairs_order_by_first_then_second() {
    let mut ps = vec![Pair::new(2, 'a'), Pair::new(1, 'z'), Pair::new(1, 'b')];
    ps.sort();
    assert_eq!(ps, vec![Pair::new(1, 'b'), Pair::new(1, 'z'), Pair::new(2, 'a')]);
}

#[test]
fn pair_serializes_with_named_fields() -> Result<()> {
    let p = Pair::new(1u32, "one".to_string());
    let json = serde_json::to_string(&p)?;
    assert_eq!(json, r#"{"first":1,"second":"one"}"#);
    let back: Pair<u32, String> = serde_json::from_str(&json)?;
    assert_eq!(back, p);
    Ok(())
}

fn apply<F: UnaryFunc<i32, String>>(f: F, x: i32) -> String {
    f(&x)
}

fn combine<F: BinaryFunc<i32, i32, i32>>(f: F) -> i32 {
    f(&6, &7)
}

fn drive<F: BinaryProc<&'static str, i32>>(mut f: F) {
    f(&"a", &1);
    f(&"b", &2);
}

#[test]
fn function_shapes_accept_closures_and_fn_items() {
    fn shout(x: &i32) -> String {
        format!("{x}!")
    }
    assert_eq!(apply(shout, 3), "3!");
    assert_eq!(apply(|x: &i32| x.to_string(), 4), "4");
    assert_eq!(combine(|a: &i32, b: &i32| a * b), 42);

    let mut log = Vec::new();
    drive(|k: &&str, v: &i32| log.push(format!("{k}{v}")));
    assert_eq!(log, vec!["a1", "b2"]);
}
