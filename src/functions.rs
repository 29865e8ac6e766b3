//! Callables: named functions, closure values, defaults, and a stateful
//! counter.
//!
//! The counter is the interesting one: the returned closure owns its count
//! and is the only thing that can touch it, so every instance advances
//! independently of every other.

/// Plain function item form of addition.
pub fn add_two_numbers(a: i64, b: i64) -> i64 {
    a + b
}

/// Closure value form of addition, returned so callers can hold and pass
/// it around like any other value.
pub fn add() -> impl Fn(i64, i64) -> i64 {
    |a, b| a + b
}

/// Greeting with a default: `None` falls back to "Stranger".
pub fn greeting_for(name: Option<&str>) -> String {
    let name = name.unwrap_or("Stranger");
    format!("Hello, {name}!")
}

pub fn power(base: i64, exp: u32) -> i64 {
    base.pow(exp)
}

/// Bind the first word, collect the remainder in order.
///
/// Returns `None` when there is no first word to bind.
pub fn split_first<'a>(words: &[&'a str]) -> Option<(&'a str, Vec<&'a str>)> {
    match words {
        [first, rest @ ..] => Some((first, rest.to_vec())),
        [] => None,
    }
}

/// A counter closure. Each call increments the private count and returns
/// the new value, starting from 1.
pub fn make_counter() -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}
