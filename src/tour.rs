//! The tour itself: every demonstration, in order, as printable lines.
//!
//! Split the same way bareclad splits `execute` and `execute_collect`:
//! [`run_blocks`] returns the synchronous transcript as strings so tests
//! can assert on it, and [`run`] wraps it with the deferred resolution so
//! the resolved message lands strictly after every synchronous line.

use std::time::Duration;

use tracing::info;

use crate::collections::{self, Person};
use crate::deferred;
use crate::error::{Result, WhirlwindError};
use crate::functions;
use crate::sequences;
use crate::speech::{Dog, Speaks};
use crate::text;

/// The message the deferred value resolves with.
pub const RESOLVED_MESSAGE: &str = "Promise resolved!";

/// The line that closes the synchronous portion of the tour.
pub const CLOSING_LINE: &str =
    "Core and modern Rust idioms and collection, async, and copy semantics covered successfully!";

fn raise_demo_failure() -> Result<()> {
    Err(WhirlwindError::Demo("Something went wrong!".into()))
}

/// Produce every synchronous demonstration line, in order.
pub fn run_blocks() -> Vec<String> {
    let mut out = Vec::new();

    // Two forms of addition: a function item and a closure value.
    out.push(functions::add_two_numbers(3, 5).to_string());
    let add = functions::add();
    out.push(add(3, 5).to_string());

    // Iterate and increment; the source sequence is left untouched.
    let ids = [1, 2, 3, 4, 5];
    for bumped in sequences::bump_each(&ids) {
        out.push(bumped.to_string());
    }

    // First word bound, the rest collected in order.
    if let Some((first, rest)) =
        functions::split_first(&["Hello", "World", "How", "Are", "You"])
    {
        out.push(first.to_string());
        out.push(format!("{rest:?}"));
    }

    // Spread two sequences into a combined one.
    let arr1 = [1, 2, 3];
    let arr2 = [4, 5, 6];
    out.push(format!("{:?}", sequences::concat(&arr1, &arr2)));

    // Interpolation.
    out.push(text::hello("World"));

    // Field extraction from a record.
    let person = Person::new("John", "Doe");
    let (first_name, last_name) = person.into_names();
    out.push(first_name);
    out.push(last_name);

    // Defaulted parameter.
    out.push(functions::greeting_for(None));
    out.push(functions::greeting_for(Some("Alice")));

    // Exponentiation.
    out.push(functions::power(2, 3).to_string());

    // Membership probes.
    let numbers = [1, 2, 3, 4, 5];
    out.push(sequences::contains(&numbers, 3).to_string());
    out.push(sequences::contains(&numbers, 6).to_string());

    // Values and entries of an ordered mapping.
    let map = collections::letter_counts();
    out.push(format!("{:?}", collections::values_of(&map)));
    out.push(format!("{:?}", collections::entries_of(&map)));

    // Padding.
    out.push(text::pad_start("hello", 10));
    out.push(text::pad_end("hello", 10));

    // A counter closure advancing its private count.
    let mut counter = functions::make_counter();
    out.push(counter().to_string());
    out.push(counter().to_string());

    // Dispatch through the trait; the override wins.
    let dog = Dog::new("Rex");
    let speaker: &dyn Speaks = &dog;
    out.push(speaker.speak());

    // Associative store and deduplicated set.
    if let Some(value) = collections::store_and_lookup() {
        out.push(value);
    }
    out.push(collections::set_membership(&[1, 2, 3, 4, 5], 6, 3).to_string());

    // Raise and recover locally; the tour carries on afterwards.
    match raise_demo_failure() {
        Ok(()) => {}
        Err(e) => out.push(e.to_string()),
    }

    // Transform, filter, fold.
    let numbers_array = [1, 2, 3, 4, 5];
    out.push(format!("{:?}", sequences::doubled(&numbers_array)));
    out.push(format!("{:?}", sequences::evens(&numbers_array)));
    out.push(sequences::sum(&numbers_array).to_string());

    // Search predicates.
    if let Some(found) = sequences::first_over(&numbers_array, 3) {
        out.push(found.to_string());
    }
    if let Some(index) = sequences::index_over(&numbers_array, 3) {
        out.push(index.to_string());
    }
    out.push(sequences::any_even(&numbers_array).to_string());
    out.push(sequences::all_even(&numbers_array).to_string());

    // Descending order on a copy; the source keeps its order.
    out.push(format!("{:?}", sequences::sorted_descending(&numbers_array)));

    // Combination, sub-range, in-place splice.
    out.push(format!("{:?}", sequences::concat(&arr1, &arr2)));
    out.push(format!("{:?}", sequences::slice_range(&numbers_array, 1, 3)));
    let mut spliced = numbers_array.to_vec();
    sequences::splice(&mut spliced, 1, 2, &[10, 11]);
    out.push(format!("{spliced:?}"));

    // Aliasing: a second handle to the same storage mutates the original.
    let original = sequences::shared(&[1, 2, 3]);
    let alias = original.clone();
    alias.borrow_mut()[0] = 10;
    out.push(format!("{:?}", original.borrow()));

    // Independent copy: mutation stays with the copy.
    let mut independent = original.borrow().clone();
    independent[0] = 20;
    out.push(format!("{:?}", original.borrow()));
    out.push(format!("{independent:?}"));

    out.push(CLOSING_LINE.to_string());
    out
}

/// Run the whole tour: schedule the deferred resolution, emit every
/// synchronous line, then await the deferred message and append it.
pub async fn run(resolve_delay: Duration) -> Result<Vec<String>> {
    let pending = deferred::resolve_after(resolve_delay, RESOLVED_MESSAGE);
    let mut lines = run_blocks();
    info!(lines = lines.len(), "synchronous demonstrations complete");
    lines.push(pending.await?);
    Ok(lines)
}
