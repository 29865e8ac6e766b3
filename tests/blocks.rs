use whirlwind::collections::{self, Person};
use whirlwind::functions;
use whirlwind::sequences;
use whirlwind::speech::{Animal, Dog, Speaks};
use whirlwind::text;

#[test]
fn both_addition_forms_agree() {
    assert_eq!(functions::add_two_numbers(3, 5), 8);
    let add = functions::add();
    assert_eq!(add(3, 5), 8, "closure form must match the function item");
}

#[test]
fn rest_collection_binds_first_and_gathers_remainder() {
    let (first, rest) =
        functions::split_first(&["Hello", "World", "How", "Are", "You"]).expect("non-empty input");
    assert_eq!(first, "Hello");
    assert_eq!(rest, vec!["World", "How", "Are", "You"]);
    assert!(functions::split_first(&[]).is_none(), "empty input has no first to bind");
}

#[test]
fn concatenation_preserves_order_and_sources() {
    let left = [1, 2, 3];
    let right = [4, 5, 6];
    let combined = sequences::concat(&left, &right);
    assert_eq!(combined, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(left, [1, 2, 3], "left source must be untouched");
    assert_eq!(right, [4, 5, 6], "right source must be untouched");
}

#[test]
fn counter_is_stateful_and_instances_are_independent() {
    let mut counter = functions::make_counter();
    assert_eq!(counter(), 1);
    assert_eq!(counter(), 2);
    let mut other = functions::make_counter();
    assert_eq!(other(), 1, "a fresh counter must not see another instance's count");
}

#[test]
fn sorting_a_copy_never_reorders_the_source() {
    let numbers = [1, 2, 3, 4, 5];
    let sorted = sequences::sorted_descending(&numbers);
    assert_eq!(sorted, vec![5, 4, 3, 2, 1]);
    assert_eq!(numbers, [1, 2, 3, 4, 5], "source must keep its original order");
}

#[test]
fn aliased_mutation_is_visible_through_the_original() {
    let original = sequences::shared(&[1, 2, 3]);
    let alias = original.clone();
    alias.borrow_mut()[0] = 10;
    assert_eq!(*original.borrow(), vec![10, 2, 3]);
}

#[test]
fn independent_copy_mutation_is_isolated() {
    let original = sequences::shared(&[1, 2, 3]);
    let alias = original.clone();
    alias.borrow_mut()[0] = 10;
    let mut copy = original.borrow().clone();
    copy[0] = 20;
    assert_eq!(*original.borrow(), vec![10, 2, 3], "the copy's mutation must not leak back");
    assert_eq!(copy, vec![20, 2, 3]);
}

#[test]
fn search_predicates_are_mutually_consistent() {
    let numbers = [1, 2, 3, 4, 5];
    assert_eq!(sequences::first_over(&numbers, 3), Some(4));
    assert_eq!(sequences::index_over(&numbers, 3), Some(3));
    assert!(sequences::any_even(&numbers));
    assert!(!sequences::all_even(&numbers));
    // the found value lives at the found index
    let index = sequences::index_over(&numbers, 3).unwrap();
    assert_eq!(numbers[index], sequences::first_over(&numbers, 3).unwrap());
}

#[test]
fn transform_filter_fold() {
    let numbers = [1, 2, 3, 4, 5];
    assert_eq!(sequences::doubled(&numbers), vec![2, 4, 6, 8, 10]);
    assert_eq!(sequences::evens(&numbers), vec![2, 4]);
    assert_eq!(sequences::sum(&numbers), 15);
}

#[test]
fn splice_replaces_in_place_and_returns_removed() {
    let mut values = vec![1, 2, 3, 4, 5];
    let removed = sequences::splice(&mut values, 1, 2, &[10, 11]);
    assert_eq!(values, vec![1, 10, 11, 4, 5]);
    assert_eq!(removed, vec![2, 3]);
}

#[test]
fn splice_clamps_past_the_end() {
    let mut values = vec![1, 2, 3];
    let removed = sequences::splice(&mut values, 2, 10, &[9]);
    assert_eq!(values, vec![1, 2, 9], "delete count is clamped to the tail");
    assert_eq!(removed, vec![3]);
    let mut values = vec![1, 2, 3];
    let removed = sequences::splice(&mut values, 10, 2, &[7]);
    assert_eq!(values, vec![1, 2, 3, 7], "a start past the end appends");
    assert!(removed.is_empty());
}

#[test]
fn slice_range_is_half_open_and_clamped() {
    let numbers = [1, 2, 3, 4, 5];
    assert_eq!(sequences::slice_range(&numbers, 1, 3), vec![2, 3]);
    assert_eq!(sequences::slice_range(&numbers, 3, 100), vec![4, 5]);
    assert!(sequences::slice_range(&numbers, 4, 2).is_empty());
}

#[test]
fn membership_probes() {
    let numbers = [1, 2, 3, 4, 5];
    assert!(sequences::contains(&numbers, 3));
    assert!(!sequences::contains(&numbers, 6));
}

#[test]
fn record_fields_extract_in_declaration_order() {
    let person = Person::new("John", "Doe");
    let (first, last) = person.into_names();
    assert_eq!(first, "John");
    assert_eq!(last, "Doe");
}

#[test]
fn mapping_values_and_entries_follow_key_order() {
    let map = collections::letter_counts();
    assert_eq!(collections::values_of(&map), vec![1, 2, 3]);
    assert_eq!(
        collections::entries_of(&map),
        vec![("a", 1), ("b", 2), ("c", 3)]
    );
}

#[test]
fn store_and_set_demonstrations() {
    assert_eq!(collections::store_and_lookup().as_deref(), Some("value1"));
    assert!(collections::set_membership(&[1, 2, 3, 4, 5], 6, 3));
    assert!(collections::set_membership(&[1, 2, 3, 4, 5], 6, 6));
    assert!(!collections::set_membership(&[1, 2, 3, 4, 5], 6, 7));
}

#[test]
fn padding_pads_with_spaces_and_leaves_wide_strings_alone() {
    assert_eq!(text::pad_start("hello", 10), "     hello");
    assert_eq!(text::pad_end("hello", 10), "hello     ");
    assert_eq!(text::pad_start("hello", 3), "hello", "width under length is a no-op");
    assert_eq!(text::pad_end("hello", 5), "hello");
}

#[test]
fn greeting_defaults_and_interpolation() {
    assert_eq!(functions::greeting_for(None), "Hello, Stranger!");
    assert_eq!(functions::greeting_for(Some("Alice")), "Hello, Alice!");
    assert_eq!(text::hello("World"), "Hello, World!");
    assert_eq!(functions::power(2, 3), 8);
}

#[test]
fn dispatch_prefers_the_override() {
    let animals: Vec<Box<dyn Speaks>> =
        vec![Box::new(Animal::new("Generic")), Box::new(Dog::new("Rex"))];
    assert_eq!(animals[0].speak(), "Generic makes a sound");
    assert_eq!(animals[1].speak(), "Rex barks");
}
