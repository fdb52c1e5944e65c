use approx::assert_relative_eq;
use duet_core::{Error, Model, Number, Numbers};
use serde_json::json;

use super::{
    IterativePrefixSum, RecursivePrefixSum, before, iterative, prefix_sum_iterative,
    prefix_sum_recursive, recursive,
};

/// Reference prefix sums: each element re-sums the input from the start.
fn reference(numbers: &Numbers) -> Vec<Number> {
    (1..=numbers.len())
        .map(|end| {
            numbers.as_slice()[..end]
                .iter()
                .fold(Number::Int(0), |total, &value| total + value)
        })
        .collect()
}

#[test]
fn running_sums_of_one_through_six() {
    let input = json!([1, 2, 3, 4, 5, 6]);
    let expected = Numbers::new([1, 3, 6, 10, 15, 21]).unwrap();

    assert_eq!(prefix_sum_iterative(&input), Ok(expected.clone()));
    assert_eq!(prefix_sum_recursive(&input), Ok(expected));
}

#[test]
fn singleton_passes_through() {
    let input = json!([7]);
    let expected = Numbers::new([7]).unwrap();

    assert_eq!(prefix_sum_iterative(&input), Ok(expected.clone()));
    assert_eq!(prefix_sum_recursive(&input), Ok(expected));
}

#[test]
fn singleton_reuses_allocation() {
    let numbers = Numbers::new([7]).unwrap();
    let ptr = numbers.as_slice().as_ptr();
    assert_eq!(iterative(numbers).as_slice().as_ptr(), ptr);

    let numbers = Numbers::new([7]).unwrap();
    let ptr = numbers.as_slice().as_ptr();
    assert_eq!(recursive(numbers).as_slice().as_ptr(), ptr);
}

#[test]
fn variants_agree_with_reference() {
    let inputs = [
        json!([3, -1, 4, -1, 5, -9, 2, 6, -5, 3]),
        json!([-10, 10, -10, 10]),
        json!([0, 0, 0]),
        json!([2, 2]),
    ];

    for input in inputs {
        let numbers = before(&input).unwrap();
        let expected = reference(&numbers);

        let by_loop = iterative(numbers.clone());
        let by_recursion = recursive(numbers);

        assert_eq!(by_loop.as_slice(), expected.as_slice(), "iterative {input}");
        assert_eq!(by_recursion.as_slice(), expected.as_slice(), "recursive {input}");
        assert_eq!(by_loop.len(), input.as_array().unwrap().len());
    }
}

#[test]
fn float_elements() {
    let input = json!([0.5, 1, 0.25]);

    let by_loop = prefix_sum_iterative(&input).unwrap();
    let by_recursion = prefix_sum_recursive(&input).unwrap();

    assert_eq!(by_loop, by_recursion);
    assert_relative_eq!(by_loop[0].as_f64(), 0.5);
    assert_relative_eq!(by_loop[1].as_f64(), 1.5);
    assert_relative_eq!(by_loop[2].as_f64(), 1.75);
}

#[test]
fn empty_or_absent_is_no_data() {
    for input in [json!([]), json!(null)] {
        assert_eq!(prefix_sum_iterative(&input), Err(Error::NoData));
        assert_eq!(prefix_sum_recursive(&input), Err(Error::NoData));
    }
}

#[test]
fn non_sequence_is_not_a_list() {
    for input in [json!("not a list"), json!(42), json!({ "a": 1 })] {
        assert_eq!(prefix_sum_iterative(&input), Err(Error::NotAList));
        assert_eq!(prefix_sum_recursive(&input), Err(Error::NotAList));
    }
}

#[test]
fn non_numeric_element_is_not_number_type() {
    for input in [json!([1, "x", 3]), json!([true]), json!([1, null])] {
        assert_eq!(prefix_sum_iterative(&input), Err(Error::NotNumberType));
        assert_eq!(prefix_sum_recursive(&input), Err(Error::NotNumberType));
    }
}

#[test]
fn models_match_functions() {
    let input = json!([1, 2, 3]);
    let expected = Numbers::new([1, 3, 6]).unwrap();

    assert_eq!(IterativePrefixSum.call(input.clone()), Ok(expected.clone()));
    assert_eq!(RecursivePrefixSum.call(input), Ok(expected));
    assert_eq!(IterativePrefixSum.call(json!([])), Err(Error::NoData));
}
