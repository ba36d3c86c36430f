//! Tests for the showcase report.

use clap::Parser;
use order_views::TraversalOrder;
use order_views_showcase::{ShowcaseArgs, run};
use rstest::rstest;

fn report(arguments: &[&str]) -> String {
    let args = ShowcaseArgs::try_parse_from(
        std::iter::once("order-views-showcase").chain(arguments.iter().copied()),
    )
    .unwrap();
    let mut output = Vec::new();
    run(&args, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[rstest]
fn test_default_integer_report() {
    let expected = "\
Original container: [7, 15, 6, 1, 2]
Size of container: 5
insertion: 7 15 6 1 2
reverse: 2 1 6 15 7
ascending: 1 2 6 7 15
descending: 15 7 6 2 1
side-cross: 1 15 2 7 6
middle-out: 6 15 1 7 2
";
    assert_eq!(report(&[]), expected);
}

#[rstest]
fn test_word_report_with_removal() {
    let output = report(&["--words", "--remove", "Java", "--remove", "JavaScript", "-o", "ascending"]);
    let expected = "\
Original container: [C++, Java, Python, Rust, Go, Java]
Size of container: 6
Removed 2 x Java: [C++, Python, Rust, Go]
Could not remove JavaScript: element not found in container
ascending: C++ Go Python Rust
";
    assert_eq!(output, expected);
}

#[rstest]
fn test_explicit_values_and_orders() {
    let output = report(&["3", "1", "2", "--order", "side-cross", "--order", "reverse"]);
    assert!(output.ends_with("side-cross: 1 3 2\nreverse: 2 1 3\n"));
}

#[rstest]
fn test_invalid_integer_is_an_error() {
    let args = ShowcaseArgs::try_parse_from(["order-views-showcase", "seven"]).unwrap();
    let error = run(&args, &mut Vec::new()).unwrap_err();
    assert!(error.to_string().contains("invalid integer value: seven"));
}

#[rstest]
fn test_unknown_order_is_rejected_by_parser() {
    assert!(ShowcaseArgs::try_parse_from(["order-views-showcase", "--order", "spiral"]).is_err());
}

#[rstest]
fn test_selected_orders_default_to_all() {
    let args = ShowcaseArgs::try_parse_from(["order-views-showcase"]).unwrap();
    assert_eq!(args.selected_orders(), TraversalOrder::ALL.to_vec());
}
