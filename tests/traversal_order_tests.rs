//! Tests for selecting traversal orders at runtime.

use order_views::{Container, ContainerError, OrderView, TraversalOrder};
use rstest::rstest;

#[rstest]
#[case(TraversalOrder::Insertion, "7 15 6 1 2")]
#[case(TraversalOrder::Reverse, "2 1 6 15 7")]
#[case(TraversalOrder::Ascending, "1 2 6 7 15")]
#[case(TraversalOrder::Descending, "15 7 6 2 1")]
#[case(TraversalOrder::SideCross, "1 15 2 7 6")]
#[case(TraversalOrder::MiddleOut, "6 15 1 7 2")]
fn test_traverse_scenario(#[case] order: TraversalOrder, #[case] expected: &str) {
    let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
    let rendered: Vec<String> = container
        .traverse(order)
        .map(|element| element.to_string())
        .collect();
    assert_eq!(rendered.join(" "), expected);
}

#[rstest]
fn test_traverse_variant_matches_order() {
    let container: Container<i32> = (1..=3).collect();
    assert!(matches!(
        container.traverse(TraversalOrder::Insertion),
        OrderView::Insertion(_)
    ));
    assert!(matches!(
        container.traverse(TraversalOrder::MiddleOut),
        OrderView::MiddleOut(_)
    ));
}

#[rstest]
fn test_all_lists_six_distinct_orders() {
    let mut names: Vec<&str> = TraversalOrder::ALL.iter().map(|order| order.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 6);
}

#[rstest]
fn test_parse_error_keeps_input() {
    let error = "sideways".parse::<TraversalOrder>().unwrap_err();
    assert_eq!(error, ContainerError::UnknownOrder("sideways".to_string()));
    assert_eq!(error.to_string(), "unknown traversal order: sideways");
}

#[rstest]
fn test_live_view_sees_current_elements() {
    let mut container: Container<i32> = (1..=3).collect();
    container.add(4);
    let view = container.traverse(TraversalOrder::Reverse);
    assert_eq!(view.collect::<Vec<_>>(), vec![4, 3, 2, 1]);
}
