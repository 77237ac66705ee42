use super::*;

/// Nested list shaped like the reader's output for `((((...))))`.
enum Nested {
    Leaf,
    List(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf;
    for _ in 0..depth {
        node = Nested::List(Box::new(node));
    }
    node
}

fn measure(node: &Nested) -> usize {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf => 0,
        Nested::List(inner) => measure(inner) + 1,
    })
}

fn release(node: Nested) {
    // Iterative drop so the test does not depend on Box's recursive Drop.
    let mut current = node;
    while let Nested::List(inner) = current {
        current = *inner;
    }
}

#[test]
fn test_shallow_nesting() {
    let tree = build(10);
    assert_eq!(measure(&tree), 10);
    release(tree);
}

#[test]
fn test_deep_nesting() {
    // Deep enough to overflow a default 8MB main-thread stack without growth.
    let tree = build(200_000);
    assert_eq!(measure(&tree), 200_000);
    release(tree);
}

#[test]
fn test_passes_result_through() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Err("unbound"));
    assert_eq!(result, Err("unbound"));
}
