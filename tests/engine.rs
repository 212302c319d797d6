//! End-to-end pipeline tests: raw input through the parser and processor.

use rpncalc::{CalcError, Processor};

/// Evaluate `input` on a fresh processor and assert the final stack.
fn assert_stack_eq(input: &str, expected: &[f64]) {
    let mut processor = Processor::new();
    processor.eval(input).unwrap();
    assert_eq!(processor.stack().as_slice(), expected, "input: {input:?}");
}

/// Evaluate `input` on a fresh processor and assert the returned result.
fn assert_result_eq(input: &str, expected: f64) {
    let mut processor = Processor::new();
    assert_eq!(processor.eval(input).unwrap(), expected, "input: {input:?}");
}

// ============================================================================
// Binary arithmetic
// ============================================================================

#[test]
fn binary_add() {
    assert_stack_eq("3 4 +", &[7.0]);
}

#[test]
fn binary_sub() {
    assert_stack_eq("10 3 -", &[7.0]);
}

#[test]
fn binary_mul() {
    assert_stack_eq("6 7 *", &[42.0]);
}

#[test]
fn binary_div() {
    assert_stack_eq("20 4 /", &[5.0]);
}

#[test]
fn chained_ops() {
    assert_stack_eq("1 2 + 3 +", &[6.0]);
}

#[test]
fn postfix_grouping() {
    // 2 * (3 + 4)
    assert_stack_eq("2 3 4 + *", &[14.0]);
}

// ============================================================================
// Number literals
// ============================================================================

#[test]
fn scientific_notation() {
    assert_result_eq("1e10", 1e10);
    assert_result_eq("1.5e2", 150.0);
}

#[test]
fn signed_decimals() {
    assert_stack_eq("-0.4 0.4 +", &[0.0]);
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn sum_collapses_stack() {
    assert_stack_eq("1 2 3 4 sum()", &[10.0]);
}

#[test]
fn sqrt_of_square() {
    assert_stack_eq("16 sqrt()", &[4.0]);
}

#[test]
fn pow_exponent_on_top() {
    assert_stack_eq("2 3 pow()", &[8.0]);
    assert_result_eq("2 3 pow()", 8.0);
}

#[test]
fn recip_leaves_stack_alone() {
    let mut processor = Processor::new();
    assert_eq!(processor.eval("4 recip()").unwrap(), 0.25);
    assert_eq!(processor.stack().as_slice(), &[4.0]);
}

#[test]
fn swap_returns_moved_value() {
    let mut processor = Processor::new();
    assert_eq!(processor.eval("1 2 3 swap()").unwrap(), 3.0);
    assert_eq!(processor.stack().as_slice(), &[1.0, 3.0, 2.0]);
}

#[test]
fn clear_then_push() {
    assert_stack_eq("1 2 clear() 9", &[9.0]);
}

#[test]
fn function_names_any_case() {
    assert_stack_eq("1 2 3 SUM()", &[6.0]);
}

// ============================================================================
// Swallowed underflow at the function layer
// ============================================================================

#[test]
fn pop_on_empty_stack_is_zero() {
    assert_result_eq("pop()", 0.0);
}

#[test]
fn swap_on_short_stack_is_zero() {
    let mut processor = Processor::new();
    assert_eq!(processor.eval("1 swap()").unwrap(), 0.0);
    assert_eq!(processor.stack().as_slice(), &[1.0]);
}

#[test]
fn sqrt_on_empty_stack_is_zero() {
    assert_result_eq("sqrt()", 0.0);
}

#[test]
fn pow_underflow_propagates() {
    let mut processor = Processor::new();
    assert_eq!(
        processor.eval("2 pow()"),
        Err(CalcError::StackHasLessThanTwoNumbers)
    );
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn aggregated_invalid_items() {
    let mut processor = Processor::new();
    let err = processor.eval("1 2 3 + - * / bad content").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("bad"));
    assert!(text.contains("content"));
    // Nothing was applied: validation failed before evaluation.
    assert!(processor.stack().is_empty());
}

#[test]
fn division_by_zero_preserves_operands() {
    let mut processor = Processor::new();
    assert_eq!(processor.eval("5 0 /"), Err(CalcError::DivisionByZero));
    assert_eq!(processor.stack().as_slice(), &[5.0, 0.0]);
}

#[test]
fn negative_sqrt_propagates() {
    let mut processor = Processor::new();
    assert_eq!(
        processor.eval("-1 sqrt()"),
        Err(CalcError::InvalidNegativeSquareRoot)
    );
}

#[test]
fn recip_of_zero_propagates() {
    let mut processor = Processor::new();
    assert_eq!(processor.eval("0 recip()"), Err(CalcError::DivisionByZero));
    assert_eq!(processor.stack().as_slice(), &[0.0]);
}

#[test]
fn empty_input_over_empty_stack() {
    let mut processor = Processor::new();
    assert_eq!(processor.eval(""), Err(CalcError::NoResultOnStack));
    assert_eq!(processor.stack().len(), 0);
}

#[test]
fn operator_underflow_mid_line() {
    let mut processor = Processor::new();
    assert_eq!(
        processor.eval("1 2 + +"),
        Err(CalcError::StackHasLessThanTwoNumbers)
    );
    // The first + was applied before the failure.
    assert_eq!(processor.stack().as_slice(), &[3.0]);
}
