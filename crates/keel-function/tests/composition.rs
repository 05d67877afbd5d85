//! End-to-end composition scenarios across shapes, validators, and the
//! fault suppression history.

use keel_fault::{Fault, FaultKind};
use keel_function::{Action, Callback, Condition, Handler, Supplier};

fn fault(message: &str) -> Fault {
    Fault::with_message(FaultKind::UncheckedRecoverable, message)
}

#[test]
fn double_supplier_failure_surfaces_the_fallback_fault() {
    let mut pipeline =
        Supplier::<i32>::of_fault(fault("err1")).or_supplied(Supplier::of_fault(fault("err2")));
    let observed = pipeline.supply().unwrap_err();
    assert_eq!(observed.message(), Some("err2"));
    assert_eq!(observed.suppressed().len(), 1);
    assert_eq!(observed.suppressed()[0].message(), Some("err1"));
}

#[test]
fn a_fallback_chain_keeps_the_full_failure_history() {
    let mut pipeline = Action::of_fault(fault("a"))
        .or(Action::of_fault(fault("b")))
        .or(Action::of_fault(fault("c")));
    let observed = pipeline.perform().unwrap_err();

    // The last operand to run is the authoritative one.
    assert_eq!(observed.message(), Some("c"));
    assert_eq!(observed.suppressed().len(), 1);
    let inner = &observed.suppressed()[0];
    assert_eq!(inner.message(), Some("b"));
    assert_eq!(inner.suppressed().len(), 1);
    assert_eq!(inner.suppressed()[0].message(), Some("a"));
}

#[test]
fn secured_chains_run_every_stage_and_keep_the_last_fault() {
    let mut pipeline = Callback::of_fault(fault("use"))
        .secured_and(Callback::of_fault(fault("release")))
        .secured_and(Callback::noop());
    let observed = pipeline.call().unwrap_err();
    assert_eq!(observed.message(), Some("release"));
    assert_eq!(observed.suppressed().len(), 1);
    assert_eq!(observed.suppressed()[0].message(), Some("use"));
}

#[test]
fn validators_compose_as_pipeline_stages() {
    let mut pipeline = Handler::from_fn(|value: Option<i32>| {
        keel_validate::non_null(value, Some("The passed value"))
    })
    .and(Handler::from_fn(|n: i32| Ok(n * 2)));

    assert_eq!(pipeline.handle(Some(21)).unwrap(), 42);

    let observed = pipeline.handle(None).unwrap_err();
    assert_eq!(observed.kind(), FaultKind::UncheckedRecoverable);
    assert_eq!(observed.message(), Some("The passed value mustn't be null"));
}

#[test]
fn validator_faults_can_be_recovered_by_fallbacks() {
    let mut pipeline = Handler::from_fn(|value: Option<i32>| {
        keel_validate::non_null(value, Some("The passed value"))
    })
    .or_value(0);
    assert_eq!(pipeline.handle(None).unwrap(), 0);
    assert_eq!(pipeline.handle(Some(5)).unwrap(), 5);
}

#[test]
fn supplier_pipelines_mix_shapes() {
    let mut pipeline = Supplier::of_value(4)
        .and_handled(Handler::from_fn(|n: i32| {
            keel_validate::is_true(n % 2 == 0, Some("The parity check")).map(|_| n / 2)
        }))
        .or_value(-1);
    assert_eq!(pipeline.supply().unwrap(), 2);

    let mut rejected = Supplier::of_value(5)
        .and_handled(Handler::from_fn(|n: i32| {
            keel_validate::is_true(n % 2 == 0, Some("The parity check")).map(|_| n / 2)
        }))
        .or_value(-1);
    assert_eq!(rejected.supply().unwrap(), -1);
}

#[test]
fn boolean_pipelines_nest_with_fallible_operands() {
    let mut gate = Condition::from_fn(|| Ok(true))
        .and(Condition::of_fault(fault("probe")).or(Condition::direct(true)));
    let observed = gate.compute().unwrap_err();
    // `Condition::or` is boolean OR, not a fault fallback: the left
    // fault propagates before the right operand is consulted.
    assert_eq!(observed.message(), Some("probe"));
}

#[test]
fn the_surfaced_fault_is_the_only_one_observed() {
    let mut pipeline = Action::of_fault(fault("a"))
        .or(Action::of_fault(fault("b")))
        .secured_and(Action::noop());
    let observed = pipeline.perform().unwrap_err();
    assert_eq!(observed.message(), Some("b"));
    assert_eq!(observed.suppressed().len(), 1);
    assert_eq!(observed.suppressed()[0].message(), Some("a"));
    assert!(observed.suppressed()[0].suppressed().is_empty());
    assert!(observed.cause().is_none());
}
