//! Purpose: Lock the coercion-boundary contract: totality, collapse, and passthrough rules.
//! Exports: Integration tests only (no runtime exports).
//! Invariants: Every `IntoInput` shape wraps without failing.
//! Invariants: Absence sentinels always land on the shared `NOTHING`.

use maybelite::{just, of_number, of_object, of_string, wrap, IntoInput, Maybe, NOTHING};
use serde_json::{json, Map, Value};

#[test]
fn wrap_is_total_over_every_input_shape() {
    // Nothing here can fail; each arm just has to produce a wrapper.
    let inputs: Vec<Maybe<Value>> = vec![
        wrap(Value::Null),
        wrap(()),
        wrap(None::<Value>),
        wrap(f64::NAN),
        wrap(0i64),
        wrap(0.0f64),
        wrap(""),
        wrap("text".to_string()),
        wrap(false),
        wrap(Map::new()),
        wrap(Vec::<Value>::new()),
        wrap(json!({"k": [1, 2]})),
        wrap(NOTHING),
        wrap(just(Value::Null)),
    ];
    assert_eq!(inputs.len(), 14);
}

#[test]
fn null_and_undefined_equivalents_collapse_to_nothing() {
    assert_eq!(wrap(Value::Null), NOTHING);
    assert_eq!(wrap(()), NOTHING);
    assert_eq!(wrap(None::<&str>), NOTHING);
}

#[test]
fn zero_and_empty_containers_are_not_absence_for_wrap() {
    assert_eq!(wrap(0i64), Maybe::Just(json!(0)));
    assert_eq!(wrap(""), Maybe::Just(json!("")));
    assert_eq!(wrap(false), Maybe::Just(json!(false)));
    assert_eq!(wrap(Map::new()), Maybe::Just(json!({})));
}

#[test]
fn wrapping_is_idempotent() {
    let wrapped = wrap(json!({"k": 1}));
    assert_eq!(wrap(wrapped.clone()), wrapped);
    assert_eq!(wrap(NOTHING), NOTHING);

    // Re-wrapping never nests: the payload type stays `Value`.
    let rewrapped = wrap(wrap(wrap(json!(1))));
    assert_eq!(rewrapped, Maybe::Just(json!(1)));
}

#[test]
fn just_is_unchecked() {
    assert_eq!(just(Value::Null), Maybe::Just(Value::Null));
    assert!(just(Value::Null).is_just());
}

#[test]
fn of_string_requires_a_non_empty_string() {
    assert_eq!(of_string(""), Maybe::Nothing);
    assert_eq!(of_string("x"), Maybe::Just("x".to_string()));
    assert_eq!(of_string(String::from("hello")), Maybe::Just("hello".to_string()));
    assert_eq!(of_string(json!(3)), Maybe::Nothing);
    assert_eq!(of_string(Value::Null), Maybe::Nothing);
    assert_eq!(of_string(json!({"k": 1})), Maybe::Nothing);
    assert_eq!(of_string(wrap("x")), Maybe::Nothing);
}

#[test]
fn of_number_requires_a_real_number() {
    assert_eq!(of_number(3i64), Maybe::Just(3.0));
    assert_eq!(of_number(3.5f64), Maybe::Just(3.5));
    assert_eq!(of_number(f64::NAN), Maybe::Nothing);
    assert_eq!(of_number("3"), Maybe::Nothing);
    assert_eq!(of_number(Value::Null), Maybe::Nothing);
    assert_eq!(of_number(wrap(json!(3))), Maybe::Nothing);
}

#[test]
fn of_object_routes_through_wrap() {
    let object = json!({"k": 1});
    assert_eq!(of_object(object.clone()), Maybe::Just(object));
    assert_eq!(of_object(json!([1, 2, 3])), Maybe::Just(json!([1, 2, 3])));

    // Null-valued objects still collapse.
    assert_eq!(of_object(Value::Null), Maybe::Nothing);

    // A wrapped value is itself an object shape and passes through unchanged.
    let wrapped = wrap(json!({"k": 1}));
    assert_eq!(of_object(wrapped.clone()), wrapped);
    assert_eq!(of_object(NOTHING), NOTHING);

    // Primitives never coerce here, whatever their content.
    assert_eq!(of_object(json!("text")), Maybe::Nothing);
    assert_eq!(of_object(json!(42)), Maybe::Nothing);
    assert_eq!(of_object(json!(true)), Maybe::Nothing);
}

#[test]
fn boundary_classification_marks_wrapped_inputs() {
    assert!(NOTHING.into_input().is_wrapped());
    assert!(wrap(json!(1)).into_input().is_wrapped());
    assert!(!json!(1).into_input().is_wrapped());
    assert!(!Value::Null.into_input().is_wrapped());
}

fn user_name(doc: Value) -> String {
    let user: Maybe<Value> = wrap(doc).map(|v| v.get("user").cloned());
    let name: Maybe<Value> = user.map(|u| u.get("name").cloned());
    let name: Maybe<String> = name
        .filter(|n| n.as_str().is_some_and(|s| !s.is_empty()))
        .map(|n| n.as_str().map(String::from));
    name.get_or_else(|| "anonymous".to_string())
}

#[test]
fn wrapped_values_carry_combinators_end_to_end() {
    assert_eq!(user_name(json!({"user": {"name": "ada"}})), "ada");
    assert_eq!(user_name(json!({"user": {"name": ""}})), "anonymous");
    assert_eq!(user_name(json!({"user": {}})), "anonymous");
    assert_eq!(user_name(json!({})), "anonymous");
    assert_eq!(user_name(Value::Null), "anonymous");
}
