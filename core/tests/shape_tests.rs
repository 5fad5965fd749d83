// tests/shape_tests.rs
mod common;

use common::*;
use sequent::{signature_of, SequentError, Signature, TypeShape, TypeTag};

#[test]
fn test_shape_rejects_empty_tag_list() {
  setup_tracing();
  match TypeShape::new(vec![]) {
    Err(SequentError::EmptyShape) => {}
    other => panic!("Expected EmptyShape, got {:?}", other),
  }
}

#[test]
fn test_shape_front_back_and_indexed_access() {
  setup_tracing();
  let shape = TypeShape::new(vec![TypeTag::of::<f64>(), TypeTag::of::<u8>(), TypeTag::of::<String>()]).unwrap();

  assert_eq!(shape.len(), 3);
  assert!(!shape.is_empty());
  assert_eq!(*shape.front(), TypeTag::of::<f64>());
  assert_eq!(*shape.back(), TypeTag::of::<String>());
  assert_eq!(shape.get(1), Some(&TypeTag::of::<u8>()));
  assert_eq!(shape.get(3), None);
}

#[test]
fn test_single_element_shape_front_equals_back() {
  setup_tracing();
  let shape = TypeShape::seed::<i32>();
  assert_eq!(shape.len(), 1);
  assert_eq!(shape.front(), shape.back());
}

#[test]
fn test_slice_extracts_contiguous_subrange() {
  setup_tracing();
  let shape = TypeShape::new(vec![
    TypeTag::of::<f64>(),
    TypeTag::of::<u8>(),
    TypeTag::of::<String>(),
    TypeTag::of::<i32>(),
  ])
  .unwrap();

  let middle = shape.slice(1, 2).unwrap();
  assert_eq!(middle.len(), 2);
  assert_eq!(*middle.front(), TypeTag::of::<u8>());
  assert_eq!(*middle.back(), TypeTag::of::<String>());
}

#[test]
fn test_slice_bounds_are_inclusive_of_final_element() {
  setup_tracing();
  let shape = TypeShape::new(vec![TypeTag::of::<f64>(), TypeTag::of::<u8>(), TypeTag::of::<String>()]).unwrap();

  // A slice may run through the back of the shape.
  let tail = shape.slice(1, 2).unwrap();
  assert_eq!(*tail.back(), TypeTag::of::<String>());

  // The whole shape is a valid slice of itself.
  let all = shape.slice(0, 3).unwrap();
  assert_eq!(all, shape);
}

#[test]
fn test_slice_out_of_bounds_is_rejected() {
  setup_tracing();
  let shape = TypeShape::new(vec![TypeTag::of::<f64>(), TypeTag::of::<u8>()]).unwrap();

  for (start, length) in [(0, 0), (0, 3), (2, 1), (1, 2)] {
    match shape.slice(start, length) {
      Err(SequentError::SliceOutOfBounds {
        start: s,
        length: l,
        size,
      }) => {
        assert_eq!((s, l, size), (start, length, 2));
      }
      other => panic!("Expected SliceOutOfBounds for ({}, {}), got {:?}", start, length, other),
    }
  }
}

#[test]
fn test_type_tags_compare_by_type_identity() {
  setup_tracing();
  assert_eq!(TypeTag::of::<String>(), TypeTag::of::<String>());
  assert_ne!(TypeTag::of::<String>(), TypeTag::of::<&str>());
  assert_eq!(TypeTag::of::<u8>().name(), "u8");
}

#[test]
fn test_signature_of_introspects_callables() {
  setup_tracing();
  // Free function.
  let sig = signature_of(&add_ten);
  assert_eq!(sig, Signature::of::<f64, f64>());

  // Capturing closure.
  let offset = 1_i32;
  let closure = move |v: i32| (v + offset).to_string();
  let sig = signature_of(&closure);
  assert_eq!(sig, Signature::of::<i32, String>());

  // Bound method path.
  let sig = signature_of(&String::into_bytes);
  assert_eq!(sig, Signature::of::<String, Vec<u8>>());
}

#[test]
fn test_signature_display_names_both_ends() {
  setup_tracing();
  let sig = Signature::of::<u8, String>();
  let rendered = sig.to_string();
  assert!(rendered.contains("u8"));
  assert!(rendered.contains("String"));
  assert!(rendered.contains("->"));
}
