//! Property-based tests for builders
//!
//! Invariants that should hold for ALL assignments:
//! - Equivalence: building through a builder equals direct construction,
//!   for every value of the field type when built through typed slots
//! - Order: assignment order never changes the result
//! - Completeness: build fails exactly when a required field is unset,
//!   naming every such field
//! - Repeatability: building twice yields equal records

mod common;

use common::*;
use dataclass_builder::{build, Builder, BuilderError, DataclassBuilder};
use proptest::prelude::*;

// Floats the by-name interface can store
fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    #[test]
    fn prop_wrapper_matches_direct_construction(x in finite(), y in finite(), w in prop::option::of(finite())) {
        let mut builder = DataclassBuilder::<Point>::new();
        builder.set("x", x).unwrap();
        builder.set("y", y).unwrap();
        if let Some(w) = w {
            builder.set("w", w).unwrap();
        }
        let expected = Point { x, y, w: w.unwrap_or(1.0) };
        prop_assert_eq!(build(&builder).unwrap(), expected);
    }

    #[test]
    fn prop_generated_keeps_every_float(x in any::<f64>(), y in any::<f64>(), w in prop::option::of(any::<f64>())) {
        let mut builder = PointBuilder::new();
        builder.x = x.into();
        builder.y = y.into();
        if let Some(w) = w {
            builder.w = w.into();
        }
        let point = builder.build().unwrap();
        prop_assert_eq!(point.x.to_bits(), x.to_bits());
        prop_assert_eq!(point.y.to_bits(), y.to_bits());
        prop_assert_eq!(point.w.to_bits(), w.unwrap_or(1.0).to_bits());
        // display never fails, whatever the value
        prop_assert!(builder.to_string().starts_with("PointBuilder(x="));
    }

    #[test]
    fn prop_generated_keeps_every_integer(big in any::<i128>(), small in any::<u8>()) {
        let mut builder = WideBuilder::new();
        builder.big = big.into();
        builder.small = small.into();
        prop_assert_eq!(builder.build().unwrap(), Wide { big, small });
        prop_assert_eq!(
            builder.to_string(),
            format!("WideBuilder(big={}, small={})", big, small)
        );
    }

    #[test]
    fn prop_generated_matches_wrapper(x in any::<i64>(), y in any::<i64>()) {
        let mut generated = PixelCoordBuilder::new();
        generated.x = x.into();
        generated.y = y.into();
        let wrapper = DataclassBuilder::<PixelCoord>::with_values([("x", x), ("y", y)]).unwrap();
        prop_assert_eq!(build(&generated).unwrap(), build(&wrapper).unwrap());
        prop_assert_eq!(generated.to_string(), format!("PixelCoordBuilder(x={x}, y={y})"));
    }

    #[test]
    fn prop_assignment_order_irrelevant(int_ in any::<i64>(), float_ in finite(), str_ in "[a-z]{0,8}", reverse in any::<bool>()) {
        let mut entries = vec![
            ("int_", serde_json::json!(int_)),
            ("float_", serde_json::json!(float_)),
            ("str_", serde_json::json!(str_)),
        ];
        if reverse {
            entries.reverse();
        }
        let builder = DataclassBuilder::<Types>::with_values(entries).unwrap();
        prop_assert_eq!(build(&builder).unwrap(), Types { int_, float_, str_ });
    }

    #[test]
    fn prop_missing_fields_reported(set_int in any::<bool>(), set_float in any::<bool>(), set_str in any::<bool>()) {
        let mut builder = TypesBuilder::new();
        if set_int {
            builder.int_ = 1.into();
        }
        if set_float {
            builder.float_ = 2.0.into();
        }
        if set_str {
            builder.str_ = "s".to_string().into();
        }

        let mut expected = Vec::new();
        if !set_int {
            expected.push("int_".to_string());
        }
        if !set_float {
            expected.push("float_".to_string());
        }

        match builder.build() {
            Ok(types) => {
                prop_assert!(expected.is_empty());
                let str_ = if set_str { "s" } else { "hello" };
                prop_assert_eq!(types.str_, str_);
            }
            Err(BuilderError::MissingField { fields, .. }) => {
                prop_assert_eq!(fields, expected);
            }
            Err(other) => {
                prop_assert!(false, "unexpected error: {}", other);
            }
        }
        prop_assert_eq!(builder.is_complete(), set_int && set_float);
    }

    #[test]
    fn prop_build_is_repeatable(sequence in prop::collection::vec(any::<i64>(), 0..8)) {
        let mut builder = CollectionsBuilder::new();
        builder.sequence = sequence.clone().into();
        builder.mapping = std::collections::BTreeMap::<String, f64>::default().into();
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.sequence, sequence);
    }
}
