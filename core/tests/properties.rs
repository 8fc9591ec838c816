//! Property-based tests for the invariants a descriptor is expected to hold
//! regardless of the particular values pushed through it, modeled on how
//! fuel-merkle uses `proptest` to hammer its own tree invariants with
//! generated input rather than a handful of fixed cases.

use byteform::{builders, Construct, FormatCode, Value};
use proptest::prelude::*;

fn header() -> byteform::Struct {
    let fields: Vec<Box<dyn Construct>> = vec![
        Box::new(builders::format_field("a", '<', FormatCode::U32).unwrap()),
        Box::new(builders::format_field("b", '<', FormatCode::I16).unwrap()),
        Box::new(builders::format_field("c", '<', FormatCode::U8).unwrap()),
        Box::new(builders::format_field("d", '>', FormatCode::I64).unwrap()),
    ];
    builders::structure("header", fields).unwrap()
}

proptest! {
    /// Building then parsing any value the struct can hold returns the same
    /// value (spec §8's round-trip invariant).
    #[test]
    fn struct_build_then_parse_roundtrips(a: u32, b: i16, c: u8, d: i64) {
        let s = header();
        let mut obj = byteform::Container::new();
        obj.set("a", Value::UInt(a as u64));
        obj.set("b", Value::Int(b as i64));
        obj.set("c", Value::UInt(c as u64));
        obj.set("d", Value::Int(d));
        let value = Value::Container(obj);

        let built = s.build(&value).unwrap();
        let parsed = s.parse(&built).unwrap();
        prop_assert_eq!(parsed, value);
    }

    /// A construct's declared size always matches the number of bytes its
    /// own build actually emits (spec §7).
    #[test]
    fn struct_sizeof_matches_build_length(a: u32, b: i16, c: u8, d: i64) {
        let s = header();
        let mut obj = byteform::Container::new();
        obj.set("a", Value::UInt(a as u64));
        obj.set("b", Value::Int(b as i64));
        obj.set("c", Value::UInt(c as u64));
        obj.set("d", Value::Int(d));
        let value = Value::Container(obj);

        let built = s.build(&value).unwrap();
        prop_assert_eq!(s.sizeof(None).unwrap(), built.len());
    }

    /// Any name that isn't the reserved `"_"` or doesn't start with `"<"` is
    /// accepted; every name that does is rejected (spec §4.4's reservation
    /// rule).
    #[test]
    fn name_reservation_is_exact(s in "[^_<][a-zA-Z0-9_]*") {
        prop_assert!(byteform::Name::new(&s).is_ok());
    }

    #[test]
    fn names_starting_with_angle_bracket_are_always_reserved(s in "<[a-zA-Z0-9]*") {
        prop_assert!(byteform::Name::new(&s).is_err());
    }

    /// An unsigned `BitField` of `width` bits round-trips every value that
    /// fits in it (spec §4.7, §8).
    #[test]
    fn bit_field_roundtrips_unsigned_values(width in 1usize..16, raw: u16) {
        let value = (raw as u64) & ((1u64 << width) - 1);
        let f = builders::bit_field("x", width).unwrap();
        let built = f.build(&Value::UInt(value)).unwrap();
        prop_assert_eq!(built.len(), width);
        prop_assert_eq!(f.parse(&built).unwrap(), Value::UInt(value));
    }

    /// An embedded struct's fields appear directly in the parent's output,
    /// never nested under the embedded struct's own name (spec §4.4's
    /// flatten invariant), for any pair of field values.
    #[test]
    fn embed_is_always_flat(x: u8, y: u8) {
        let inner = builders::structure(
            "inner",
            vec![
                Box::new(builders::format_field("y", '<', FormatCode::U8).unwrap()) as Box<dyn Construct>,
            ],
        ).unwrap();
        let outer = builders::structure(
            "outer",
            vec![
                Box::new(builders::format_field("x", '<', FormatCode::U8).unwrap()) as Box<dyn Construct>,
                Box::new(builders::embed(inner)) as Box<dyn Construct>,
            ],
        ).unwrap();

        let parsed = outer.parse(&[x, y]).unwrap();
        let obj = parsed.as_container().unwrap();
        prop_assert_eq!(obj.get("x"), Some(&Value::UInt(x as u64)));
        prop_assert_eq!(obj.get("y"), Some(&Value::UInt(y as u64)));
        prop_assert_eq!(obj.get("inner"), None);
    }
}
