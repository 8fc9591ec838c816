//! Worked examples of composing `byteform` descriptors by hand, in place of
//! the single `#[derive(Struct)]` format string this crate used to expand.

use byteform::{builders, Construct, FormatCode, Struct, Value};

fn field(name: &str, endian: char, code: FormatCode) -> Box<dyn Construct> {
    Box::new(builders::format_field(name, endian, code).unwrap())
}

/// A struct exercising every scalar `FormatCode`, little-endian, plus a
/// trailing raw byte run — the dynamic-API equivalent of the old
/// `#[fmt = "@bhlbibqBHLbIbQ3s"]` turtle struct.
pub fn turtle() -> Struct {
    builders::structure(
        "turtle",
        vec![
            field("t0_i8", '<', FormatCode::I8),
            field("t1_i16", '<', FormatCode::I16),
            field("t2_i32", '<', FormatCode::I32),
            field("t3_i8", '<', FormatCode::I8),
            field("t4_i32", '<', FormatCode::I32),
            field("t5_i8", '<', FormatCode::I8),
            field("t6_i64", '<', FormatCode::I64),
            field("t7_u8", '<', FormatCode::U8),
            field("t8_u16", '<', FormatCode::U16),
            field("t9_u32", '<', FormatCode::U32),
            field("t10_i8", '<', FormatCode::I8),
            field("t11_u32", '<', FormatCode::U32),
            field("t12_i8", '<', FormatCode::I8),
            field("t13_u64", '<', FormatCode::U64),
            Box::new(builders::static_field("t14_tail", 3usize).unwrap()),
        ],
    )
    .unwrap()
}

/// A one-byte `BitStruct`: a 3-bit count, a `Flag`, and 4 bits of padding.
/// The dynamic-API equivalent of `BitStruct("flags", BitField("count", 3),
/// Flag("urgent"), Padding(4))`.
pub fn flags_byte() -> byteform::Buffered {
    let children: Vec<Box<dyn Construct>> = vec![
        Box::new(builders::bit_field("count", 3).unwrap()),
        Box::new(builders::flag("urgent").unwrap()),
        Box::new(builders::bit_padding(4)),
    ];
    builders::bit_struct("flags", 8, children).unwrap()
}

/// A tiny length-prefixed record: a `u8` magic guarded by `Const`, a status
/// byte translated through `Mapping`, and a length-prefixed payload.
pub fn record() -> Struct {
    let magic = builders::const_(
        builders::format_field("magic", '<', FormatCode::U8).unwrap(),
        Value::UInt(0xAB),
    );
    let status = builders::mapping(
        builders::format_field("status", '<', FormatCode::U8).unwrap(),
        vec![(Value::UInt(0), Value::Str("ok".into())), (Value::UInt(1), Value::Str("error".into()))],
        vec![(Value::Str("ok".into()), Value::UInt(0)), (Value::Str("error".into()), Value::UInt(1))],
        byteform::MappingDefault::None,
        byteform::MappingDefault::None,
    );
    let children: Vec<Box<dyn Construct>> = vec![
        Box::new(magic),
        Box::new(status),
        field("len", '<', FormatCode::U8),
        Box::new(builders::static_field("payload", byteform::Length::from_context_key("len")).unwrap()),
    ];
    builders::structure("record", children).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turtle_roundtrips() {
        let t = turtle();
        let mut obj = byteform::Container::new();
        obj.set("t0_i8", Value::Int(100));
        obj.set("t1_i16", Value::Int(-32000));
        obj.set("t2_i32", Value::Int(-200_000_000));
        obj.set("t3_i8", Value::Int(127));
        obj.set("t4_i32", Value::Int(-1_000_000_000));
        obj.set("t5_i8", Value::Int(100));
        obj.set("t6_i64", Value::Int(10_000_000_000));
        obj.set("t7_u8", Value::UInt(128));
        obj.set("t8_u16", Value::UInt(32000));
        obj.set("t9_u32", Value::UInt(400_000_000));
        obj.set("t10_i8", Value::Int(3));
        obj.set("t11_u32", Value::UInt(300_000_000));
        obj.set("t12_i8", Value::Int(4));
        obj.set("t13_u64", Value::UInt(100_000_000_000));
        obj.set("t14_tail", Value::Bytes(vec![1, 2, 3]));

        let value = Value::Container(obj);
        let built = t.build(&value).unwrap();
        let parsed = t.parse(&built).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn flags_byte_parses_bit_fields() {
        let f = flags_byte();
        let parsed = f.parse(&[0b101_1_0000]).unwrap();
        let obj = parsed.as_container().unwrap();
        assert_eq!(obj.get("count"), Some(&Value::UInt(5)));
        assert_eq!(obj.get("urgent"), Some(&Value::Bool(true)));
    }

    #[test]
    fn record_parses_length_prefixed_payload() {
        let r = record();
        let bytes = [0xAB, 0x01, 0x02, 0xff, 0x11];
        let parsed = r.parse(&bytes).unwrap();
        let obj = parsed.as_container().unwrap();
        assert_eq!(obj.get("status"), Some(&Value::Str("error".into())));
        assert_eq!(obj.get("payload"), Some(&Value::Bytes(vec![0xff, 0x11])));
    }

    #[test]
    fn record_rejects_wrong_magic() {
        let r = record();
        assert!(r.parse(&[0x00, 0x00, 0x00]).is_err());
    }
}
