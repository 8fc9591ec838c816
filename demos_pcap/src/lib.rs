//! A pcap file reader built from `byteform::Struct`s in place of the
//! proc-macro-derived tuple readers this crate used to expand.

use byteform::{builders, Construct, FormatCode, Length, Value};

const PCAP_HEADER_LEN: usize = 24;
const PACKET_HEADER_LEN: usize = 16;

fn u32_field(name: &str) -> Box<dyn Construct> {
    Box::new(builders::format_field(name, '<', FormatCode::U32).unwrap())
}

fn pcap_header() -> byteform::Struct {
    builders::structure(
        "pcap_header",
        vec![
            u32_field("magic"),
            Box::new(builders::format_field("version_major", '<', FormatCode::U16).unwrap()),
            Box::new(builders::format_field("version_minor", '<', FormatCode::U16).unwrap()),
            Box::new(builders::format_field("ts_correction", '<', FormatCode::I32).unwrap()),
            u32_field("ts_accuracy"),
            u32_field("snaplen"),
            u32_field("datalink"),
        ],
    )
    .unwrap()
}

fn packet_header_and_payload() -> byteform::Struct {
    builders::structure(
        "packet",
        vec![
            u32_field("ts_sec"),
            u32_field("ts_usec"),
            u32_field("incl_len"),
            u32_field("orig_len"),
            Box::new(builders::static_field("data", Length::from_context_key("incl_len")).unwrap()),
        ],
    )
    .unwrap()
}

#[derive(Debug)]
pub struct Header {
    pub magic: u32,
    pub version_major: u16,
    pub version_minor: u16,
    pub ts_correction: i32,
    pub ts_accuracy: u32,
    pub snaplen: u32,
    pub datalink: u32,
}

impl Header {
    fn from_container(obj: &byteform::Container) -> std::io::Result<Self> {
        fn invalid(msg: impl std::fmt::Display) -> std::io::Error {
            std::io::Error::new(std::io::ErrorKind::InvalidData, msg.to_string())
        }
        let field = |name: &str| -> std::io::Result<&Value> {
            obj.get(name).ok_or_else(|| invalid(format!("missing {name}")))
        };
        let uint = |name: &str| -> std::io::Result<u64> { field(name)?.as_uint().map_err(invalid) };
        let int = |name: &str| -> std::io::Result<i64> { field(name)?.as_int().map_err(invalid) };

        let magic = uint("magic")? as u32;
        if magic != 0xa1b2_c3d4 {
            return Err(invalid("not a pcap file"));
        }
        Ok(Header {
            magic,
            version_major: uint("version_major")? as u16,
            version_minor: uint("version_minor")? as u16,
            ts_correction: int("ts_correction")? as i32,
            ts_accuracy: uint("ts_accuracy")? as u32,
            snaplen: uint("snaplen")? as u32,
            datalink: uint("datalink")? as u32,
        })
    }
}

#[derive(Debug)]
pub struct Packet {
    pub ts_sec: u32,
    pub ts_usec: u32,
    pub orig_len: u32,
    pub data: Vec<u8>,
}

/// Reads an entire pcap stream into memory and returns the global header
/// plus an iterator over its packet records.
///
/// Unlike the original incremental reader, `byteform::Construct::parse`
/// works over a complete in-memory buffer rather than an open `Read`, so
/// the whole stream is slurped upfront and walked by hand afterwards.
pub fn read<R: std::io::Read>(mut inp: R) -> std::io::Result<(Header, impl Iterator<Item = Packet>)> {
    let mut buf = Vec::new();
    inp.read_to_end(&mut buf)?;

    if buf.len() < PCAP_HEADER_LEN {
        return Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated pcap header"));
    }
    let head_value = pcap_header()
        .parse(&buf[..PCAP_HEADER_LEN])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    let head_obj = head_value
        .as_container()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    let head = Header::from_container(head_obj)?;

    let packet_construct = packet_header_and_payload();
    let mut offset = PCAP_HEADER_LEN;
    let reader = std::iter::from_fn(move || {
        if buf.len() - offset < PACKET_HEADER_LEN {
            return None;
        }
        let value = packet_construct.parse(&buf[offset..]).ok()?;
        let obj = value.as_container().ok()?.clone();
        let incl_len = obj.get("incl_len")?.as_uint().ok()? as usize;
        offset += PACKET_HEADER_LEN + incl_len;
        Some(Packet {
            ts_sec: obj.get("ts_sec")?.as_uint().ok()? as u32,
            ts_usec: obj.get("ts_usec")?.as_uint().ok()? as u32,
            orig_len: obj.get("orig_len")?.as_uint().ok()? as u32,
            data: obj.get("data")?.as_bytes().ok()?.to_vec(),
        })
    });
    Ok((head, reader))
}
