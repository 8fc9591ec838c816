fn le32(v: u32) -> [u8; 4] {
    v.to_le_bytes()
}
fn le16(v: u16) -> [u8; 2] {
    v.to_le_bytes()
}

fn synthetic_pcap() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend(le32(0xa1b2_c3d4)); // magic
    buf.extend(le16(2)); // version_major
    buf.extend(le16(4)); // version_minor
    buf.extend(le32(0)); // ts_correction
    buf.extend(le32(0)); // ts_accuracy
    buf.extend(le32(65535)); // snaplen
    buf.extend(le32(1)); // datalink (ethernet)

    for (ts_sec, payload) in [(1_600_000_000u32, vec![0xde, 0xad]), (1_600_000_001, vec![0xbe, 0xef, 0x00])] {
        buf.extend(le32(ts_sec));
        buf.extend(le32(0)); // ts_usec
        buf.extend(le32(payload.len() as u32)); // incl_len
        buf.extend(le32(payload.len() as u32)); // orig_len
        buf.extend(payload);
    }
    buf
}

#[test]
fn read_file() -> std::io::Result<()> {
    let data = synthetic_pcap();
    let (head, reader) = demos_pcap::read(&data[..])?;
    assert_eq!(head.magic, 0xa1b2_c3d4);
    let packets: Vec<_> = reader.collect();
    assert_eq!(packets.len(), 2);
    assert_eq!(packets[0].data, vec![0xde, 0xad]);
    assert_eq!(packets[1].data, vec![0xbe, 0xef, 0x00]);
    Ok(())
}

#[test]
fn rejects_bad_magic() {
    let mut data = synthetic_pcap();
    data[0] = 0;
    assert!(demos_pcap::read(&data[..]).is_err());
}
