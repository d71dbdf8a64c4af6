/// Uncompressed wire form of a dotted name.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// A complete NOERROR response to `example.com.` whose answers all carry
/// `type_code` and are owned by the question name.
pub fn encode_response(type_code: u16, answers: &[&[u8]]) -> Vec<u8> {
    let mut out = vec![0xab, 0xcd, 0x81, 0x80, 0x00, 0x01];
    out.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    out.extend_from_slice(&encode_name("example.com."));
    out.extend_from_slice(&type_code.to_be_bytes());
    out.extend_from_slice(&[0x00, 0x01]);

    for rdata in answers {
        out.extend_from_slice(&[0xc0, 0x0c]);
        out.extend_from_slice(&type_code.to_be_bytes());
        out.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x0e, 0x10]);
        out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        out.extend_from_slice(rdata);
    }
    out
}
