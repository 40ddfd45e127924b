#![allow(dead_code)]

/// Builds a plain single-question A/IN query.
pub fn build_a_query(id: u16, domain: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&[
        0x01, 0x00, // flags: RD set
        0x00, 0x01, // QDCOUNT = 1
        0x00, 0x00, // ANCOUNT = 0
        0x00, 0x00, // NSCOUNT = 0
        0x00, 0x00, // ARCOUNT = 0
    ]);
    buf.extend_from_slice(&encode_name(domain));
    buf.extend_from_slice(&[0x00, 0x01]); // QTYPE = A
    buf.extend_from_slice(&[0x00, 0x01]); // QCLASS = IN
    buf
}

pub fn encode_name(domain: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00); // root label
    buf
}

/// Expected question section length: labels, terminator, QTYPE, QCLASS.
pub fn question_len(domain: &str) -> usize {
    encode_name(domain).len() + 4
}

pub fn answer_section(response: &[u8]) -> &[u8] {
    &response[response.len() - 16..]
}

pub fn rdata(response: &[u8]) -> [u8; 4] {
    let answer = answer_section(response);
    [answer[12], answer[13], answer[14], answer[15]]
}

pub fn u16_at(buf: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([buf[at], buf[at + 1]])
}
