use pocket_dns_domain::dns_header::HEADER_LEN;
use pocket_dns_domain::DnsHeader;
use std::net::Ipv4Addr;

use super::query_decoder::QTYPE_QCLASS_LEN;

/// QR + RD + RA, OPCODE 0, RCODE NOERROR.
///
/// Written over whatever flags the query carried: the opcode and RD bit of the
/// request are not echoed.
pub const RESPONSE_FLAGS: u16 = 0x8180;

pub const ANSWER_TTL: u32 = 300;

/// Pointer (2) + TYPE (2) + CLASS (2) + TTL (4) + RDLENGTH (2) + RDATA (4).
pub const ANSWER_LEN: usize = 16;

/// Address written for names the zone does not contain.
///
/// A miss still produces a NOERROR answer with this address instead of an
/// NXDOMAIN response. Changing that behaviour means changing [`answer_address`].
pub const UNRESOLVED_ADDRESS: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

const TYPE_A: u16 = 1;
const CLASS_IN: u16 = 1;
const A_RDLENGTH: u16 = 4;

/// Compression pointer to the question name.
///
/// The question name starts right after the fixed header, so this is only
/// valid while a response carries exactly one question at offset 12.
const QUESTION_NAME_POINTER: u16 = 0xC000 | HEADER_LEN as u16;

const _: () = assert!(QUESTION_NAME_POINTER == 0xC00C);

/// Resolves the lookup result to the address put in RDATA.
pub fn answer_address(address: Option<Ipv4Addr>) -> Ipv4Addr {
    address.unwrap_or(UNRESOLVED_ADDRESS)
}

/// Builds the reply to a single-question A query.
///
/// `question` must be the query's question section exactly as received
/// (name, terminator, QTYPE, QCLASS). The output is always
/// `12 + question.len() + 16` bytes: header, echoed question, one A answer.
pub fn encode(query_header: &DnsHeader, question: &[u8], address: Option<Ipv4Addr>) -> Vec<u8> {
    debug_assert!(
        question.len() > QTYPE_QCLASS_LEN && question[question.len() - QTYPE_QCLASS_LEN - 1] == 0,
        "question must be one terminated name followed by QTYPE/QCLASS"
    );

    let header = DnsHeader {
        id: query_header.id,
        flags: RESPONSE_FLAGS,
        qdcount: 1,
        ancount: 1,
        nscount: 0,
        arcount: 0,
    };

    let mut buf = Vec::with_capacity(HEADER_LEN + question.len() + ANSWER_LEN);
    buf.extend_from_slice(&header.to_bytes());
    buf.extend_from_slice(question);

    buf.extend_from_slice(&QUESTION_NAME_POINTER.to_be_bytes());
    buf.extend_from_slice(&TYPE_A.to_be_bytes());
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());
    buf.extend_from_slice(&ANSWER_TTL.to_be_bytes());
    buf.extend_from_slice(&A_RDLENGTH.to_be_bytes());
    buf.extend_from_slice(&answer_address(address).octets());

    buf
}
