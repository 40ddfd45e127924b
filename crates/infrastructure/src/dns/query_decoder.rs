use pocket_dns_domain::dns_header::HEADER_LEN;
use pocket_dns_domain::{DecodeError, DnsHeader};

/// QTYPE (2) + QCLASS (2) following the question name.
pub const QTYPE_QCLASS_LEN: usize = 4;

/// Both top bits set marks a compression pointer rather than a label length.
const POINTER_MASK: u8 = 0xC0;

/// Result of decoding a raw query datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuery {
    pub header: DnsHeader,
    /// Labels joined with `.` (e.g. `"example.com"`, no trailing dot).
    pub domain: String,
    /// On-wire size of the question: name, terminator, QTYPE and QCLASS.
    pub question_len: usize,
}

impl DecodedQuery {
    /// Byte offset in the original payload where the question section ends.
    pub fn question_end(&self) -> usize {
        HEADER_LEN + self.question_len
    }

    /// The question section exactly as it arrived, for echoing back.
    ///
    /// `payload` must be the buffer this query was decoded from.
    pub fn question_bytes<'a>(&self, payload: &'a [u8]) -> &'a [u8] {
        &payload[HEADER_LEN..self.question_end()]
    }
}

/// Decodes the header and the single question name of a query.
///
/// * Fewer than 12 bytes → [`DecodeError::TooShort`]
/// * Name not terminated inside the buffer, a label with the pointer bits set,
///   or QTYPE/QCLASS cut off → [`DecodeError::MalformedQuery`]
///
/// Counts other than the header itself are not checked; the question is read
/// from offset 12 regardless of QDCOUNT.
pub fn decode(payload: &[u8]) -> Result<DecodedQuery, DecodeError> {
    let header = DnsHeader::read(payload).ok_or(DecodeError::TooShort)?;
    let (domain, name_len) = read_name(&payload[HEADER_LEN..])?;

    let question_len = name_len + QTYPE_QCLASS_LEN;
    if HEADER_LEN + question_len > payload.len() {
        return Err(DecodeError::MalformedQuery);
    }

    Ok(DecodedQuery {
        header,
        domain,
        question_len,
    })
}

/// Returns the dotted name and the number of bytes it occupies, terminator
/// included.
fn read_name(buf: &[u8]) -> Result<(String, usize), DecodeError> {
    let mut domain = String::new();
    let mut pos = 0;

    loop {
        let len_byte = *buf.get(pos).ok_or(DecodeError::MalformedQuery)?;
        pos += 1;

        if len_byte == 0 {
            return Ok((domain, pos));
        }
        if len_byte & POINTER_MASK == POINTER_MASK {
            return Err(DecodeError::MalformedQuery);
        }

        let label_len = len_byte as usize;

        let label = buf
            .get(pos..pos + label_len)
            .ok_or(DecodeError::MalformedQuery)?;
        if pos > 1 {
            domain.push('.');
        }
        domain.push_str(&String::from_utf8_lossy(label));
        pos += label_len;
    }
}
