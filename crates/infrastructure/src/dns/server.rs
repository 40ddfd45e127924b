use super::hex_dump::hex_dump;
use super::query_decoder;
use super::wire_response::{self, ANSWER_LEN};
use pocket_dns_application::use_cases::HandleDnsQueryUseCase;
use pocket_dns_domain::dns_header::HEADER_LEN;
use pocket_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, enabled, trace, warn, Level};

/// Turns one query datagram into one reply datagram.
///
/// Holds no per-request state, so a single handler is shared by every
/// transport worker.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub fn use_case(&self) -> &HandleDnsQueryUseCase {
        &self.use_case
    }

    /// Decode, look up, encode.
    ///
    /// An `Err` means the datagram is not a usable query; the caller drops it
    /// without replying.
    pub fn handle_datagram(&self, payload: &[u8]) -> Result<Vec<u8>, DomainError> {
        let query = match query_decoder::decode(payload) {
            Ok(query) => query,
            Err(e) => {
                self.use_case.record_dropped();
                warn!(bytes = payload.len(), error = %e, "Received invalid DNS packet");
                return Err(e.into());
            }
        };

        debug!(
            bytes = payload.len(),
            id = query.header.id,
            domain = %query.domain,
            "DNS query received"
        );

        let address = self.use_case.execute(&query.domain);
        let response =
            wire_response::encode(&query.header, query.question_bytes(payload), address);

        log_response(&response, query.question_len);
        Ok(response)
    }
}

fn log_response(response: &[u8], question_len: usize) {
    debug!(
        header = HEADER_LEN,
        question = question_len,
        answer = ANSWER_LEN,
        total = response.len(),
        "Response size breakdown"
    );

    if enabled!(Level::TRACE) {
        let answer_start = HEADER_LEN + question_len;
        trace!(header = %hex_dump(&response[..HEADER_LEN]), "Response hex dump");
        trace!(question = %hex_dump(&response[HEADER_LEN..answer_start]), "Response hex dump");
        trace!(answer = %hex_dump(&response[answer_start..]), "Response hex dump");
    }
}
