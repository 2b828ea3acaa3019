//! Reply header validation.
//!
//! The protocol has no correlation ids: a reply is matched to its request
//! by echoing the request bytes verbatim. Extended replies then carry the
//! ack sentinel, the protocol version and, depending on the command, a
//! result flag and a reply kind.

use bytes::Bytes;

use crate::constants::*;
use crate::cursor::ResponseCursor;
use crate::error::ProtoError;
use crate::request::Query;

/// Validate the first reply datagram for `query` and return a cursor
/// positioned at the first payload field.
///
/// For client info queries this is the manifest datagram listing the
/// client numbers whose statistics follow.
pub fn validate(datagram: Bytes, query: &Query) -> Result<ResponseCursor, ProtoError> {
    validate_with_kind(datagram, query, EXT_CLIENT_INFO_RESP_IDS)
}

/// Validate one follow-up datagram of a client info query, which carries a
/// single client's statistics.
pub fn validate_client_stats(datagram: Bytes, query: &Query) -> Result<ResponseCursor, ProtoError> {
    validate_with_kind(datagram, query, EXT_CLIENT_INFO_RESP_STATS)
}

fn validate_with_kind(
    datagram: Bytes,
    query: &Query,
    client_reply_kind: i32,
) -> Result<ResponseCursor, ProtoError> {
    let request = query.request();
    let min_len = request.len() + query.header_len();
    if datagram.len() < min_len {
        return Err(ProtoError::truncated(min_len, datagram.len()));
    }

    let mut cursor = ResponseCursor::new(datagram);
    for (offset, &expected) in request.iter().enumerate() {
        let got = cursor.read_byte()?;
        if got != expected {
            return Err(ProtoError::ResponseMismatch {
                offset,
                expected,
                got,
            });
        }
    }

    if !query.is_extended() {
        return Ok(cursor);
    }

    let ack = cursor.read_int()?;
    if ack != EXT_ACK {
        return Err(ProtoError::InvalidResponse(format!(
            "expected ack {EXT_ACK}, got {ack}"
        )));
    }

    let version = cursor.read_int()?;
    if version != EXT_VERSION {
        return Err(ProtoError::UnsupportedVersion {
            expected: EXT_VERSION,
            got: version,
        });
    }

    match query {
        Query::TeamScores => check_result(&mut cursor, ProtoError::NotTeamMode)?,
        Query::ClientInfo(_) => {
            check_result(&mut cursor, ProtoError::NoSuchClient)?;
            let kind = cursor.read_int()?;
            if kind != client_reply_kind {
                return Err(ProtoError::InvalidResponse(format!(
                    "expected client info reply kind {client_reply_kind}, got {kind}"
                )));
            }
        }
        Query::Uptime | Query::ServerMod | Query::BasicInfo => {}
    }

    Ok(cursor)
}

fn check_result(cursor: &mut ResponseCursor, on_error: ProtoError) -> Result<(), ProtoError> {
    match cursor.read_int()? {
        EXT_NO_ERROR => Ok(()),
        EXT_ERROR => Err(on_error),
        other => Err(ProtoError::InvalidResponse(format!(
            "unexpected result flag {other}"
        ))),
    }
}
