//! Integration tests for the delegating error cause codecs

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use control_wire::cause::{
    InvalidStreamIdentifier, ProtocolViolation, UnrecognizedChunkType, UserInitiatedAbort,
};
use control_wire::{
    build_error_cause, ErrorCause, ErrorCauseCode, ErrorCauseHeader, Marshal, ProtocolError,
    Unmarshal,
};

#[test]
fn test_unrecognized_chunk_type_forwards_bytes() {
    // An unknown chunk type 0xF0 with flags 0 and length 4
    let chunk = vec![0xF0, 0x00, 0x00, 0x04];
    let cause = UnrecognizedChunkType::new(chunk.clone());
    let header = ErrorCauseHeader::new(ErrorCauseCode::UNRECOGNIZED_CHUNK_TYPE, chunk);

    assert_eq!(cause.marshal().unwrap(), header.marshal().unwrap());
}

#[test]
fn test_unrecognized_chunk_type_forwards_errors() {
    let mut cause = UnrecognizedChunkType::default();
    let mut header = ErrorCauseHeader::default();

    for raw in [&[][..], &[0x00, 0x06, 0x00][..], &[0x00, 0x06, 0x00, 0x09, 0x01][..]] {
        assert_eq!(cause.unmarshal(raw), header.unmarshal(raw));
    }
}

#[test]
fn test_empty_value_is_header_only() {
    let cause = ProtocolViolation::default();
    assert_eq!(cause.marshal().unwrap(), vec![0x00, 0x0D, 0x00, 0x04]);
}

#[test]
fn test_user_initiated_abort_reason() {
    let cause = UserInitiatedAbort::new(&b"shutting down"[..]);
    let raw = cause.marshal().unwrap();
    assert_eq!(raw.len(), 4 + 13);

    match build_error_cause(&raw).unwrap() {
        ErrorCause::UserInitiatedAbort(decoded) => {
            assert_eq!(decoded.raw.as_ref(), b"shutting down");
            assert_eq!(decoded, cause);
        }
        other => panic!("Expected UserInitiatedAbort, got {other:?}"),
    }
}

#[test]
fn test_invalid_stream_identifier_roundtrip() {
    let cause = InvalidStreamIdentifier::new(42);
    let raw = cause.marshal().unwrap();

    match build_error_cause(&raw).unwrap() {
        ErrorCause::InvalidStreamIdentifier(decoded) => {
            assert_eq!(decoded.stream_identifier(), 42);
            assert_eq!(decoded.marshal().unwrap(), raw);
            assert_eq!(decoded, cause);
        }
        other => panic!("Expected InvalidStreamIdentifier, got {other:?}"),
    }
}

#[test]
fn test_constructed_cause_length_matches_wire() {
    let causes = [
        ErrorCause::InvalidStreamIdentifier(InvalidStreamIdentifier::new(42)),
        ErrorCause::UnrecognizedChunkType(UnrecognizedChunkType::new(vec![
            0xF0, 0x00, 0x00, 0x04,
        ])),
        ErrorCause::ProtocolViolation(ProtocolViolation::default()),
    ];
    for cause in causes {
        assert_eq!(cause.header().length(), cause.marshal().unwrap().len());
    }
}

#[test]
fn test_updated_stream_identifier_roundtrip() {
    let mut cause = InvalidStreamIdentifier::new(42);
    cause.set_stream_identifier(7);

    match build_error_cause(&cause.marshal().unwrap()).unwrap() {
        ErrorCause::InvalidStreamIdentifier(decoded) => {
            assert_eq!(decoded.stream_identifier(), 7);
            assert_eq!(decoded.header().raw, cause.header().raw);
        }
        other => panic!("Expected InvalidStreamIdentifier, got {other:?}"),
    }
}

#[test]
fn test_causes_in_sequence() {
    let first = UnrecognizedChunkType::new(vec![0xF0, 0x00, 0x00, 0x04])
        .marshal()
        .unwrap();
    let second = InvalidStreamIdentifier::new(7);

    let mut raw = first.clone();
    raw.extend_from_slice(&second.marshal().unwrap());

    let cause = build_error_cause(&raw).unwrap();
    assert_eq!(cause.code(), ErrorCauseCode::UNRECOGNIZED_CHUNK_TYPE);

    let offset = cause.header().length();
    assert_eq!(offset, first.len());
    let next = build_error_cause(&raw[offset..]).unwrap();
    assert_eq!(next.code(), ErrorCauseCode::INVALID_STREAM_IDENTIFIER);
    assert_eq!(offset + next.header().length(), raw.len());
    assert_eq!(next, ErrorCause::InvalidStreamIdentifier(second));
}

#[test]
fn test_length_field_past_buffer() {
    let err = build_error_cause(&[0x00, 0x0D, 0x00, 0x10, 0x01, 0x02]).unwrap_err();
    assert_eq!(
        err,
        ProtocolError::InvalidCauseLength {
            length: 16,
            available: 6
        }
    );
}

#[test]
fn test_oversized_value_rejected() {
    let cause = ProtocolViolation::new(vec![0u8; u16::MAX as usize]);
    assert!(matches!(
        cause.marshal(),
        Err(ProtocolError::CauseTooLarge(_))
    ));
}

#[test]
fn test_cause_code_display() {
    let cause = build_error_cause(&[0x00, 0x0C, 0x00, 0x04]).unwrap();
    assert_eq!(cause.code().to_string(), "User Initiated Abort");
}
