// test-only module included via protocol/mod.rs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::config::{DecodeConfig, DecodePolicy};
use crate::core::codec::Marshal;
use crate::core::header::Header;
use crate::core::packet_type::PacketType;
use crate::error::ProtocolError;
use crate::protocol::dispatcher::Dispatcher;

fn goodbye_packet(version: u8) -> Vec<u8> {
    let header = Header {
        version,
        padding: false,
        report_count: 1,
        packet_type: PacketType::Goodbye.into(),
        length: 1,
    };
    let mut raw = header.marshal().expect("valid header");
    raw.extend_from_slice(&[0x90, 0x2F, 0x9E, 0x2E]);
    raw
}

#[test]
fn test_dispatch_routes_body_by_type() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(PacketType::Goodbye, |header, body| {
            assert_eq!(header.report_count, 1);
            Ok(body.to_vec())
        })
        .unwrap();

    let body = dispatcher.dispatch(&goodbye_packet(2)).unwrap();
    assert_eq!(body, vec![0x90, 0x2F, 0x9E, 0x2E]);
}

#[test]
fn test_dispatch_unknown_type() {
    let dispatcher: Dispatcher<()> = Dispatcher::new();
    let err = dispatcher.dispatch(&goodbye_packet(2)).unwrap_err();
    assert_eq!(err, ProtocolError::UnknownPacketType(203));
}

#[test]
fn test_dispatch_short_packet() {
    let dispatcher: Dispatcher<()> = Dispatcher::new();
    dispatcher
        .register(PacketType::SenderReport, |_, _| Ok(()))
        .unwrap();
    assert_eq!(
        dispatcher.dispatch(&[0x80, 0xC8, 0x00]),
        Err(ProtocolError::HeaderTooShort)
    );
}

#[test]
fn test_permissive_policy_accepts_any_version() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(PacketType::Goodbye, |header, _| Ok(header.version))
        .unwrap();
    assert_eq!(dispatcher.dispatch(&goodbye_packet(1)).unwrap(), 1);
}

#[test]
fn test_strict_policy_rejects_other_versions() {
    let dispatcher = Dispatcher::with_config(DecodeConfig {
        policy: DecodePolicy::Strict,
        expected_version: 2,
    });
    dispatcher
        .register(PacketType::Goodbye, |header, _| Ok(header.version))
        .unwrap();

    assert_eq!(dispatcher.dispatch(&goodbye_packet(2)).unwrap(), 2);
    assert_eq!(
        dispatcher.dispatch(&goodbye_packet(3)),
        Err(ProtocolError::UnsupportedVersion(3))
    );
}

#[test]
fn test_register_raw_and_replace() {
    let dispatcher = Dispatcher::new();
    dispatcher.register_raw(205, |_, _| Ok("first")).unwrap();
    dispatcher.register_raw(205, |_, _| Ok("second")).unwrap();
    assert_eq!(dispatcher.is_registered(205), Ok(true));
    assert_eq!(dispatcher.is_registered(206), Ok(false));

    let raw = [0x80, 205, 0x00, 0x00];
    assert_eq!(dispatcher.dispatch(&raw).unwrap(), "second");
}

#[test]
fn test_handler_errors_propagate() {
    let dispatcher: Dispatcher<()> = Dispatcher::new();
    dispatcher
        .register(PacketType::ApplicationDefined, |_, _| {
            Err(ProtocolError::Custom("bad body".into()))
        })
        .unwrap();

    let raw = [0x80, 204, 0x00, 0x00];
    match dispatcher.dispatch(&raw) {
        Err(ProtocolError::Custom(msg)) => assert_eq!(msg, "bad body"),
        other => panic!("Expected handler error, got {other:?}"),
    }
}
