use crate::web_socket::{
  decode, encode_text, Frame, FrameDecoder, Message, OpCode, ReadFrameInfo, WebSocketError,
};

const MASK: [u8; 4] = [0x12, 0x34, 0x56, 0x78];
const MAX: usize = 1024 * 1024;

fn client_frame(op_code: OpCode, payload: &[u8]) -> Vec<u8> {
  Frame::new_fin(op_code, payload).to_masked_bytes(MASK)
}

fn assert_ws_err(
  rslt: crate::Result<impl core::fmt::Debug>,
  expected: fn(&WebSocketError) -> bool,
) {
  match rslt {
    Err(crate::Error::WebSocketError(ref err)) if expected(err) => {}
    other => panic!("unexpected result: {other:?}"),
  }
}

#[test]
fn boundary_lengths_survive_encoding_and_decoding() {
  for len in [0, 1, 125, 126, 65535, 65536, 70000] {
    let text = "x".repeat(len);
    let server_bytes = encode_text(&text);
    // Re-mask what the server produced, as a client would have sent it.
    let header_len = server_bytes.len() - len;
    let mut client_bytes = server_bytes[..header_len].to_vec();
    client_bytes[1] |= 0b1000_0000;
    client_bytes.extend_from_slice(&MASK);
    let mut payload = server_bytes[header_len..].to_vec();
    crate::web_socket::unmask(&mut payload, MASK);
    client_bytes.extend_from_slice(&payload);
    assert_eq!(decode(&client_bytes, MAX).unwrap(), Message::Text(text));
  }
}

#[test]
fn header_of_a_masked_control_frame() {
  let bytes = client_frame(OpCode::Ping, b"abc");
  assert!(ReadFrameInfo::from_bytes(&bytes[..5], MAX).unwrap().is_none());
  let info = ReadFrameInfo::from_bytes(&bytes[..6], MAX).unwrap().unwrap();
  assert!(info.fin());
  assert_eq!(info.op_code(), OpCode::Ping);
  assert_eq!(info.header_len(), 6);
  assert_eq!(info.payload_len(), 3);
  assert_eq!(info.frame_len(), 9);
}

#[test]
fn multi_byte_text_is_preserved() {
  let text = "olá, 世界 🦀";
  let bytes = client_frame(OpCode::Text, text.as_bytes());
  assert_eq!(decode(&bytes, MAX).unwrap().text(), Some(text));
}

#[test]
fn close_frame_yields_close_signal() {
  let bytes = client_frame(OpCode::Close, &[0x03, 0xE8]);
  assert_eq!(decode(&bytes, MAX).unwrap(), Message::Close(vec![0x03, 0xE8]));
}

#[test]
fn ping_and_pong_frames() {
  let ping = client_frame(OpCode::Ping, b"are you there?");
  assert_eq!(decode(&ping, MAX).unwrap(), Message::Ping(b"are you there?".to_vec()));
  let pong = client_frame(OpCode::Pong, b"");
  assert_eq!(decode(&pong, MAX).unwrap(), Message::Pong);
}

#[test]
fn binary_frames_are_read_as_text() {
  let bytes = client_frame(OpCode::Binary, b"plain");
  assert_eq!(decode(&bytes, MAX).unwrap(), Message::Text("plain".into()));
}

#[test]
fn invalid_utf8_is_a_protocol_violation() {
  let bytes = client_frame(OpCode::Text, &[0xFF, 0xFE]);
  let err = decode(&bytes, MAX).unwrap_err();
  assert!(matches!(err, crate::Error::Utf8Error(_)));
  assert!(err.is_protocol_violation());
}

#[test]
fn unmasked_client_frame_is_rejected() {
  let bytes = encode_text("hello");
  assert_ws_err(decode(&bytes, MAX), |err| matches!(err, WebSocketError::MissingFrameMask));
}

#[test]
fn declared_length_beyond_available_bytes_is_rejected() {
  let mut bytes = client_frame(OpCode::Text, b"hello");
  let _ = bytes.pop();
  assert_ws_err(decode(&bytes, MAX), |err| matches!(err, WebSocketError::InvalidPayloadBounds));

  // 127 declares a gigantic payload while only a handful of bytes exist.
  let bytes = [0x81, 0xFF, 0, 0, 0, 0, 0, 0, 0, 5, 1, 2, 3, 4, 9];
  assert_ws_err(decode(&bytes, MAX), |err| matches!(err, WebSocketError::InvalidPayloadBounds));
}

#[test]
fn truncated_header_is_rejected() {
  for bytes in [&[0x81][..], &[0x81, 0xFE, 0x00], &[0x81, 0x85, 1, 2]] {
    assert_ws_err(decode(bytes, MAX), |err| {
      matches!(err, WebSocketError::InvalidFrameHeaderBounds)
    });
  }
}

#[test]
fn oversized_payload_is_rejected() {
  let bytes = client_frame(OpCode::Text, &[b'a'; 64]);
  assert_ws_err(decode(&bytes, 63), |err| matches!(err, WebSocketError::VeryLargePayload));
  let bytes = [0x81, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 1, 2, 3, 4];
  assert_ws_err(decode(&bytes, MAX), |err| matches!(err, WebSocketError::VeryLargePayload));
}

#[test]
fn malformed_control_frames_are_rejected() {
  let mut fragmented_ping = client_frame(OpCode::Ping, b"a");
  fragmented_ping[0] &= 0b0111_1111;
  assert_ws_err(decode(&fragmented_ping, MAX), |err| {
    matches!(err, WebSocketError::UnexpectedFragmentedControlFrame)
  });
  let large_close = [0x88, 0xFE, 0, 126, 1, 2, 3, 4];
  assert_ws_err(decode(&large_close, MAX), |err| {
    matches!(err, WebSocketError::VeryLargeControlFrame)
  });
}

#[test]
fn reserved_bits_and_op_codes_are_rejected() {
  let mut bytes = client_frame(OpCode::Text, b"a");
  bytes[0] |= 0b0100_0000;
  assert_ws_err(decode(&bytes, MAX), |err| matches!(err, WebSocketError::ReservedBitsAreNotZero));
  let bytes = [0x83, 0x80, 1, 2, 3, 4];
  assert_ws_err(decode(&bytes, MAX), |err| {
    matches!(err, WebSocketError::InvalidOpCodeByte { provided: 3 })
  });
}

#[test]
fn decoder_waits_for_whole_frames() {
  let bytes = client_frame(OpCode::Text, "a".repeat(300).as_bytes());
  let mut decoder = FrameDecoder::new(MAX);
  for byte in &bytes[..bytes.len() - 1] {
    decoder.extend(&[*byte]);
    assert_eq!(decoder.next_message().unwrap(), None);
  }
  decoder.extend(&bytes[bytes.len() - 1..]);
  assert_eq!(decoder.next_message().unwrap(), Some(Message::Text("a".repeat(300))));
  assert_eq!(decoder.buffered(), 0);
}

#[test]
fn decoder_drains_packed_frames_in_order() {
  let mut bytes = client_frame(OpCode::Text, b"first");
  bytes.extend(client_frame(OpCode::Text, b"second"));
  bytes.extend(client_frame(OpCode::Close, b""));
  bytes.extend(client_frame(OpCode::Text, b"thi"));
  let _ = bytes.pop();
  let mut decoder = FrameDecoder::new(MAX);
  decoder.extend(&bytes);
  assert_eq!(decoder.next_message().unwrap(), Some(Message::Text("first".into())));
  assert_eq!(decoder.next_message().unwrap(), Some(Message::Text("second".into())));
  assert_eq!(decoder.next_message().unwrap(), Some(Message::Close(Vec::new())));
  assert_eq!(decoder.next_message().unwrap(), None);
  assert_eq!(decoder.buffered(), 2 + 4 + 2);
}

#[test]
fn decoder_rejects_oversized_frames_before_their_payload_arrives() {
  let mut decoder = FrameDecoder::new(16);
  decoder.extend(&[0x81, 0xFE, 0x01, 0x00]);
  assert_ws_err(decoder.next_message(), |err| matches!(err, WebSocketError::VeryLargePayload));
}

#[cfg(feature = "_proptest")]
#[test_strategy::proptest]
fn arbitrary_text_round_trips(text: String) {
  let bytes = client_frame(OpCode::Text, text.as_bytes());
  proptest::prop_assert_eq!(decode(&bytes, MAX).unwrap(), Message::Text(text));
}
