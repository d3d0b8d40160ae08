/// Protocol violations. Receiving any of these from a client terminates its connection.
#[derive(Debug)]
pub enum WebSocketError {
  /// The length field or the masking key is cut short.
  InvalidFrameHeaderBounds,
  /// The lower 4 bits of the first byte are not a known opcode.
  InvalidOpCodeByte {
    /// Offending value
    provided: u8,
  },
  /// The declared payload length exceeds the number of available bytes.
  InvalidPayloadBounds,
  /// Server received a frame without a mask.
  MissingFrameMask,
  /// Reserved bits are not zero.
  ReservedBitsAreNotZero,
  /// Received control frame wasn't supposed to be fragmented.
  UnexpectedFragmentedControlFrame,
  /// Control frames have a maximum allowed size.
  VeryLargeControlFrame,
  /// Frame payload exceeds the defined threshold.
  VeryLargePayload,
}
