//! Server side of a computer communications protocol, providing full-duplex communication
//! channels over a single TCP connection.
//!
//! Only the subset needed by the relay is supported: the opening handshake, unfragmented text
//! frames and the close/ping/pong control frames.
//!
//! <https://tools.ietf.org/html/rfc6455>

mod frame;
mod frame_decoder;
pub mod handshake;
mod message;
mod op_code;
mod read_frame_info;
#[cfg(test)]
mod tests;
mod unmask;
mod web_socket_error;

pub use frame::{encode_text, Frame};
pub use frame_decoder::{decode, FrameDecoder};
pub use message::Message;
pub use op_code::OpCode;
pub use read_frame_info::ReadFrameInfo;
pub use unmask::unmask;
pub use web_socket_error::WebSocketError;

const FIN_MASK: u8 = 0b1000_0000;
const MASK_MASK: u8 = 0b1000_0000;
const MAX_CONTROL_PAYLOAD_LEN: usize = 125;
const MAX_HEADER_LEN: usize = 14;
const OP_CODE_MASK: u8 = 0b0000_1111;
const PAYLOAD_MASK: u8 = 0b0111_1111;
const RSV_MASK: u8 = 0b0111_0000;

/// Reserved application-level command that asks for a new partner. Never relayed as chat content.
pub const NEXT_COMMAND: &str = "/next";
