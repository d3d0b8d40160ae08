//! Single-shot decoding

#![no_main]

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
  let _rslt = duo::web_socket::decode(data, u16::MAX.into());
});
