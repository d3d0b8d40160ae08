//! Incremental decoding. The first byte decides the size of the chunks fed to the decoder.

#![no_main]

use duo::web_socket::FrameDecoder;

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
  let [first, rest @ ..] = data else {
    return;
  };
  let mut decoder = FrameDecoder::new(u16::MAX.into());
  for chunk in rest.chunks(usize::from(*first).max(1)) {
    decoder.extend(chunk);
    loop {
      match decoder.next_message() {
        Ok(Some(_)) => {}
        Ok(None) => break,
        Err(_) => return,
      }
    }
  }
});
