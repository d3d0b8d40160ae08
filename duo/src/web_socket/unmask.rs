/// XORs every byte of `bytes` with `mask[idx % 4]`. Applying the same mask twice restores the
/// original content, so this also masks.
#[inline]
pub fn unmask(bytes: &mut [u8], mask: [u8; 4]) {
  let mask_u32 = u32::from_ne_bytes(mask);
  let mut chunks = bytes.chunks_exact_mut(4);
  for chunk in chunks.by_ref() {
    if let [a, b, c, d] = chunk {
      let [e, f, g, h] = (u32::from_ne_bytes([*a, *b, *c, *d]) ^ mask_u32).to_ne_bytes();
      *a = e;
      *b = f;
      *c = g;
      *d = h;
    }
  }
  // The remainder starts at a multiple of 4 so the mask index restarts at zero.
  for (elem, mask_byte) in chunks.into_remainder().iter_mut().zip(mask) {
    *elem ^= mask_byte;
  }
}


#[cfg(test)]
mod tests {
  use crate::web_socket::unmask;

  #[test]
  fn length_variation_unmask() {
    for len in [0, 1, 2, 3, 4, 5, 8, 16, 18, 31, 32, 40] {
      let mut payload = vec![0u8; len];
      unmask(&mut payload, [1, 2, 3, 4]);
      let expected = (0..len).map(|idx| u8::try_from(idx % 4).unwrap() + 1).collect::<Vec<_>>();
      assert_eq!(payload, expected);
    }
  }

  #[test]
  fn unmask_has_correct_output() {
    let mut payload = *b"Hello";
    unmask(&mut payload, [0x37, 0xfa, 0x21, 0x3d]);
    assert_eq!(payload, [0x7f, 0x9f, 0x4d, 0x51, 0x58]);
  }
}
