/// Server-generated texts that tell a client what happened to its pairing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notice {
  /// Sent to whoever asked for `/next`.
  LookingForPartner,
  /// Sent to both members of a freshly formed pair.
  PartnerConnected,
  /// Sent to the remaining member when the other one closes its connection.
  PartnerDisconnected,
  /// Sent to the remaining member when the other one asks for `/next`.
  PartnerLeft,
  /// Sent to a newcomer that found nobody waiting.
  WaitingForPartner,
}

impl Notice {
  /// Text delivered to the client.
  #[inline]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::LookingForPartner => "Looking for a new partner...",
      Self::PartnerConnected => "Partner connected! Say hi!",
      Self::PartnerDisconnected => "Partner disconnected.",
      Self::PartnerLeft => "Partner left. Waiting for new partner...",
      Self::WaitingForPartner => "Waiting for a partner...",
    }
  }
}
