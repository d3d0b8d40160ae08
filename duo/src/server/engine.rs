use crate::{
  matchmaking::Matchmaker,
  server::{ChannelOutbox, Event},
};
use tokio::sync::mpsc::UnboundedReceiver;

/// Owns the matchmaking state and applies events one at a time until every sender is gone.
pub(crate) async fn run(mut events: UnboundedReceiver<Event>) {
  let mut matchmaker = Matchmaker::new(ChannelOutbox::default());
  while let Some(event) = events.recv().await {
    handle(&mut matchmaker, event);
  }
  _debug!("Engine stopped");
}

pub(crate) fn handle(matchmaker: &mut Matchmaker<ChannelOutbox>, event: Event) {
  match event {
    Event::Connect { id, sender } => {
      matchmaker.outbox_mut().insert(id, sender);
      matchmaker.connect(id);
    }
    Event::Disconnect { id } => {
      matchmaker.disconnect(id);
      matchmaker.outbox_mut().remove(id);
    }
    Event::Text { id, text } => {
      matchmaker.message(id, &text);
    }
  }
}
