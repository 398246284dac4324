use super::*;
use crate::ANTE;
use crate::Chips;
use crate::GameError;
use crate::ID;
use crate::MAX_STACK;
use crate::cards::Deck;
use crate::gameplay::Seat;
use crate::gameroom::*;
use crate::save::Store;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Pairs waiting participants into matches and routes moves to them.
///
/// Pairing holds the lobby lock across dequeue, registry insert and the
/// opening notifications, so concurrent joins can neither double-pair nor
/// drop a participant. Moves only touch the registry's read lock and the
/// target session's own mutex.
pub struct Casino {
    lobby: Mutex<Lobby>,
    registry: Registry,
    store: Arc<dyn Store>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
}

impl Casino {
    pub fn new(store: Arc<dyn Store>, scheduler: Arc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            lobby: Mutex::new(Lobby::default()),
            registry: Registry::default(),
            store,
            scheduler,
            delay,
        }
    }
}

impl Casino {
    /// Enqueues a participant, opening a match if someone was already waiting.
    /// Returns the new match identifier when this join completed a pair.
    pub async fn join(
        &self,
        name: &str,
        stack: Chips,
        outbox: Outbox,
    ) -> Result<Option<ID<Session>>, GameError> {
        if stack < ANTE {
            return Err(GameError::Validation(format!(
                "stack {} cannot cover the ante of {}",
                stack, ANTE
            )));
        }
        if stack > MAX_STACK {
            return Err(GameError::Validation(format!(
                "stack {} exceeds the limit of {}",
                stack, MAX_STACK
            )));
        }
        let mut lobby = self.lobby.lock().await;
        lobby.push(Participant::new(name, stack, outbox.clone()));
        match lobby.pair() {
            None => {
                log::info!("[casino] {} waiting with {}", name, stack);
                outbox.send(&ServerMessage::Waiting);
                Ok(None)
            }
            Some(seats) => {
                let session = Arc::new(Session::new(
                    ID::default(),
                    seats,
                    Deck::new(),
                    self.scheduler.clone(),
                    self.delay,
                ));
                self.registry.insert(session.clone()).await;
                session.greet().await;
                log::info!(
                    "[casino] match {} opened: {} vs {}",
                    session.id(),
                    session.participant(Seat::One).name(),
                    session.participant(Seat::Two).name(),
                );
                Ok(Some(session.id()))
            }
        }
    }

    /// Removes a waiting participant. Participants already in a match are unaffected.
    pub async fn leave(&self, name: &str) {
        if self.lobby.lock().await.leave(name) {
            log::info!("[casino] {} left the queue", name);
        }
    }

    /// Decodes and dispatches one inbound frame.
    pub async fn play(&self, text: &str) -> Result<Verdict, GameError> {
        self.dispatch(Protocol::decode(text)?).await
    }

    /// Routes a move to its match, settling the match if this move ended it.
    pub async fn dispatch(&self, m: Move) -> Result<Verdict, GameError> {
        let session = self.registry.lookup(&m.game).await?;
        let verdict = session.play(m.seat, m.action).await?;
        if let Verdict::Settled(ref settlement) = verdict {
            self.settle(settlement).await?;
        }
        Ok(verdict)
    }

    /// Number of participants waiting for an opponent.
    pub async fn waiting(&self) -> usize {
        self.lobby.lock().await.len()
    }
    /// Number of live matches.
    pub async fn matches(&self) -> usize {
        self.registry.len().await
    }
}

impl Casino {
    /// Writes final stacks back to the store, then forgets the match.
    /// Both writes are attempted even if one fails.
    async fn settle(&self, settlement: &Settlement) -> Result<(), GameError> {
        let mut failures = Vec::new();
        for (name, stack) in settlement.stacks.iter() {
            match self.store.update_chips(name, *stack).await {
                Ok(()) => log::info!("[casino] {} settled at {}", name, stack),
                Err(e) => {
                    log::error!("[casino] could not record {} for {}: {}", stack, name, e);
                    failures.push(format!("{}: {}", name, e));
                }
            }
        }
        self.registry.remove(settlement.game).await;
        log::info!("[casino] match {} closed", settlement.game);
        match failures.is_empty() {
            true => Ok(()),
            false => Err(GameError::Settlement(failures.join("; "))),
        }
    }
}

#[cfg(feature = "server")]
impl Casino {
    /// Joins the connection to the lobby and spawns the WebSocket bridge.
    ///
    /// Outbound messages drain from the participant's outbox into the socket.
    /// Inbound text frames are dispatched as moves; failures are reported
    /// back on the same connection. On close the participant leaves the
    /// queue under the name given in the close reason, or its join name.
    pub async fn bridge(
        self: Arc<Self>,
        join: Join,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) -> Result<(), GameError> {
        use futures::StreamExt;
        let (outbox, mut inbox) = Outbox::channel();
        self.join(&join.name, join.stack, outbox.clone()).await?;
        log::debug!("[bridge {}] connected", join.name);
        actix_web::rt::spawn(async move {
            let mut departing = join.name.clone();
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = inbox.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => {
                            if let Err(e) = self.play(&text).await {
                                log::debug!("[bridge {}] {}", join.name, e);
                                outbox.send(&ServerMessage::from(&e));
                            }
                        }
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(reason))) => {
                            if let Some(name) = reason.and_then(|r| r.description).filter(|d| !d.is_empty()) {
                                departing = name;
                            }
                            break 'sesh
                        }
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            self.leave(&departing).await;
            let _ = session.close(None).await;
            log::debug!("[bridge {}] disconnected", join.name);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ROUND_LIMIT;
    use crate::cards::*;
    use crate::gameplay::*;
    use crate::save::Vault;
    use serde_json::Value;
    use tokio::sync::mpsc::UnboundedReceiver;

    struct Unreachable;

    #[async_trait::async_trait]
    impl Store for Unreachable {
        async fn update_chips(&self, _: &str, _: Chips) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    fn casino(store: Arc<dyn Store>) -> Casino {
        Casino::new(store, Arc::new(Manual::default()), crate::DEAL_DELAY)
    }

    fn drain(inbox: &mut UnboundedReceiver<String>) -> Vec<Value> {
        let mut out = Vec::new();
        while let Ok(json) = inbox.try_recv() {
            out.push(serde_json::from_str(&json).unwrap());
        }
        out
    }

    fn frame(game: ID<Session>, seat: u8, action: &str) -> String {
        serde_json::json!({ "gameId": game.to_string(), "player": seat, "action": action })
            .to_string()
    }

    /// Opens a match between alice and bob with the given buy-ins.
    async fn opened(
        casino: &Casino,
        stacks: [Chips; 2],
    ) -> (ID<Session>, [UnboundedReceiver<String>; 2]) {
        let (a, rx_a) = Outbox::channel();
        let (b, rx_b) = Outbox::channel();
        assert_eq!(casino.join("alice", stacks[0], a).await.unwrap(), None);
        let id = casino.join("bob", stacks[1], b).await.unwrap().unwrap();
        (id, [rx_a, rx_b])
    }

    #[tokio::test]
    async fn first_join_waits() {
        let casino = casino(Arc::new(Vault::default()));
        let (outbox, mut inbox) = Outbox::channel();
        assert_eq!(casino.join("alice", 1000, outbox).await.unwrap(), None);
        let inbox = drain(&mut inbox);
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0]["type"], "waiting");
        assert_eq!(casino.waiting().await, 1);
        assert_eq!(casino.matches().await, 0);
    }

    #[tokio::test]
    async fn second_join_opens_match() {
        let casino = casino(Arc::new(Vault::default()));
        let (id, mut inboxes) = opened(&casino, [1000, 1000]).await;
        assert_eq!(casino.waiting().await, 0);
        assert_eq!(casino.matches().await, 1);
        let table = casino
            .registry
            .lookup(&id.to_string())
            .await
            .unwrap()
            .snapshot()
            .await;
        assert_eq!(table.stack(Seat::One), 900);
        assert_eq!(table.stack(Seat::Two), 900);
        assert_eq!(table.bet(Seat::One), 100);
        assert_eq!(table.bet(Seat::Two), 100);
        assert_eq!(table.dealer(), Seat::One);
        assert_eq!(table.round(), 0);
        let alice = drain(&mut inboxes[0]);
        let bob = drain(&mut inboxes[1]);
        assert_eq!(alice.last().unwrap()["type"], "gameStart");
        assert_eq!(alice.last().unwrap()["gameId"], id.to_string());
        assert_eq!(alice.last().unwrap()["opponent"]["name"], "bob");
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0]["player"], 2);
    }

    #[tokio::test]
    async fn raise_then_call_resolves_round() {
        let casino = casino(Arc::new(Vault::default()));
        let (id, mut inboxes) = opened(&casino, [1000, 1000]).await;
        drain(&mut inboxes[0]);
        drain(&mut inboxes[1]);
        let verdict = casino.play(&frame(id, 1, "RAISE 200")).await.unwrap();
        assert_eq!(verdict, Verdict::Betting);
        let verdict = casino.play(&frame(id, 2, "CALL")).await.unwrap();
        assert_eq!(verdict, Verdict::Dealt);
        let results = drain(&mut inboxes[1]);
        assert_eq!(results.len(), 2);
        let last = &results[1]["moveResult"];
        assert_ne!(last["status"], 0);
        assert_eq!(
            last["stack1"].as_i64().unwrap() + last["stack2"].as_i64().unwrap(),
            2000
        );
    }

    /// Seat one wins the even rounds and seat two the odd ones, so checked
    /// down stacks swing by one ante and always reach the round limit.
    fn alternating() -> Deck {
        let cards = (0..DECK_SIZE)
            .map(|i| match (i / 2 % 2, i % 2) {
                (0, 0) | (1, 1) => Card::from((Rank::Nine, Suit::try_from((i % 2) as u8).unwrap())),
                _ => Card::from((Rank::Two, Suit::try_from((i % 2) as u8).unwrap())),
            })
            .collect::<Vec<Card>>();
        Deck::from(<[Card; DECK_SIZE]>::try_from(cards).unwrap())
    }

    #[tokio::test]
    async fn round_limit_settles_to_store_and_exits() {
        let vault = Arc::new(Vault::default());
        let manual = Arc::new(Manual::default());
        let casino = Casino::new(vault.clone(), manual.clone(), crate::DEAL_DELAY);
        let (a, mut rx_a) = Outbox::channel();
        let (b, mut rx_b) = Outbox::channel();
        let session = Arc::new(Session::new(
            ID::default(),
            [
                Participant::new("alice", 1000, a),
                Participant::new("bob", 1000, b),
            ],
            alternating(),
            manual.clone(),
            crate::DEAL_DELAY,
        ));
        let id = session.id();
        casino.registry.insert(session.clone()).await;
        let mut settled = None;
        for round in 0..ROUND_LIMIT {
            let table = session.snapshot().await;
            assert_eq!(table.round(), round);
            let dealer = table.dealer();
            casino.play(&frame(id, dealer as u8, "CHECK")).await.unwrap();
            match casino.play(&frame(id, dealer.other() as u8, "CHECK")).await.unwrap() {
                Verdict::Dealt => assert!(round + 1 < ROUND_LIMIT),
                Verdict::Settled(settlement) => settled = Some(settlement),
                Verdict::Betting => panic!("second check must resolve round {}", round),
            }
        }
        let settlement = settled.expect("settled at the round limit");
        assert_eq!(session.snapshot().await.round(), ROUND_LIMIT);
        assert_eq!(settlement.game, id);
        assert_eq!(settlement.stacks[0], ("alice".to_string(), 1000));
        assert_eq!(settlement.stacks[1], ("bob".to_string(), 1000));
        assert_eq!(vault.chips("alice"), Some(1000));
        assert_eq!(vault.chips("bob"), Some(1000));
        assert_eq!(casino.matches().await, 0);
        assert!(drain(&mut rx_a).iter().all(|m| m["type"] != "exit"));
        drain(&mut rx_b);
        manual.fire();
        assert_eq!(drain(&mut rx_a).last().unwrap(), &serde_json::json!({ "type": "exit" }));
        assert_eq!(drain(&mut rx_b).last().unwrap(), &serde_json::json!({ "type": "exit" }));
        let gone = casino.play(&frame(id, 1, "CHECK")).await.unwrap_err();
        assert!(matches!(gone, GameError::Lookup(_)));
    }

    #[tokio::test]
    async fn unreachable_store_still_closes_match() {
        let casino = casino(Arc::new(Unreachable));
        let (id, _inboxes) = opened(&casino, [1000, 200]).await;
        let mut result = Ok(Verdict::Betting);
        for _ in 0..ROUND_LIMIT {
            let table = casino.registry.lookup(&id.to_string()).await.unwrap().snapshot().await;
            let dealer = table.dealer();
            casino.play(&frame(id, dealer as u8, "CHECK")).await.unwrap();
            result = casino.play(&frame(id, dealer.other() as u8, "CHECK")).await;
            if casino.matches().await == 0 {
                break;
            }
        }
        assert!(matches!(result, Err(GameError::Settlement(_))));
        assert_eq!(casino.matches().await, 0);
    }

    #[tokio::test]
    async fn bad_frames_are_reported_not_fatal() {
        let casino = casino(Arc::new(Vault::default()));
        let (id, _inboxes) = opened(&casino, [1000, 1000]).await;
        assert!(matches!(
            casino.play("{not json").await,
            Err(GameError::Parse(_))
        ));
        assert!(matches!(
            casino.play(&frame(ID::default(), 1, "CHECK")).await,
            Err(GameError::Lookup(_))
        ));
        assert!(matches!(
            casino.play(&frame(id, 1, "RAISE lots")).await,
            Err(GameError::Parse(_))
        ));
        assert!(matches!(
            casino.play(&frame(id, 2, "CHECK")).await,
            Err(GameError::Validation(_))
        ));
        assert_eq!(casino.matches().await, 1);
    }

    #[tokio::test]
    async fn short_stack_cannot_join() {
        let casino = casino(Arc::new(Vault::default()));
        let err = casino
            .join("carol", ANTE - 1, Outbox::channel().0)
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
        assert_eq!(casino.waiting().await, 0);
    }

    #[tokio::test]
    async fn oversized_stack_cannot_join() {
        let casino = casino(Arc::new(Vault::default()));
        for stack in [MAX_STACK + 1, Chips::MAX] {
            let err = casino
                .join("mallory", stack, Outbox::channel().0)
                .await
                .unwrap_err();
            assert!(matches!(err, GameError::Validation(_)));
        }
        assert_eq!(casino.waiting().await, 0);
        assert_eq!(casino.join("mallory", MAX_STACK, Outbox::channel().0).await.unwrap(), None);
        assert_eq!(casino.waiting().await, 1);
    }

    #[tokio::test]
    async fn largest_stacks_settle_without_overflow() {
        let casino = casino(Arc::new(Vault::default()));
        let (id, _inboxes) = opened(&casino, [MAX_STACK, MAX_STACK]).await;
        casino.play(&frame(id, 1, "CHECK")).await.unwrap();
        let verdict = casino.play(&frame(id, 2, "FOLD")).await.unwrap();
        assert_eq!(verdict, Verdict::Dealt);
        let table = casino.registry.lookup(&id.to_string()).await.unwrap().snapshot().await;
        assert!(table.stack(Seat::One) > 0);
        assert!(table.stack(Seat::Two) > 0);
        assert_eq!(
            table.stack(Seat::One) + table.bet(Seat::One) + table.stack(Seat::Two) + table.bet(Seat::Two),
            2 * MAX_STACK
        );
    }

    #[tokio::test]
    async fn leave_only_affects_queue() {
        let casino = casino(Arc::new(Vault::default()));
        let _ = opened(&casino, [1000, 1000]).await;
        casino.join("carol", 1000, Outbox::channel().0).await.unwrap();
        casino.leave("alice").await;
        assert_eq!(casino.matches().await, 1);
        assert_eq!(casino.waiting().await, 1);
        casino.leave("carol").await;
        assert_eq!(casino.waiting().await, 0);
    }

    #[tokio::test]
    async fn concurrent_joins_pair_everyone_once() {
        let casino = Arc::new(casino(Arc::new(Vault::default())));
        let tasks = (0..16)
            .map(|i| {
                let casino = casino.clone();
                tokio::spawn(async move {
                    casino
                        .join(&format!("p{}", i), 1000, Outbox::channel().0)
                        .await
                        .unwrap()
                })
            })
            .collect::<Vec<_>>();
        let mut opened = 0;
        for task in tasks {
            if task.await.unwrap().is_some() {
                opened += 1;
            }
        }
        assert_eq!(opened, 8);
        assert_eq!(casino.matches().await, 8);
        assert_eq!(casino.waiting().await, 0);
    }
}
