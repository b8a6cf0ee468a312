use protocol::packets::{JoinGame, PlayerListItem, SpawnPosition};
use protocol::{encode_body, Direction, Packet, Phase, ProtocolError, Registry, MAX_PACKET_ID};

#[test]
fn play_clientbound_0x01_is_join_game() {
    let registry = Registry::standard().unwrap();
    let join = JoinGame {
        entity_id: 42,
        gamemode: 0,
        dimension: 0,
        difficulty: 1,
        max_players: 100,
        level_type: "default".to_string(),
        reduced_debug_info: false,
    };
    let body = encode_body(&join).unwrap();
    let packet = registry
        .decode(Phase::Play, Direction::ClientBound, 0x01, &body)
        .unwrap();
    assert_eq!(packet.name(), "JoinGame");
    assert_eq!(packet.downcast_ref::<JoinGame>(), Some(&join));
}

#[test]
fn id_0x7f_is_unknown_in_every_table() {
    let registry = Registry::standard().unwrap();
    for phase in Phase::ALL {
        for direction in Direction::ALL {
            let err = registry.decode(phase, direction, 0x7F, &[]).unwrap_err();
            match err {
                ProtocolError::UnknownPacketId {
                    id,
                    phase: p,
                    direction: d,
                } => {
                    assert_eq!(id, 0x7F);
                    assert_eq!(p, phase);
                    assert_eq!(d, direction);
                }
                other => panic!("unexpected error: {other}"),
            }
            let message = registry
                .decode(phase, direction, 0x7F, &[])
                .unwrap_err()
                .to_string();
            assert!(message.contains("0x7F"));
            assert!(message.contains(phase.name()));
        }
    }
}

#[test]
fn table_capacity_edge() {
    let registry = Registry::standard().unwrap();
    let last = i32::try_from(MAX_PACKET_ID).unwrap();
    assert!(matches!(
        registry.decode(Phase::Play, Direction::ClientBound, last, &[]),
        Err(ProtocolError::UnknownPacketId { .. })
    ));
    assert!(matches!(
        registry.decode(Phase::Play, Direction::ClientBound, -1, &[]),
        Err(ProtocolError::UnknownPacketId { id: -1, .. })
    ));
}

#[test]
fn standard_fingerprint_is_stable() {
    let a = Registry::standard().unwrap();
    let b = Registry::standard().unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), Registry::new().fingerprint());
}

#[test]
fn shared_registry_serves_many_threads() {
    let registry = std::sync::Arc::new(Registry::standard().unwrap());
    let body = encode_body(&SpawnPosition::default()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            let body = body.clone();
            std::thread::spawn(move || {
                registry
                    .decode(Phase::Play, Direction::ClientBound, SpawnPosition::ID, &body)
                    .map(|packet| packet.is::<SpawnPosition>())
                    .unwrap_or(false)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn player_list_registered_at_0x38() {
    let registry = Registry::standard().unwrap();
    let body = encode_body(&PlayerListItem::default()).unwrap();
    let packet = registry
        .decode(Phase::Play, Direction::ClientBound, 0x38, &body)
        .unwrap();
    assert!(packet.is::<PlayerListItem>());
}
