#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use protocol::{Direction, Phase, Registry};

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| Registry::standard().expect("standard registry"))
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let phase = Phase::ALL[usize::from(selector) % Phase::ALL.len()];
    let direction = Direction::ALL[usize::from(selector >> 4) % Direction::ALL.len()];

    let limits = wire::Limits::for_testing();
    let mut stream = rest;
    while !stream.is_empty() {
        let Ok(payload) = wire::read_frame(&mut stream, &limits) else {
            break;
        };
        let Ok((id, body)) = wire::split_packet_id(&payload) else {
            continue;
        };
        let _ = registry().decode_exact(phase, direction, id, body);
    }
});
