//! Event polling against the mock kernel.

use liblynx::input;
use lynx_abi::{Event, EventFlags, SCANCODE_ENTER};
use lynx_gateway_mock::MockKernel;

#[test]
fn empty_poll_returns_a_flagless_event() {
    let kernel = MockKernel::new();
    let event = input::poll_event(&kernel);
    assert_eq!(event, Event::EMPTY);
    assert!(!event.is_keyboard());
}

#[test]
fn next_key_skips_non_keyboard_events() {
    let kernel = MockKernel::new();
    kernel.push_event(Event {
        flags: EventFlags::MOUSE_LEFT_CLICKED.bits(),
        mouse_x: 3,
        mouse_y: 4,
        ..Event::EMPTY
    });
    kernel.push_key(SCANCODE_ENTER, b'\n');

    let key = input::next_key(&kernel);
    assert!(key.is_keyboard());
    assert_eq!(key.scancode, SCANCODE_ENTER);
    assert_eq!(key.character, b'\n');
}
