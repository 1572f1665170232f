//! Console line-editor behaviour against the mock kernel.

use liblynx::console::{Console, ConsoleConfig};
use liblynx::window::{Colour, Window, WindowSpec};
use lynx_abi::{Event, EventFlags, COMMAND_LINE_CAPACITY, SCANCODE_ENTER};
use lynx_gateway_mock::MockKernel;

const PROMPT: &str = "lynx $ ";

fn console(kernel: &MockKernel) -> Console<'_, MockKernel> {
    let spec = WindowSpec {
        x: 100,
        y: 100,
        width: 500,
        height: 350,
        name: "Terminal",
        colour: Colour::new(0x363636),
    };
    let window = Window::create(kernel, &spec, false).unwrap();
    Console::new(window, PROMPT, ConsoleConfig::default()).unwrap()
}

fn type_line(kernel: &MockKernel, line: &str) {
    for ch in line.bytes() {
        kernel.push_key(0x23, ch);
    }
    kernel.push_key(SCANCODE_ENTER, b'\n');
}

#[test]
fn creation_paints_the_prompt() {
    let kernel = MockKernel::new();
    let _console = console(&kernel);

    let paints = kernel.paints(0);
    assert_eq!(paints.len(), 1);
    assert_eq!(paints[0].text, PROMPT);
    assert_eq!((paints[0].x, paints[0].y), (5, 20));
}

#[test]
fn empty_polls_change_nothing() {
    let kernel = MockKernel::new();
    let mut console = console(&kernel);

    for _ in 0..5 {
        assert_eq!(console.poll().unwrap(), None);
    }
    assert_eq!(console.editor().as_str(), PROMPT);
    assert_eq!(console.cursor_y(), 20);
    assert_eq!(kernel.paints(0).len(), 1);
}

#[test]
fn non_keyboard_events_are_ignored() {
    let kernel = MockKernel::new();
    let mut console = console(&kernel);

    kernel.push_event(Event {
        flags: EventFlags::MOUSE_LEFT_CLICKED.bits(),
        mouse_x: 40,
        mouse_y: 80,
        ..Event::EMPTY
    });
    assert_eq!(console.poll().unwrap(), None);
    assert_eq!(console.editor().as_str(), PROMPT);
    assert_eq!(kernel.paints(0).len(), 1);
}

#[test]
fn each_accepted_character_repaints_the_line() {
    let kernel = MockKernel::new();
    let mut console = console(&kernel);

    kernel.push_key(0x23, b'h');
    kernel.push_key(0x17, b'i');
    assert_eq!(console.poll().unwrap(), None);
    assert_eq!(console.poll().unwrap(), None);

    assert_eq!(console.editor().as_str(), "lynx $ hi");
    let paints = kernel.paints(0);
    assert_eq!(paints.len(), 3);
    assert_eq!(paints[2].text, "lynx $ hi");
    // Repaints land on the same line until the line is dispatched.
    assert_eq!(paints[2].y, 20);
}

#[test]
fn enter_dispatches_the_line_without_the_prompt() {
    let kernel = MockKernel::new();
    let mut console = console(&kernel);

    type_line(&kernel, "hello");
    let mut dispatched = None;
    while dispatched.is_none() {
        dispatched = console.poll().unwrap();
    }

    assert_eq!(dispatched.unwrap(), "hello");
    assert_eq!(console.editor().as_str(), PROMPT);
    assert_eq!(console.cursor_y(), 40);
}

#[test]
fn finish_line_paints_reply_then_fresh_prompt() {
    let kernel = MockKernel::new();
    let mut console = console(&kernel);

    type_line(&kernel, "hello");
    while console.poll().unwrap().is_none() {}
    console.finish_line(Some("Hello there")).unwrap();

    let paints = kernel.paints(0);
    let reply = &paints[paints.len() - 2];
    let prompt = &paints[paints.len() - 1];
    assert_eq!(reply.text, "Hello there");
    assert_eq!(reply.y, 40);
    assert_eq!(prompt.text, PROMPT);
    assert_eq!(prompt.y, 60);
}

#[test]
fn silent_reply_reuses_the_dispatch_line() {
    let kernel = MockKernel::new();
    let mut console = console(&kernel);

    kernel.push_key(SCANCODE_ENTER, b'\n');
    assert_eq!(console.poll().unwrap().unwrap(), "");
    console.finish_line(None).unwrap();

    let paints = kernel.paints(0);
    let prompt = &paints[paints.len() - 1];
    assert_eq!(prompt.text, PROMPT);
    assert_eq!(prompt.y, 40);
}

#[test]
fn input_past_capacity_is_dropped_not_painted() {
    let kernel = MockKernel::new();
    let mut console = console(&kernel);

    let room = COMMAND_LINE_CAPACITY - PROMPT.len();
    for _ in 0..room + 10 {
        kernel.push_key(0x1e, b'a');
    }
    for _ in 0..room + 10 {
        console.poll().unwrap();
    }

    assert_eq!(console.editor().as_str().len(), COMMAND_LINE_CAPACITY);
    // One paint for the prompt, one per accepted character, none for the
    // dropped overflow.
    assert_eq!(kernel.paints(0).len(), 1 + room);

    // Enter still dispatches the full buffer.
    kernel.push_key(SCANCODE_ENTER, b'\n');
    let line = console.poll().unwrap().unwrap();
    assert_eq!(line.len(), room);
}
