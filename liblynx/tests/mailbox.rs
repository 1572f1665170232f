//! Mailbox behaviour against the mock kernel.

use liblynx::mailbox::Mailbox;
use lynx_abi::MessageKind;
use lynx_gateway_mock::{MockKernel, MAILBOX_CAPACITY};

#[test]
fn delivery_preserves_sender_kind_and_payload() {
    let kernel = MockKernel::new();
    let mailbox = Mailbox::attach(&kernel);

    mailbox
        .send(1, MessageKind::Command, b"open sesame")
        .unwrap();

    let received = mailbox.receive().expect("message should be pending");
    assert_eq!(received.sender, 1);
    assert_eq!(received.receiver, 1);
    assert_eq!(received.kind, MessageKind::Command);
    assert_eq!(received.payload, b"open sesame");
}

#[test]
fn empty_queue_is_none_not_error() {
    let kernel = MockKernel::new();
    let mailbox = Mailbox::attach(&kernel);

    assert!(mailbox.receive().is_none());

    mailbox.send(1, MessageKind::Text, b"once").unwrap();
    assert!(mailbox.receive().is_some());
    assert!(mailbox.receive().is_none());
}

#[test]
fn messages_from_one_sender_arrive_in_order() {
    let kernel = MockKernel::new();
    let mailbox = Mailbox::attach(&kernel);

    for payload in [b"first" as &[u8], b"second", b"third"] {
        mailbox.send(1, MessageKind::Text, payload).unwrap();
    }

    assert_eq!(mailbox.receive().unwrap().payload, b"first");
    assert_eq!(mailbox.receive().unwrap().payload, b"second");
    assert_eq!(mailbox.receive().unwrap().payload, b"third");
}

#[test]
fn sender_pid_is_stamped_by_the_kernel() {
    let kernel = MockKernel::new();
    kernel.set_pid(7);
    let mailbox = Mailbox::attach(&kernel);

    // The wire struct's sender field is filled with a dummy value by the
    // library; what comes back must be the pid the kernel observed.
    mailbox.send(7, MessageKind::Status, b"who am i").unwrap();
    assert_eq!(mailbox.receive().unwrap().sender, 7);
}

#[test]
fn unknown_receiver_is_an_error() {
    let kernel = MockKernel::new();
    let mailbox = Mailbox::attach(&kernel);

    assert!(mailbox.send(99, MessageKind::Text, b"anyone?").is_err());
}

#[test]
fn full_queue_rejects_further_sends() {
    let kernel = MockKernel::new();
    kernel.register_process(2);
    let mailbox = Mailbox::attach(&kernel);

    for _ in 0..MAILBOX_CAPACITY {
        mailbox.send(2, MessageKind::Text, b"x").unwrap();
    }
    assert!(mailbox.send(2, MessageKind::Text, b"overflow").is_err());
    assert_eq!(kernel.queue_len(2), MAILBOX_CAPACITY);
}

#[test]
fn empty_payload_round_trips() {
    let kernel = MockKernel::new();
    let mailbox = Mailbox::attach(&kernel);

    mailbox.send(1, MessageKind::Control, b"").unwrap();
    let received = mailbox.receive().unwrap();
    assert_eq!(received.kind, MessageKind::Control);
    assert!(received.payload.is_empty());
}
