//! Startup protocol handshake against the mock kernel.

use liblynx::startup::assert_protocol;
use lynx_abi::PROTOCOL_VERSION;
use lynx_gateway_mock::MockKernel;

#[test]
fn matching_revision_passes() {
    let kernel = MockKernel::new();
    assert!(assert_protocol(&kernel).is_ok());
}

#[test]
fn mismatched_revision_fails_with_both_versions() {
    let kernel = MockKernel::with_protocol_version(1);
    let mismatch = assert_protocol(&kernel).unwrap_err();
    assert_eq!(mismatch.expected, PROTOCOL_VERSION);
    assert_eq!(mismatch.reported, 1);
}

#[test]
fn kernel_predating_the_operation_fails_the_check() {
    let kernel = MockKernel::with_protocol_version(-1);
    assert!(assert_protocol(&kernel).is_err());
}
