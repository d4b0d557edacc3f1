use crate::fixtures::{addr, test_identity, test_options, test_provider, AccountStateBuilder, DraftBuilder, TEST_WALLET_ADDRESS};
use crate::integration::support::Mocks;
use covault::foundation::{TxId, SIGNATURE_SLOT_SIZE};
use covault::infrastructure::gateway::mock::{
    CallSequence, MockProposalGateway, MockRelayGateway, MockWalletBridge,
};
use covault::QuorumError;

#[tokio::test]
async fn fully_signed_relay_skips_proposal_and_signing() {
    let account = AccountStateBuilder::default().threshold(1).build();
    let mocks = Mocks::new(MockWalletBridge::key_signer(addr(TEST_WALLET_ADDRESS)));
    let actions = mocks.actions(account, test_identity());

    let draft = DraftBuilder::default().signed_by(addr("0x0000000000000000000000000000000000000123")).build();
    let tx_id = actions
        .execute_tx(test_options(), &test_provider(), Some(draft), Some(TxId::from("123")), Some("origin.com"), true)
        .await
        .expect("relay");

    assert_eq!(tx_id, TxId::from("123"));
    assert_eq!(mocks.proposal.call_count(), 0);
    assert_eq!(mocks.wallet.offchain_call_count(), 0);
    assert_eq!(mocks.relay.call_count(), 1);
    assert_eq!(mocks.chain.call_count(), 0);

    let calls = mocks.relay.calls().await;
    assert_eq!(calls[0].encoded_signatures.len(), SIGNATURE_SLOT_SIZE);
    assert_eq!(calls[0].origin.as_deref(), Some("origin.com"));
}

#[tokio::test]
async fn relay_collects_missing_signature_then_submits() {
    let sequence = CallSequence::new();
    let mocks = Mocks::with_proposal(
        MockProposalGateway::returning("123").with_sequence(sequence.clone()),
        MockWalletBridge::key_signer(addr(TEST_WALLET_ADDRESS)).with_sequence(sequence.clone()),
    )
    .relay(MockRelayGateway::new().with_sequence(sequence.clone()));
    let actions = mocks.actions(AccountStateBuilder::default().threshold(2).build(), test_identity());

    let draft = DraftBuilder::default().signed_by(addr("0x0000000000000000000000000000000000000123")).build();
    let tx_id = actions
        .execute_tx(test_options(), &test_provider(), Some(draft), Some(TxId::from("123")), Some("origin.com"), true)
        .await
        .expect("relay");

    assert_eq!(tx_id, TxId::from("123"));
    assert_eq!(sequence.entries().await, vec!["sign_offchain", "propose", "relay"]);

    // The new signature is proposed against the existing identifier and the
    // relay sees the completed signature set.
    let proposals = mocks.proposal.calls().await;
    assert_eq!(proposals.len(), 1);
    assert_eq!(proposals[0].existing, Some(TxId::from("123")));
    assert_eq!(proposals[0].signature_count, 2);
    assert_eq!(mocks.relay.calls().await[0].signature_count, 2);
}

#[tokio::test]
async fn relay_without_id_proposes_before_and_after_signing() {
    let sequence = CallSequence::new();
    let mocks = Mocks::with_proposal(
        MockProposalGateway::returning("123").with_sequence(sequence.clone()),
        MockWalletBridge::key_signer(addr(TEST_WALLET_ADDRESS)).with_sequence(sequence.clone()),
    )
    .relay(MockRelayGateway::new().with_sequence(sequence.clone()));
    let actions = mocks.actions(AccountStateBuilder::default().threshold(2).build(), test_identity());

    let tx_id = actions
        .execute_tx(test_options(), &test_provider(), Some(DraftBuilder::default().build()), None, None, true)
        .await
        .expect("relay");

    assert_eq!(tx_id, TxId::from("123"));
    assert_eq!(sequence.entries().await, vec!["propose", "sign_offchain", "propose", "relay"]);

    let proposals = mocks.proposal.calls().await;
    assert_eq!(proposals[0].existing, None);
    assert_eq!(proposals[1].existing, Some(TxId::from("123")));
}

#[tokio::test]
async fn unsigned_relay_from_contract_signer_is_structurally_impossible() {
    let mocks = Mocks::new(MockWalletBridge::contract_signer(addr(TEST_WALLET_ADDRESS)));
    let actions = mocks.actions(AccountStateBuilder::default().threshold(2).build(), test_identity());

    let draft = DraftBuilder::default().signed_by(addr("0x0000000000000000000000000000000000000123")).build();
    let err = actions
        .execute_tx(test_options(), &test_provider(), Some(draft), Some(TxId::from("123")), Some("origin.com"), true)
        .await
        .expect_err("unsigned contract relay");

    assert!(matches!(err, QuorumError::UnsignedContractRelay));
    assert_eq!(err.to_string(), "cannot relay an unsigned transaction from a contract-based signer");
    assert_eq!(mocks.proposal.call_count(), 0);
    assert_eq!(mocks.wallet.offchain_call_count(), 0);
    assert_eq!(mocks.relay.call_count(), 0);
}

#[tokio::test]
async fn fully_signed_relay_from_contract_signer_is_allowed() {
    let account = AccountStateBuilder::default().threshold(1).build();
    let mocks = Mocks::new(MockWalletBridge::contract_signer(addr(TEST_WALLET_ADDRESS)));
    let actions = mocks.actions(account, test_identity());

    let draft = DraftBuilder::default().signed_by(addr("0x0000000000000000000000000000000000000123")).build();
    let tx_id = actions
        .execute_tx(test_options(), &test_provider(), Some(draft), Some(TxId::from("77")), None, true)
        .await
        .expect("relay");

    assert_eq!(tx_id, TxId::from("77"));
    assert_eq!(mocks.relay.call_count(), 1);
    assert_eq!(mocks.wallet.onchain_call_count(), 0);
}

#[tokio::test]
async fn relay_failure_propagates_unchanged() {
    let account = AccountStateBuilder::default().threshold(1).build();
    let mocks = Mocks::new(MockWalletBridge::key_signer(addr(TEST_WALLET_ADDRESS)))
        .relay(MockRelayGateway::failing("quota exhausted"));
    let actions = mocks.actions(account, test_identity());

    let draft = DraftBuilder::default().signed_by(addr("0x0000000000000000000000000000000000000123")).build();
    let err = actions
        .execute_tx(test_options(), &test_provider(), Some(draft), Some(TxId::from("123")), None, true)
        .await
        .expect_err("relay down");

    match err {
        QuorumError::Relay(message) => assert_eq!(message, "quota exhausted"),
        other => panic!("unexpected error: {other}"),
    }
}
