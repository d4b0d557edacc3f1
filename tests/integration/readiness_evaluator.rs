use crate::fixtures::{addr, identity_at, test_identity, AccountStateBuilder, DraftBuilder, TEST_WALLET_ADDRESS};
use covault::application::ReadinessEvaluator;
use covault::infrastructure::gateway::mock::StaticPendingView;

#[tokio::test]
async fn immediate_execution_requires_single_owner_and_idle_queue() {
    let account = AccountStateBuilder::default().threshold(1).build();
    let identity = test_identity();

    let idle = StaticPendingView::new(false);
    let evaluator = ReadinessEvaluator::new(&account, &identity, &idle);
    assert!(evaluator.is_immediately_executable().await.expect("pending view"));

    let busy = StaticPendingView::new(true);
    let evaluator = ReadinessEvaluator::new(&account, &identity, &busy);
    assert!(!evaluator.is_immediately_executable().await.expect("pending view"));

    let multi = AccountStateBuilder::default().threshold(2).build();
    let evaluator = ReadinessEvaluator::new(&multi, &identity, &idle);
    assert!(!evaluator.is_immediately_executable().await.expect("pending view"));
}

#[tokio::test]
async fn evaluator_delegates_to_pure_predicates() {
    let account = AccountStateBuilder::default().build();
    let identity = test_identity();
    let pending = StaticPendingView::new(false);
    let evaluator = ReadinessEvaluator::new(&account, &identity, &pending);

    assert!(evaluator.validate_nonce(&DraftBuilder::default().build()));
    assert!(!evaluator.validate_nonce(&DraftBuilder::default().nonce(99).build()));

    assert!(!evaluator.is_execution_loop());
    assert!(!evaluator.has_already_signed(&DraftBuilder::default().build()));
    assert!(evaluator.has_already_signed(&DraftBuilder::default().signed_by(addr(TEST_WALLET_ADDRESS)).build()));
}

#[tokio::test]
async fn evaluator_flags_account_signing_for_itself() {
    let address = addr("0x0000000000000000000000000000000000000789");
    let account = AccountStateBuilder::default().address(address).owners(vec![address]).build();
    let identity = identity_at(address);
    let pending = StaticPendingView::new(false);

    let evaluator = ReadinessEvaluator::new(&account, &identity, &pending);
    assert!(evaluator.is_execution_loop());
}
