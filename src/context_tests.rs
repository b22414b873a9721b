// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `ExecutionContext`.

#[cfg(test)]
mod tests {
    use crate::context::ExecutionContext;
    use crate::pdns::ProbeOutcome;
    use crate::reconcilers::tests::FakeApi;
    use crate::reconcilers::{FailurePolicy, Operation};
    use std::sync::Arc;

    #[test]
    fn test_default_policies() {
        let ctx = ExecutionContext::new(Arc::new(FakeApi::new()));

        assert_eq!(
            ctx.failure_policy(Operation::Create),
            FailurePolicy::ZoneFailures
        );
        assert_eq!(
            ctx.failure_policy(Operation::Delete),
            FailurePolicy::BestEffort
        );
    }

    #[test]
    fn test_fail_on_delete_errors_changes_delete_policy_only() {
        let ctx = ExecutionContext::new(Arc::new(FakeApi::new())).with_fail_on_delete_errors(true);

        assert_eq!(
            ctx.failure_policy(Operation::Create),
            FailurePolicy::ZoneFailures
        );
        assert_eq!(
            ctx.failure_policy(Operation::Delete),
            FailurePolicy::AnyFailure
        );
    }

    #[tokio::test]
    async fn test_api_is_shared_across_clones() {
        let ctx = ExecutionContext::new(Arc::new(FakeApi::new().with_zone("a.example.")));
        let cloned = ctx.clone();

        assert_eq!(
            cloned.api().probe_zone("a.example.").await,
            ProbeOutcome::Present
        );
    }
}
