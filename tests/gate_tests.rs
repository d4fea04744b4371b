mod common;

#[cfg(test)]
pub mod gate_tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use portfolio::common::AuthError;
    use portfolio::gate::*;
    use portfolio::services::auth::{AuthProvider, MemoryAuth, Subscription};

    const EMAIL: &str = "owner@example.com";
    const PASSWORD: &str = "correct horse";

    fn watched_gate(auth: &MemoryAuth) -> (Arc<Mutex<SessionGate>>, Subscription) {
        let gate = Arc::new(Mutex::new(SessionGate::new()));
        let observer = Arc::clone(&gate);
        let subscription = auth.subscribe(move |event| observer.lock().unwrap().on_event(event));
        (gate, subscription)
    }

    fn state(gate: &Arc<Mutex<SessionGate>>) -> GateState {
        gate.lock().unwrap().state()
    }

    #[tokio::test]
    async fn test_sign_in_and_out_move_the_gate() {
        let auth = MemoryAuth::new().with_account(EMAIL, PASSWORD);
        let (gate, _subscription) = watched_gate(&auth);
        assert_eq!(state(&gate), GateState::Checking);

        let has_session = check_session(&auth).await;
        assert!(gate.lock().unwrap().resolve_check(has_session));
        assert_eq!(state(&gate), GateState::Unauthenticated);

        let session = auth.sign_in(EMAIL, PASSWORD).await.unwrap();
        assert_eq!(session.email(), EMAIL);
        assert_eq!(state(&gate), GateState::Authenticated);

        auth.sign_out().await.unwrap();
        assert_eq!(state(&gate), GateState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_wrong_password_keeps_login_form() {
        let auth = MemoryAuth::new().with_account(EMAIL, PASSWORD);
        let (gate, _subscription) = watched_gate(&auth);
        gate.lock().unwrap().resolve_check(false);

        let err = auth.sign_in(EMAIL, "guess").await.unwrap_err();
        assert_eq!(err, AuthError::Rejected("Invalid login credentials".into()));
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert_eq!(state(&gate), GateState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_sign_in_during_check_is_not_overridden() {
        let auth = MemoryAuth::new().with_account(EMAIL, PASSWORD);
        let (gate, _subscription) = watched_gate(&auth);

        let stale = check_session(&auth).await;
        auth.sign_in(EMAIL, PASSWORD).await.unwrap();
        assert!(!gate.lock().unwrap().resolve_check(stale));
        assert_eq!(state(&gate), GateState::Authenticated);
    }

    #[tokio::test]
    async fn test_existing_session_opens_dashboard() {
        let auth = MemoryAuth::new().with_account(EMAIL, PASSWORD);
        auth.sign_in(EMAIL, PASSWORD).await.unwrap();

        let (gate, _subscription) = watched_gate(&auth);
        assert!(gate.lock().unwrap().resolve_check(check_session(&auth).await));
        assert_eq!(state(&gate), GateState::Authenticated);
    }

    #[tokio::test]
    async fn test_teardown_unsubscribes() {
        let auth = MemoryAuth::new().with_account(EMAIL, PASSWORD);
        let (gate, subscription) = watched_gate(&auth);
        gate.lock().unwrap().resolve_check(false);
        assert_eq!(auth.hub().subscriber_count(), 1);

        subscription.unsubscribe();
        assert_eq!(auth.hub().subscriber_count(), 0);

        auth.sign_in(EMAIL, PASSWORD).await.unwrap();
        assert_eq!(state(&gate), GateState::Unauthenticated);
    }
}
