use std::cell::RefCell;
use std::rc::Weak;

use tracing::debug;

use crate::creations::FetchCreations;
use crate::models::CreationRecord;
use crate::session::SessionAccess;

use super::state::DashboardState;

/// Outbound notification seam. Surfaces a single user-visible message per
/// failed operation; the toast layer implements it in the UI, tests record
/// the calls.
pub trait Notify {
    fn error(&self, message: &str);
}

/// Weak handle to the dashboard view state. The loader never holds the
/// strong half, so a view that unmounts mid-fetch gets dropped rather than
/// mutated.
pub type DashboardHandle = Weak<RefCell<DashboardState>>;

/// One-shot fetch-and-settle sequence for the dashboard.
///
/// Acquires a credential, fetches the user's creations with it, and
/// settles the view exactly once. Either failure surfaces one
/// notification and leaves the creation list at its prior value. If the
/// view has been dropped by the time the fetch resolves, the result is
/// discarded.
pub async fn load_dashboard(
    view: DashboardHandle,
    session: &dyn SessionAccess,
    api: &dyn FetchCreations,
    notify: &dyn Notify,
) {
    match view.upgrade() {
        Some(state) => state.borrow_mut().begin_load(),
        None => return,
    }

    let outcome: Result<Vec<CreationRecord>, String> = match session.acquire_credential().await {
        Ok(credential) => api
            .fetch_creations(&credential)
            .await
            .map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    let Some(state) = view.upgrade() else {
        debug!("dashboard unmounted before the fetch settled; dropping result");
        return;
    };

    match outcome {
        Ok(creations) => state.borrow_mut().settle(Some(creations)),
        Err(message) => {
            notify.error(&message);
            state.borrow_mut().settle(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::creations::{FetchError, GENERIC_FETCH_MESSAGE};
    use crate::dashboard::DashboardPhase;
    use crate::session::SessionError;
    use crate::test_support::{creation, FakeCreationsApi, FakeSession, RecordingNotifier};

    fn new_view() -> Rc<RefCell<DashboardState>> {
        Rc::new(RefCell::new(DashboardState::new()))
    }

    #[tokio::test]
    async fn successful_fetch_populates_creations_in_order() {
        let state = new_view();
        let session = FakeSession::signed_in();
        let api = FakeCreationsApi::returning(Ok(vec![creation(1), creation(2)]));
        let notify = RecordingNotifier::default();

        load_dashboard(Rc::downgrade(&state), &session, &api, &notify).await;

        let state = state.borrow();
        assert_eq!(state.phase(), DashboardPhase::Settled);
        assert!(!state.is_loading());
        assert_eq!(state.creation_count(), 2);
        assert_eq!(state.creations()[0].id, 1);
        assert_eq!(state.creations()[1].id, 2);
        assert!(notify.messages().is_empty());
    }

    #[tokio::test]
    async fn empty_fetch_settles_with_no_creations() {
        let state = new_view();
        let session = FakeSession::signed_in();
        let api = FakeCreationsApi::returning(Ok(Vec::new()));
        let notify = RecordingNotifier::default();

        load_dashboard(Rc::downgrade(&state), &session, &api, &notify).await;

        assert!(!state.borrow().is_loading());
        assert_eq!(state.borrow().creation_count(), 0);
        assert!(notify.messages().is_empty());
    }

    #[tokio::test]
    async fn missing_session_notifies_and_settles_empty() {
        let state = new_view();
        let session = FakeSession::signed_out();
        let api = FakeCreationsApi::returning(Ok(vec![creation(1)]));
        let notify = RecordingNotifier::default();

        load_dashboard(Rc::downgrade(&state), &session, &api, &notify).await;

        assert_eq!(
            notify.messages(),
            vec![SessionError::AuthUnavailable.to_string()]
        );
        assert_eq!(state.borrow().creation_count(), 0);
        assert!(!state.borrow().is_loading());
    }

    #[tokio::test]
    async fn server_reported_failure_surfaces_the_message() {
        let state = new_view();
        let session = FakeSession::signed_in();
        let api = FakeCreationsApi::returning(Err(FetchError::ServerReported(
            "quota exceeded".to_string(),
        )));
        let notify = RecordingNotifier::default();

        load_dashboard(Rc::downgrade(&state), &session, &api, &notify).await;

        assert_eq!(notify.messages(), vec!["quota exceeded".to_string()]);
        assert_eq!(state.borrow().creation_count(), 0);
        assert!(!state.borrow().is_loading());
    }

    #[tokio::test]
    async fn transport_failure_surfaces_the_generic_message() {
        let state = new_view();
        let session = FakeSession::signed_in();
        let api = FakeCreationsApi::returning(Err(FetchError::TransportFailure(
            GENERIC_FETCH_MESSAGE.to_string(),
        )));
        let notify = RecordingNotifier::default();

        load_dashboard(Rc::downgrade(&state), &session, &api, &notify).await;

        assert_eq!(notify.messages(), vec![GENERIC_FETCH_MESSAGE.to_string()]);
        assert!(!state.borrow().is_loading());
    }

    #[tokio::test]
    async fn failure_after_success_keeps_prior_creations() {
        // A failed settle leaves the list at its prior value.
        let state = new_view();
        state.borrow_mut().begin_load();
        state.borrow_mut().settle(Some(vec![creation(9)]));

        let mut inner = state.borrow_mut();
        inner.settle(None);
        assert_eq!(inner.creation_count(), 1);
    }

    #[tokio::test]
    async fn unmount_mid_fetch_discards_the_result() {
        let state = new_view();
        let session = FakeSession::signed_in();
        let api = FakeCreationsApi::pending();
        let notify = RecordingNotifier::default();

        let fut = load_dashboard(Rc::downgrade(&state), &session, &api, &notify);
        futures::pin_mut!(fut);

        // The fetch is parked; the view is still loading.
        assert!(futures::poll!(&mut fut).is_pending());
        assert!(state.borrow().is_loading());

        // Unmount, then let the fetch resolve.
        drop(state);
        api.release(Ok(vec![creation(1)]));
        fut.await;

        assert!(notify.messages().is_empty());
    }

    #[tokio::test]
    async fn unmount_mid_fetch_discards_failures_too() {
        let state = new_view();
        let session = FakeSession::signed_in();
        let api = FakeCreationsApi::pending();
        let notify = RecordingNotifier::default();

        let fut = load_dashboard(Rc::downgrade(&state), &session, &api, &notify);
        futures::pin_mut!(fut);
        assert!(futures::poll!(&mut fut).is_pending());

        drop(state);
        api.release(Err(FetchError::TransportFailure(
            GENERIC_FETCH_MESSAGE.to_string(),
        )));
        fut.await;

        // No toast for a view nobody is looking at.
        assert!(notify.messages().is_empty());
    }
}
