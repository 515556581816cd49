use tracing::warn;

use crate::models::CreationRecord;

/// Lifecycle of the dashboard view. A freshly mounted view is `Idle`,
/// moves to `Loading` when the fetch sequence starts, and ends in
/// `Settled` once that single fetch resolves. There is no path back out
/// of `Settled`; the view fetches once per mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    Idle,
    Loading,
    Settled,
}

/// Observable state of the dashboard: the current phase plus the creation
/// list. Created fresh on every mount and discarded on unmount.
#[derive(Debug)]
pub struct DashboardState {
    phase: DashboardPhase,
    creations: Vec<CreationRecord>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            phase: DashboardPhase::Idle,
            creations: Vec::new(),
        }
    }

    pub fn phase(&self) -> DashboardPhase {
        self.phase
    }

    /// The view counts as loading from creation until the fetch settles.
    pub fn is_loading(&self) -> bool {
        self.phase != DashboardPhase::Settled
    }

    /// Creations in the server's order, verbatim.
    pub fn creations(&self) -> &[CreationRecord] {
        &self.creations
    }

    pub fn creation_count(&self) -> usize {
        self.creations.len()
    }

    /// Idle → Loading.
    pub fn begin_load(&mut self) {
        match self.phase {
            DashboardPhase::Idle => self.phase = DashboardPhase::Loading,
            phase => warn!("begin_load in phase {:?}; fetch already dispatched", phase),
        }
    }

    /// Loading → Settled. `Some` replaces the creation list with the
    /// fetched records; `None` leaves the list unchanged (failed fetch).
    /// A view settles at most once; a late second result is dropped.
    pub fn settle(&mut self, creations: Option<Vec<CreationRecord>>) {
        if self.phase == DashboardPhase::Settled {
            warn!("dashboard already settled; dropping late result");
            return;
        }
        if let Some(creations) = creations {
            self.creations = creations;
        }
        self.phase = DashboardPhase::Settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::creation;

    #[test]
    fn fresh_state_is_idle_and_loading() {
        let state = DashboardState::new();
        assert_eq!(state.phase(), DashboardPhase::Idle);
        assert!(state.is_loading());
        assert_eq!(state.creation_count(), 0);
    }

    #[test]
    fn begin_load_moves_to_loading() {
        let mut state = DashboardState::new();
        state.begin_load();
        assert_eq!(state.phase(), DashboardPhase::Loading);
        assert!(state.is_loading());
    }

    #[test]
    fn settle_with_records_replaces_the_list() {
        let mut state = DashboardState::new();
        state.begin_load();
        state.settle(Some(vec![creation(1), creation(2)]));
        assert_eq!(state.phase(), DashboardPhase::Settled);
        assert!(!state.is_loading());
        assert_eq!(state.creation_count(), 2);
        assert_eq!(state.creations()[0].id, 1);
    }

    #[test]
    fn settle_without_records_keeps_the_list() {
        let mut state = DashboardState::new();
        state.begin_load();
        state.settle(None);
        assert_eq!(state.phase(), DashboardPhase::Settled);
        assert_eq!(state.creation_count(), 0);
    }

    #[test]
    fn a_second_settle_is_dropped() {
        let mut state = DashboardState::new();
        state.begin_load();
        state.settle(Some(vec![creation(1)]));
        state.settle(Some(vec![creation(2), creation(3)]));
        assert_eq!(state.creation_count(), 1);
        assert_eq!(state.creations()[0].id, 1);
        assert!(!state.is_loading());
    }
}
