//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// One expense document mirrored from the remote collection.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub cost: f64,
}

/// Kind of a remote document change.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

/// One document change inside a batch.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct DocChange {
    pub kind: ChangeKind,
    pub doc: Expense,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Expenses in insertion order of first observation.
    pub expenses: RwSignal<Vec<Expense>>,
    /// Live subscription status.
    pub ws_connected: RwSignal<bool>,
    /// Timestamp of the last applied change batch.
    pub last_sync: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Apply one change to the list, keeping at most one record per id.
///
/// `added` and `modified` both upsert: a duplicate `added` replaces the
/// record in place and a `modified` for an unknown id appends, so no batch
/// can duplicate a document.
pub fn apply_change(list: &mut Vec<Expense>, change: DocChange) {
    match change.kind {
        ChangeKind::Added | ChangeKind::Modified => {
            if let Some(slot) = list.iter_mut().find(|e| e.id == change.doc.id) {
                *slot = change.doc;
            } else {
                list.push(change.doc);
            }
        }
        ChangeKind::Removed => {
            list.retain(|e| e.id != change.doc.id);
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        expenses: create_rw_signal(Vec::new()),
        ws_connected: create_rw_signal(false),
        last_sync: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Apply a full change batch in one signal update, so no render ever
    /// observes a partially-applied batch.
    pub fn apply_changes(&self, changes: Vec<DocChange>) {
        self.expenses.update(|list| {
            for change in changes {
                apply_change(list, change);
            }
        });
        self.last_sync
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, name: &str, cost: f64) -> Expense {
        Expense {
            id: id.to_string(),
            name: name.to_string(),
            cost,
        }
    }

    fn change(kind: ChangeKind, doc: Expense) -> DocChange {
        DocChange { kind, doc }
    }

    #[test]
    fn added_appends_in_observation_order() {
        let mut list = Vec::new();
        apply_change(&mut list, change(ChangeKind::Added, expense("1", "rent", 1000.0)));
        apply_change(&mut list, change(ChangeKind::Added, expense("2", "food", 500.0)));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "1");
        assert_eq!(list[1].id, "2");
    }

    #[test]
    fn duplicate_added_replaces_in_place() {
        let mut list = vec![expense("1", "rent", 1000.0), expense("2", "food", 500.0)];
        apply_change(&mut list, change(ChangeKind::Added, expense("1", "rent", 1200.0)));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].cost, 1200.0);
        assert_eq!(list[1].id, "2");
    }

    #[test]
    fn modified_replaces_in_place_preserving_order() {
        let mut list = vec![expense("1", "rent", 1000.0), expense("2", "food", 500.0)];
        apply_change(&mut list, change(ChangeKind::Modified, expense("2", "food", 750.0)));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, "2");
        assert_eq!(list[1].cost, 750.0);
    }

    #[test]
    fn modified_for_unknown_id_appends() {
        let mut list = vec![expense("1", "rent", 1000.0)];
        apply_change(&mut list, change(ChangeKind::Modified, expense("9", "gym", 40.0)));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, "9");
    }

    #[test]
    fn removed_filters_by_id() {
        let mut list = vec![expense("1", "rent", 1000.0), expense("2", "food", 500.0)];
        apply_change(&mut list, change(ChangeKind::Removed, expense("1", "rent", 1000.0)));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "2");
    }

    #[test]
    fn removed_unknown_id_is_a_no_op() {
        let mut list = vec![expense("1", "rent", 1000.0)];
        apply_change(&mut list, change(ChangeKind::Removed, expense("9", "gym", 40.0)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn batch_applies_fully() {
        let mut list = vec![expense("1", "rent", 1000.0)];
        let batch = vec![
            change(ChangeKind::Added, expense("2", "food", 500.0)),
            change(ChangeKind::Modified, expense("1", "rent", 900.0)),
            change(ChangeKind::Removed, expense("2", "food", 500.0)),
        ];
        for c in batch {
            apply_change(&mut list, c);
        }
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].cost, 900.0);
    }
}
