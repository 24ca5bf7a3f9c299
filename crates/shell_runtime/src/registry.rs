//! Process registry transitions: the authoritative state engine for the
//! process list, stacking order, and minimization.
//!
//! Every operation is a total function: absent target ids degrade to silent
//! no-ops. The registry deliberately favors idempotence over validation: a
//! close racing a queued focus for the same window is expected and harmless
//! in a UI shell.

use crate::model::{ApplicationKind, ProcessId, ProcessRecord, ShellState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`apply_shell_action`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Create a new process for the given application kind.
    OpenProcess {
        /// Application view tag to mount.
        kind: ApplicationKind,
    },
    /// Remove a process; no-op when the id is absent.
    CloseProcess {
        /// Process to close.
        id: ProcessId,
    },
    /// Raise a process above every other process, minimized or not.
    FocusProcess {
        /// Process to focus.
        id: ProcessId,
    },
    /// Flip a process's minimized flag; un-minimizing also focuses it.
    ToggleMinimize {
        /// Process to toggle.
        id: ProcessId,
    },
    /// Toggle the start panel open/closed.
    ToggleStartMenu,
    /// Close the start panel if open.
    CloseStartMenu,
}

/// Applies a [`ShellAction`] to the shell state.
///
/// Callers clone the current snapshot, apply, and publish the new value; the
/// transition itself never fails and has no effects outside the state.
pub fn apply_shell_action(state: &mut ShellState, action: ShellAction) {
    match action {
        ShellAction::OpenProcess { kind } => {
            let id = next_process_id(state);
            let stack_order = max_stack_order(state) + 1;
            state.processes.push(ProcessRecord {
                id,
                kind,
                stack_order,
                minimized: false,
            });
            state.start_menu_open = false;
        }
        ShellAction::CloseProcess { id } => {
            state.processes.retain(|process| process.id != id);
        }
        ShellAction::FocusProcess { id } => {
            raise_process(state, id);
        }
        ShellAction::ToggleMinimize { id } => {
            let Some(index) = state.processes.iter().position(|process| process.id == id) else {
                return;
            };
            let was_minimized = state.processes[index].minimized;
            state.processes[index].minimized = !was_minimized;
            if was_minimized {
                // Un-minimizing reveals the window on top, not behind.
                raise_process(state, id);
            }
        }
        ShellAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        ShellAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
    }
}

/// Returns the greatest stack order among all processes, minimized included.
pub fn max_stack_order(state: &ShellState) -> u32 {
    state
        .processes
        .iter()
        .map(|process| process.stack_order)
        .max()
        .unwrap_or(0)
}

/// Returns the frontmost non-minimized process, if any.
pub fn frontmost_process(state: &ShellState) -> Option<ProcessId> {
    state
        .processes
        .iter()
        .filter(|process| !process.minimized)
        .max_by_key(|process| process.stack_order)
        .map(|process| process.id)
}

fn next_process_id(state: &mut ShellState) -> ProcessId {
    let id = ProcessId(state.next_process_id);
    state.next_process_id = state.next_process_id.saturating_add(1);
    id
}

fn raise_process(state: &mut ShellState, id: ProcessId) {
    let top = max_stack_order(state) + 1;
    if let Some(process) = state
        .processes
        .iter_mut()
        .find(|process| process.id == id)
    {
        process.stack_order = top;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open(state: &mut ShellState, kind: ApplicationKind) -> ProcessId {
        apply_shell_action(state, ShellAction::OpenProcess { kind });
        state.processes.last().expect("process").id
    }

    fn record(state: &ShellState, id: ProcessId) -> ProcessRecord {
        *state
            .processes
            .iter()
            .find(|process| process.id == id)
            .expect("record")
    }

    #[test]
    fn open_assigns_pairwise_distinct_ids() {
        let mut state = ShellState::default();
        let mut ids = Vec::new();
        for _ in 0..16 {
            ids.push(open(&mut state, ApplicationKind::Notepad));
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn open_stacks_each_new_process_on_top() {
        let mut state = ShellState::default();
        let first = open(&mut state, ApplicationKind::Notepad);
        let second = open(&mut state, ApplicationKind::Webview);

        assert_eq!(record(&state, first).stack_order, 1);
        assert_eq!(record(&state, second).stack_order, 2);
        assert_eq!(frontmost_process(&state), Some(second));
    }

    #[test]
    fn focus_raises_strictly_above_every_other_process() {
        let mut state = ShellState::default();
        let first = open(&mut state, ApplicationKind::Notepad);
        let second = open(&mut state, ApplicationKind::Webview);
        let third = open(&mut state, ApplicationKind::Codepad);

        apply_shell_action(&mut state, ShellAction::FocusProcess { id: first });

        let focused = record(&state, first).stack_order;
        for other in [second, third] {
            assert!(focused > record(&state, other).stack_order);
        }
        assert_eq!(frontmost_process(&state), Some(first));
    }

    #[test]
    fn focus_preserves_registry_insertion_order() {
        let mut state = ShellState::default();
        let first = open(&mut state, ApplicationKind::Notepad);
        let second = open(&mut state, ApplicationKind::Webview);

        apply_shell_action(&mut state, ShellAction::FocusProcess { id: first });

        let order: Vec<ProcessId> = state.processes.iter().map(|process| process.id).collect();
        assert_eq!(order, vec![first, second]);
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = ShellState::default();
        let keep = open(&mut state, ApplicationKind::Notepad);
        let gone = open(&mut state, ApplicationKind::Webview);

        apply_shell_action(&mut state, ShellAction::CloseProcess { id: gone });
        let after_first = state.clone();
        apply_shell_action(&mut state, ShellAction::CloseProcess { id: gone });

        assert_eq!(state, after_first);
        assert_eq!(state.processes.len(), 1);
        assert_eq!(state.processes[0].id, keep);
    }

    #[test]
    fn focus_and_minimize_on_absent_ids_are_noops() {
        let mut state = ShellState::default();
        let only = open(&mut state, ApplicationKind::Notepad);
        let before = state.clone();
        let absent = ProcessId(only.0 + 100);

        apply_shell_action(&mut state, ShellAction::FocusProcess { id: absent });
        apply_shell_action(&mut state, ShellAction::ToggleMinimize { id: absent });

        assert_eq!(state, before);
    }

    #[test]
    fn toggle_minimize_is_its_own_inverse_and_unminimize_refocuses() {
        let mut state = ShellState::default();
        let first = open(&mut state, ApplicationKind::Notepad);
        let second = open(&mut state, ApplicationKind::Webview);

        apply_shell_action(&mut state, ShellAction::ToggleMinimize { id: first });
        assert!(record(&state, first).minimized);
        assert_eq!(frontmost_process(&state), Some(second));

        apply_shell_action(&mut state, ShellAction::ToggleMinimize { id: first });
        let restored = record(&state, first);
        assert!(!restored.minimized);
        assert_eq!(restored.stack_order, max_stack_order(&state));
        assert_eq!(frontmost_process(&state), Some(first));
    }

    #[test]
    fn minimized_processes_stay_in_the_registry() {
        let mut state = ShellState::default();
        let id = open(&mut state, ApplicationKind::Codepad);
        apply_shell_action(&mut state, ShellAction::ToggleMinimize { id });

        assert_eq!(state.processes.len(), 1);
        assert_eq!(frontmost_process(&state), None);
    }

    #[test]
    fn focus_counts_minimized_processes_toward_the_stack_maximum() {
        let mut state = ShellState::default();
        let first = open(&mut state, ApplicationKind::Notepad);
        let second = open(&mut state, ApplicationKind::Webview);

        // Give the minimized window the current maximum, then focus the other.
        apply_shell_action(&mut state, ShellAction::FocusProcess { id: second });
        apply_shell_action(&mut state, ShellAction::ToggleMinimize { id: second });
        apply_shell_action(&mut state, ShellAction::FocusProcess { id: first });

        assert!(record(&state, first).stack_order > record(&state, second).stack_order);
    }

    #[test]
    fn minimize_restore_focus_scenario_matches_stack_expectations() {
        let mut state = ShellState::default();
        let a = open(&mut state, ApplicationKind::from_tag(1));
        let b = open(&mut state, ApplicationKind::from_tag(2));
        assert_eq!(record(&state, a).stack_order, 1);
        assert_eq!(record(&state, b).stack_order, 2);

        apply_shell_action(&mut state, ShellAction::FocusProcess { id: a });
        assert_eq!(record(&state, a).stack_order, 3);
        assert_eq!(record(&state, b).stack_order, 2);

        apply_shell_action(&mut state, ShellAction::ToggleMinimize { id: b });
        assert!(record(&state, b).minimized);
        assert_eq!(record(&state, b).stack_order, 2);

        apply_shell_action(&mut state, ShellAction::ToggleMinimize { id: b });
        assert!(!record(&state, b).minimized);
        assert_eq!(record(&state, b).stack_order, 4);
    }

    #[test]
    fn opening_a_process_closes_the_start_panel() {
        let mut state = ShellState::default();
        apply_shell_action(&mut state, ShellAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        open(&mut state, ApplicationKind::Webview);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn unrecognized_tags_open_as_unknown_processes() {
        let mut state = ShellState::default();
        let id = open(&mut state, ApplicationKind::from_tag(42));
        assert_eq!(record(&state, id).kind, ApplicationKind::Unknown);
    }
}
