use uuid::Uuid;

use stride_core::error::CoreError;
use stride_core::models::goal::GoalDraft;
use stride_core::models::progress::CheckIn;
use stride_core::models::task::{Priority, TaskDraft, TaskUpdate};
use stride_store::error::StoreError;
use stride_store::state::GoalState;

fn run_5k() -> GoalDraft {
    GoalDraft {
        goal: "Run 5k".to_string(),
        motivation: "health".to_string(),
        consequences: "none".to_string(),
        benefits: "fitness".to_string(),
    }
}

fn with_goal() -> GoalState {
    GoalState::new().set_goal(run_5k())
}

#[test]
fn set_goal_from_empty_state() {
    let state = GoalState::new().set_goal(run_5k());
    let goal = state.current_goal.as_ref().expect("goal set");
    assert_eq!(goal.goal, "Run 5k");
    assert!(goal.tasks.is_empty());
    assert!(goal.progress.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn set_goal_discards_previous_tasks_and_progress() {
    let state = with_goal()
        .add_task(TaskDraft::new("Buy shoes"))
        .and_then(|s| s.add_progress(CheckIn::new(6, 6)))
        .expect("mutations succeed");
    let old_id = state.current_goal.as_ref().map(|g| g.id);

    let replaced = state.set_goal(GoalDraft {
        goal: "Learn Rust".to_string(),
        ..run_5k()
    });
    let goal = replaced.current_goal.as_ref().expect("goal set");
    assert!(goal.tasks.is_empty());
    assert!(goal.progress.is_empty());
    assert_ne!(Some(goal.id), old_id);
}

#[test]
fn mutations_leave_the_receiver_untouched() {
    let before = with_goal();
    let after = before.add_task(TaskDraft::new("Buy shoes")).expect("add task");
    assert!(before.current_goal.as_ref().is_some_and(|g| g.tasks.is_empty()));
    assert_eq!(after.current_goal.as_ref().map(|g| g.tasks.len()), Some(1));
}

#[test]
fn tasks_keep_insertion_order_and_unique_ids() {
    let mut state = with_goal();
    let names = ["one", "two", "three", "four", "five"];
    for name in names {
        state = state.add_task(TaskDraft::new(name)).expect("add task");
    }
    let goal = state.current_goal.expect("goal set");
    let got: Vec<_> = goal.tasks.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(got, names);

    let mut ids: Vec<Uuid> = goal.tasks.iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), names.len());
    assert!(goal.tasks.iter().all(|t| !t.completed));
}

#[test]
fn update_task_marks_completed_without_touching_other_fields() {
    let state = with_goal()
        .add_task(TaskDraft::new("Run 2k").with_priority(Priority::High))
        .expect("add task");
    let before = state.current_goal.as_ref().expect("goal").tasks.clone();
    let t1 = before[0].id;

    let state = state
        .update_task(t1, TaskUpdate::SetCompleted(true))
        .expect("update task");
    let tasks = &state.current_goal.as_ref().expect("goal").tasks;
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].completed);
    assert_eq!(tasks[0].id, before[0].id);
    assert_eq!(tasks[0].description, before[0].description);
    assert_eq!(tasks[0].priority, before[0].priority);
    assert_eq!(tasks[0].due_date, before[0].due_date);
    assert_eq!(tasks[0].deleted, before[0].deleted);
}

#[test]
fn update_unknown_task_is_a_no_op() {
    let state = with_goal().add_task(TaskDraft::new("Run 2k")).expect("add task");
    let next = state
        .update_task(Uuid::new_v4(), TaskUpdate::SetCompleted(true))
        .expect("unknown id is not an error");
    assert_eq!(next, state);
}

#[test]
fn soft_deleted_task_stays_in_raw_sequence() {
    let state = with_goal()
        .add_task(TaskDraft::new("keep"))
        .and_then(|s| s.add_task(TaskDraft::new("drop")))
        .expect("add tasks");
    let drop_id = state.current_goal.as_ref().expect("goal").tasks[1].id;

    let state = state
        .update_task(drop_id, TaskUpdate::SoftDelete)
        .expect("delete");
    let goal = state.current_goal.expect("goal");
    assert_eq!(goal.active_tasks().count(), 1);
    assert!(goal.active_tasks().all(|t| t.id != drop_id));
    let raw = goal.task(drop_id).expect("still present");
    assert!(raw.deleted);
}

#[test]
fn progress_is_append_only_and_monotonic() {
    let mut state = with_goal();
    for i in 1..=5 {
        state = state.add_progress(CheckIn::new(i, 10 - i)).expect("check in");
    }
    let progress = state.current_goal.expect("goal").progress;
    assert_eq!(progress.len(), 5);
    assert!(progress.windows(2).all(|w| w[1].date >= w[0].date));
    assert_eq!(progress.iter().map(|p| p.mood).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn completed_tasks_survive_task_deletion() {
    let state = with_goal().add_task(TaskDraft::new("Run 2k")).expect("add task");
    let t1 = state.current_goal.as_ref().expect("goal").tasks[0].id;
    let state = state
        .add_progress(CheckIn::new(7, 7).with_completed([t1]))
        .and_then(|s| s.update_task(t1, TaskUpdate::SoftDelete))
        .expect("mutations succeed");
    let goal = state.current_goal.expect("goal");
    assert!(goal.progress[0].completed_tasks.contains(&t1));
}

#[test]
fn out_of_range_ratings_are_rejected() {
    let state = with_goal();
    let err = state.add_progress(CheckIn::new(11, 5)).unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(CoreError::InvalidRange {
            field: "mood",
            value: 11,
            min: 1,
            max: 10,
        })
    );
    assert!(matches!(
        state.add_progress(CheckIn::new(5, 0)),
        Err(StoreError::Validation(CoreError::InvalidRange { field: "focus", .. }))
    ));
}

#[test]
fn goal_operations_without_a_goal_report_no_active_goal() {
    let state = GoalState::new();
    assert_eq!(state.add_task(TaskDraft::new("x")), Err(StoreError::NoActiveGoal));
    assert_eq!(
        state.update_task(Uuid::new_v4(), TaskUpdate::ToggleCompleted),
        Err(StoreError::NoActiveGoal)
    );
    assert_eq!(state.add_progress(CheckIn::new(5, 5)), Err(StoreError::NoActiveGoal));
}

#[test]
fn loading_and_error_flags() {
    let state = GoalState::new()
        .set_loading(true)
        .set_error(Some("boom".to_string()));
    assert!(state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(state.current_goal.is_none());
}
