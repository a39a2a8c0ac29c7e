use chrono::Datelike;
use leptos::*;
use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, ScheduledShift},
    pages::schedule::{
        repository::{ScheduleRepository, WeekLoad},
        utils::{ShiftDraft, WeekView},
    },
    utils::{
        time::{today_in_app_tz, week_monday},
        timer::RequestScope,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub enum ScheduleCommand {
    Add(ShiftDraft),
    Edit(ShiftDraft),
    Delete(i64),
    CopyWeek { source: i32, target: i32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleOutcome {
    pub message: &'static str,
    /// Week offset to show afterwards; `None` reloads the current one.
    pub navigate_to: Option<i32>,
}

pub async fn run_schedule_command(
    repo: &ScheduleRepository,
    command: &ScheduleCommand,
) -> Result<ScheduleOutcome, ApiError> {
    let (message, navigate_to) = match command {
        ScheduleCommand::Add(draft) => {
            repo.add_shift(draft).await?;
            ("Schicht hinzugefügt.", None)
        }
        ScheduleCommand::Edit(draft) => {
            repo.edit_shift(draft).await?;
            ("Schicht gespeichert.", None)
        }
        ScheduleCommand::Delete(shift_id) => {
            repo.delete_shift(*shift_id).await?;
            ("Schicht gelöscht.", None)
        }
        ScheduleCommand::CopyWeek { source, target } => {
            repo.copy_week(today_in_app_tz(), *source, *target).await?;
            ("Woche kopiert.", Some(*target))
        }
    };
    Ok(ScheduleOutcome {
        message,
        navigate_to,
    })
}

#[derive(Clone, Copy)]
pub struct ScheduleViewModel {
    pub week_offset: RwSignal<i32>,
    pub week_resource: Resource<(i32, u32), WeekLoad>,
    pub draft: RwSignal<Option<ShiftDraft>>,
    pub pending_delete: RwSignal<Option<i64>>,
    pub copy_open: RwSignal<bool>,
    pub action: Action<ScheduleCommand, Result<ScheduleOutcome, ApiError>>,
    pub message: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    refresh: RwSignal<u32>,
}

impl ScheduleViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = ScheduleRepository::new_with_client(Rc::new(api));

        let week_offset = create_rw_signal(0i32);
        let refresh = create_rw_signal(0u32);
        let message = create_rw_signal(None::<ApiError>);
        let notice = create_rw_signal(None::<String>);
        let draft = create_rw_signal(None::<ShiftDraft>);
        let pending_delete = create_rw_signal(None::<i64>);
        let copy_open = create_rw_signal(false);

        let scope = RequestScope::new();
        let load_repo = repo.clone();
        let week_resource = create_resource(
            move || (week_offset.get(), refresh.get()),
            move |(offset, _)| {
                let repo = load_repo.clone();
                async move {
                    scope
                        .run(repo.load_week(offset))
                        .await
                        .unwrap_or_else(|aborted| WeekLoad::from(ApiError::from(aborted)))
                }
            },
        );

        let action = create_action(move |command: &ScheduleCommand| {
            let repo = repo.clone();
            let command = command.clone();
            async move { scope.run(run_schedule_command(&repo, &command)).await? }
        });

        create_effect(move |_| {
            let Some(result) = action.value().get() else {
                return;
            };
            match result {
                Ok(outcome) => {
                    draft.set(None);
                    pending_delete.set(None);
                    copy_open.set(false);
                    message.set(None);
                    notice.set(Some(outcome.message.to_string()));
                    match outcome.navigate_to {
                        Some(target) => week_offset.set(target),
                        None => refresh.update(|n| *n = n.wrapping_add(1)),
                    }
                }
                Err(err) => {
                    log::warn!("schedule change failed: {}", err);
                    notice.set(None);
                    message.set(Some(err));
                }
            }
        });

        Self {
            week_offset,
            week_resource,
            draft,
            pending_delete,
            copy_open,
            action,
            message,
            notice,
            refresh,
        }
    }

    /// "KW n / yyyy", from the loaded week or computed locally until it arrives.
    pub fn week_label(&self) -> Signal<String> {
        let resource = self.week_resource;
        let offset = self.week_offset;
        Signal::derive(move || {
            let loaded = resource
                .get()
                .and_then(|load| load.week.ok())
                .map(|week| (week.week_number, week.year));
            let (number, year) = loaded.unwrap_or_else(|| {
                let iso = week_monday(today_in_app_tz(), offset.get()).iso_week();
                (iso.week(), iso.year())
            });
            format!("KW {number} / {year}")
        })
    }

    /// Shift count of the loaded week, empty while loading or on error.
    pub fn shift_summary(&self) -> Signal<Option<String>> {
        let resource = self.week_resource;
        Signal::derive(move || {
            resource
                .with(|load| {
                    load.as_ref()
                        .map(|load| load.week.as_ref().ok().map(WeekView::shift_summary))
                })
                .flatten()
        })
    }

    pub fn previous_week(&self) {
        self.week_offset.update(|offset| *offset -= 1);
    }

    pub fn next_week(&self) {
        self.week_offset.update(|offset| *offset += 1);
    }

    pub fn current_week(&self) {
        self.week_offset.set(0);
    }

    pub fn reload(&self) {
        self.refresh.update(|n| *n = n.wrapping_add(1));
    }

    pub fn open_add(&self, weekday: u32) {
        self.message.set(None);
        self.draft.set(Some(ShiftDraft::new_for(weekday)));
    }

    pub fn open_edit(&self, shift: &ScheduledShift, weekday: u32) {
        self.message.set(None);
        self.draft.set(Some(ShiftDraft::from_shift(shift, weekday)));
    }

    pub fn close_draft(&self) {
        self.draft.set(None);
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut ShiftDraft)) {
        self.draft.update(|draft| {
            if let Some(draft) = draft.as_mut() {
                f(draft);
            }
        });
    }

    pub fn save_draft(&self) {
        let Some(draft) = self.draft.get_untracked() else {
            return;
        };
        let checked = if draft.is_edit() {
            draft.to_update().map(|_| ())
        } else {
            draft.to_quick_assign().map(|_| ())
        };
        if let Err(err) = checked {
            self.message.set(Some(err));
            return;
        }
        self.dispatch(if draft.is_edit() {
            ScheduleCommand::Edit(draft)
        } else {
            ScheduleCommand::Add(draft)
        });
    }

    pub fn request_delete(&self) {
        let shift_id = self.draft.with_untracked(|draft| draft.as_ref().and_then(|d| d.id));
        self.pending_delete.set(shift_id);
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(shift_id) = self.pending_delete.get_untracked() {
            self.dispatch(ScheduleCommand::Delete(shift_id));
        }
    }

    pub fn copy_to(&self, target: i32) {
        let source = self.week_offset.get_untracked();
        self.dispatch(ScheduleCommand::CopyWeek { source, target });
    }

    fn dispatch(&self, command: ScheduleCommand) {
        if self.action.pending().get_untracked() {
            return;
        }
        self.message.set(None);
        self.notice.set(None);
        self.action.dispatch(command);
    }
}

pub fn use_schedule_view_model() -> ScheduleViewModel {
    match use_context::<ScheduleViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ScheduleViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{test_support::mock::*, ShiftStatus};
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    fn with_vm(f: impl FnOnce(ScheduleViewModel)) {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            f(ScheduleViewModel::new());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn week_navigation_moves_offset() {
        with_vm(|vm| {
            vm.next_week();
            vm.next_week();
            assert_eq!(vm.week_offset.get(), 2);
            vm.previous_week();
            assert_eq!(vm.week_offset.get(), 1);
            vm.current_week();
            assert_eq!(vm.week_offset.get(), 0);
            assert!(vm.week_label().get().starts_with("KW "));
        });
    }

    #[test]
    fn add_dialog_starts_with_default_times() {
        with_vm(|vm| {
            vm.open_add(4);
            let draft = vm.draft.get().unwrap();
            assert_eq!(draft.weekday, 4);
            assert_eq!(draft.start_time, "06:00");
            assert_eq!(draft.end_time, "14:00");
            assert!(!draft.is_edit());
        });
    }

    #[test]
    fn incomplete_draft_is_not_dispatched() {
        with_vm(|vm| {
            vm.open_add(0);
            vm.update_draft(|draft| draft.employee_id = Some(4));
            vm.save_draft();
            assert_eq!(
                vm.message.get().map(|e| e.error).as_deref(),
                Some("Bitte Mitarbeiter und Objekt auswählen")
            );
            assert_eq!(vm.action.version().get(), 0);
            assert!(vm.draft.get().is_some());
        });
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        with_vm(|vm| {
            vm.draft.set(Some(ShiftDraft {
                id: Some(9),
                status: ShiftStatus::Sick,
                ..ShiftDraft::new_for(1)
            }));
            vm.request_delete();
            assert_eq!(vm.pending_delete.get(), Some(9));
            vm.cancel_delete();
            assert_eq!(vm.pending_delete.get(), None);
            assert_eq!(vm.action.version().get(), 0);
        });
    }

    #[tokio::test]
    async fn copy_week_navigates_to_target() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/admin/schedules/copy-week");
            then.status(200).json_body(json!({ "copied": 3 }));
        });
        let repo = ScheduleRepository::new_with_client(Rc::new(signed_in_client(&server)));

        let outcome = run_schedule_command(&repo, &ScheduleCommand::CopyWeek { source: 1, target: 3 })
            .await
            .unwrap();
        assert_eq!(outcome.navigate_to, Some(3));
        assert_eq!(outcome.message, "Woche kopiert.");
    }

    #[tokio::test]
    async fn delete_reloads_current_week() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/admin/schedules/12");
            then.status(200).json_body(json!({}));
        });
        let repo = ScheduleRepository::new_with_client(Rc::new(signed_in_client(&server)));

        let outcome = run_schedule_command(&repo, &ScheduleCommand::Delete(12))
            .await
            .unwrap();
        assert_eq!(outcome.navigate_to, None);
    }
}
