use chrono::{DateTime, Utc};
use leptos::*;
use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, ServiceType, TrackingMode},
    config,
    pages::dashboard::{
        repository::{DashboardRepository, HoursTotals, TodayObjects},
        utils,
    },
    state::{
        auth::use_auth,
        time_clock::{ClockError, TimeClock},
    },
    utils::timer::{run_after, use_interval, RequestScope},
};

#[derive(Clone, Debug, PartialEq)]
pub enum ClockCommand {
    CheckIn { object_id: i64, notes: String },
    CheckOut,
    PauseStart,
    PauseEnd,
    SwitchObject { object_id: i64, notes: String },
}

impl ClockCommand {
    fn success_message(&self) -> &'static str {
        match self {
            Self::CheckIn { .. } => "Eingestempelt.",
            Self::CheckOut => "Ausgestempelt.",
            Self::PauseStart => "Pause gestartet.",
            Self::PauseEnd => "Pause beendet.",
            Self::SwitchObject { .. } => "Objekt gewechselt.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClockOutcome {
    pub clock: TimeClock,
    pub message: &'static str,
}

/// Runs one clock command against the backend and returns the next local state.
pub async fn run_clock_command(
    repo: &DashboardRepository,
    clock: &TimeClock,
    command: &ClockCommand,
    tz: chrono_tz::Tz,
) -> Result<TimeClock, ApiError> {
    match command {
        ClockCommand::CheckIn { object_id, notes } => {
            repo.check_in(clock, *object_id, notes.clone(), tz).await
        }
        ClockCommand::CheckOut => repo.check_out(clock, tz).await,
        ClockCommand::PauseStart => repo.pause_start(clock, tz).await,
        ClockCommand::PauseEnd => repo.pause_end(clock, tz).await,
        ClockCommand::SwitchObject { object_id, notes } => {
            repo.switch_object(clock, *object_id, notes.clone(), tz).await
        }
    }
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub mode: Memo<TrackingMode>,
    pub clock: RwSignal<TimeClock>,
    pub now: RwSignal<DateTime<Utc>>,
    pub objects_resource: Resource<(), Result<TodayObjects, ApiError>>,
    pub totals_resource: Resource<(u32, u32, usize), Result<HoursTotals, ApiError>>,
    /// Bumped after every successful clock command so the totals reload.
    pub totals_epoch: RwSignal<u32>,
    pub selected_object: RwSignal<Option<i64>>,
    pub service_type: RwSignal<ServiceType>,
    pub with_colleague: RwSignal<bool>,
    pub colleague: RwSignal<String>,
    pub clock_action: Action<ClockCommand, Result<ClockOutcome, ApiError>>,
    pub presence_action: Action<i64, String>,
    pub presence_label: RwSignal<String>,
    pub message: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = DashboardRepository::new_with_client(Rc::new(api));
        let (auth, _) = use_auth();
        let mode = create_memo(move |_| {
            auth.get()
                .session
                .map(|session| session.effective_tracking_mode())
                .unwrap_or_default()
        });

        let clock = create_rw_signal(TimeClock::Idle);
        let now = create_rw_signal(Utc::now());
        let poll_tick = create_rw_signal(0u32);
        let message = create_rw_signal(None::<ApiError>);
        let notice = create_rw_signal(None::<String>);

        let scope = RequestScope::new();
        let objects_repo = repo.clone();
        let objects_resource = create_resource(
            || (),
            move |_| {
                let repo = objects_repo.clone();
                async move { scope.run(repo.load_objects()).await? }
            },
        );

        let status_repo = repo.clone();
        let status_resource = create_resource(
            move || poll_tick.get(),
            move |_| {
                let repo = status_repo.clone();
                async move { scope.run(repo.load_status()).await? }
            },
        );

        let action_repo = repo.clone();
        let clock_action = create_action(move |command: &ClockCommand| {
            let repo = action_repo.clone();
            let command = command.clone();
            let current = clock.get_untracked();
            let tz = config::current_time_zone();
            async move {
                let clock = scope
                    .run(run_clock_command(&repo, &current, &command, tz))
                    .await??;
                Ok(ClockOutcome {
                    clock,
                    message: command.success_message(),
                })
            }
        });

        let presence_label = create_rw_signal(utils::PRESENCE_BUTTON_LABEL.to_string());
        let presence_repo = repo.clone();
        let service_type = create_rw_signal(ServiceType::default());
        let presence_action = create_action(move |object_id: &i64| {
            let repo = presence_repo.clone();
            let object_id = *object_id;
            let kind = service_type.get_untracked();
            async move {
                let result = scope
                    .run(repo.was_present(object_id, kind))
                    .await
                    .unwrap_or_else(|aborted| Err(aborted.into()));
                if let Err(err) = &result {
                    log::warn!("presence booking failed: {}", err);
                }
                utils::presence_feedback(&result)
            }
        });

        let totals_epoch = create_rw_signal(0u32);
        let totals_repo = repo;
        let totals_resource = create_resource(
            move || (poll_tick.get(), totals_epoch.get(), presence_action.version().get()),
            move |_| {
                let repo = totals_repo.clone();
                async move { scope.run(repo.load_totals()).await? }
            },
        );

        let selected_object = create_rw_signal(None::<i64>);

        create_effect(move |_| {
            if let Some(Ok(snapshot)) = status_resource.get() {
                if clock_action.pending().get_untracked() {
                    return;
                }
                let next = snapshot.to_clock(config::current_time_zone());
                if let Some(entry) = next.active() {
                    selected_object.set(Some(entry.object_id));
                }
                clock.set(next);
            }
        });

        create_effect(move |_| {
            if let Some(Ok(today)) = objects_resource.get() {
                if selected_object.get_untracked().is_none() {
                    selected_object.set(today.objects.first().map(|object| object.id));
                }
            }
        });

        create_effect(move |_| {
            if let Some(label) = presence_action.value().get() {
                presence_label.set(label);
                run_after(utils::PRESENCE_FEEDBACK_MS, move || {
                    presence_label.set(utils::PRESENCE_BUTTON_LABEL.to_string());
                });
            }
        });

        use_interval(1_000, move || now.set(Utc::now()));
        use_interval(config::status_poll_ms(), move || {
            poll_tick.update(|tick| *tick = tick.wrapping_add(1))
        });

        let vm = Self {
            mode,
            clock,
            now,
            objects_resource,
            totals_resource,
            totals_epoch,
            selected_object,
            service_type,
            with_colleague: create_rw_signal(false),
            colleague: create_rw_signal(String::new()),
            clock_action,
            presence_action,
            presence_label,
            message,
            notice,
        };

        create_effect(move |_| {
            if let Some(result) = clock_action.value().get() {
                vm.apply_clock_result(result);
            }
        });

        vm
    }

    /// Folds a finished clock command into the page state.
    pub fn apply_clock_result(&self, result: Result<ClockOutcome, ApiError>) {
        match result {
            Ok(outcome) => {
                let mut next = outcome.clock;
                if let TimeClock::Working(entry) = &mut next {
                    if entry.object_name.is_none() {
                        let object_id = entry.object_id;
                        let objects_resource = self.objects_resource;
                        entry.object_name = untrack(|| {
                            objects_resource.with(|loaded| {
                                loaded.as_ref().map(|loaded| {
                                    loaded.as_ref().ok().and_then(|today| {
                                        today
                                            .objects
                                            .iter()
                                            .find(|o| o.id == object_id)
                                            .map(|object| object.name.clone())
                                    })
                                })
                            })
                        })
                        .flatten();
                    }
                }
                self.clock.set(next);
                self.message.set(None);
                self.notice.set(Some(outcome.message.to_string()));
                self.totals_epoch.update(|epoch| *epoch = epoch.wrapping_add(1));
            }
            Err(err) => {
                self.notice.set(None);
                self.message.set(Some(err));
            }
        }
    }

    pub fn elapsed_seconds(&self) -> Signal<i64> {
        let clock = self.clock;
        let now = self.now;
        Signal::derive(move || clock.with(|c| c.elapsed_work_seconds(now.get())))
    }

    fn notes(&self) -> String {
        let colleague = self
            .with_colleague
            .get_untracked()
            .then(|| self.colleague.get_untracked());
        utils::check_in_notes(colleague.as_deref())
    }

    fn dispatch(&self, command: ClockCommand) {
        if self.clock_action.pending().get_untracked() {
            return;
        }
        self.message.set(None);
        self.notice.set(None);
        self.clock_action.dispatch(command);
    }

    fn reject(&self, error: ClockError) {
        self.notice.set(None);
        self.message.set(Some(error.into()));
    }

    pub fn check_in(&self) {
        let Some(object_id) = self.selected_object.get_untracked() else {
            self.reject(ClockError::NoObjectSelected);
            return;
        };
        if let Err(err) = self.clock.with_untracked(TimeClock::ensure_can_check_in) {
            self.reject(err);
            return;
        }
        self.dispatch(ClockCommand::CheckIn {
            object_id,
            notes: self.notes(),
        });
    }

    pub fn check_out(&self) {
        if let Err(err) = self.clock.with_untracked(TimeClock::ensure_can_check_out) {
            self.reject(err);
            return;
        }
        self.dispatch(ClockCommand::CheckOut);
    }

    pub fn toggle_pause(&self) {
        let paused = self.clock.with_untracked(TimeClock::is_paused);
        let guard = self.clock.with_untracked(|clock| {
            if paused {
                clock.ensure_can_end_pause().map(|_| ())
            } else {
                clock.ensure_can_start_pause().map(|_| ())
            }
        });
        if let Err(err) = guard {
            self.reject(err);
            return;
        }
        self.dispatch(if paused {
            ClockCommand::PauseEnd
        } else {
            ClockCommand::PauseStart
        });
    }

    pub fn switch_object(&self) {
        let Some(object_id) = self.selected_object.get_untracked() else {
            self.reject(ClockError::NoObjectSelected);
            return;
        };
        if let Err(err) = self.clock.with_untracked(TimeClock::ensure_can_check_out) {
            self.reject(err);
            return;
        }
        self.dispatch(ClockCommand::SwitchObject {
            object_id,
            notes: self.notes(),
        });
    }

    pub fn report_presence(&self) {
        if self.presence_action.pending().get_untracked() {
            return;
        }
        let Some(object_id) = self.selected_object.get_untracked() else {
            self.reject(ClockError::NoObjectSelected);
            return;
        };
        self.message.set(None);
        self.presence_action.dispatch(object_id);
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
