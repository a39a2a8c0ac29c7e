use leptos::*;
use std::rc::Rc;

use super::{
    repository::{AdminRepository, OverviewSnapshot},
    utils::{
        parse_default_hours, AdminTab, CustomerFormState, EmployeeFormState, SpecialRuleFormState,
    },
};
use crate::{
    api::{
        ApiClient, ApiError, Customer, CustomerHours, CustomerHoursUpdate, CustomerInput,
        Employee, EmployeeInput, EmployeeWithCategory, SpecialRule, SpecialRuleInput,
        TrackingMode, UpdateCategoryRequest,
    },
    components::toast::{use_toasts, Toasts},
    config,
    utils::timer::{use_interval, RequestScope},
};

#[derive(Clone, Debug, PartialEq)]
pub enum AdminCommand {
    SaveEmployee { id: Option<i64>, input: EmployeeInput },
    DeleteEmployee(i64),
    SaveCustomer { id: Option<i64>, input: CustomerInput },
    DeleteCustomer(i64),
    UpdateCustomerHours(CustomerHoursUpdate),
    CreateSpecialRule(SpecialRuleInput),
    DeleteSpecialRule(i64),
    UpdateCategory(UpdateCategoryRequest),
}

pub async fn run_admin_command(
    repo: &AdminRepository,
    command: &AdminCommand,
) -> Result<&'static str, ApiError> {
    match command {
        AdminCommand::SaveEmployee { id, input } => {
            repo.save_employee(*id, input).await?;
            Ok(if id.is_some() {
                "Mitarbeiter aktualisiert"
            } else {
                "Mitarbeiter hinzugefügt"
            })
        }
        AdminCommand::DeleteEmployee(id) => {
            repo.delete_employee(*id).await?;
            Ok("Mitarbeiter gelöscht")
        }
        AdminCommand::SaveCustomer { id, input } => {
            repo.save_customer(*id, input).await?;
            Ok(if id.is_some() {
                "Kunde aktualisiert"
            } else {
                "Kunde hinzugefügt"
            })
        }
        AdminCommand::DeleteCustomer(id) => {
            repo.delete_customer(*id).await?;
            Ok("Kunde gelöscht")
        }
        AdminCommand::UpdateCustomerHours(update) => {
            repo.update_customer_hours(update).await?;
            Ok("Sollstunden gespeichert")
        }
        AdminCommand::CreateSpecialRule(input) => {
            repo.create_special_rule(input).await?;
            Ok("Sonderregel angelegt")
        }
        AdminCommand::DeleteSpecialRule(id) => {
            repo.delete_special_rule(*id).await?;
            Ok("Sonderregel gelöscht")
        }
        AdminCommand::UpdateCategory(request) => {
            repo.update_category(request).await?;
            Ok("Kategorie geändert")
        }
    }
}

/// Entity waiting for delete confirmation.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteTarget {
    Employee { id: i64, name: String },
    Customer { id: i64, name: String },
    SpecialRule { id: i64 },
}

impl DeleteTarget {
    pub fn question(&self) -> String {
        match self {
            Self::Employee { name, .. } => format!("Mitarbeiter {name} wirklich löschen?"),
            Self::Customer { name, .. } => format!("Kunde {name} wirklich löschen?"),
            Self::SpecialRule { .. } => "Sonderregel wirklich löschen?".to_string(),
        }
    }

    fn command(&self) -> AdminCommand {
        match self {
            Self::Employee { id, .. } => AdminCommand::DeleteEmployee(*id),
            Self::Customer { id, .. } => AdminCommand::DeleteCustomer(*id),
            Self::SpecialRule { id } => AdminCommand::DeleteSpecialRule(*id),
        }
    }
}

pub type ListResource<T> = Resource<(bool, u32), Result<Vec<T>, ApiError>>;

/// Loads only while `active` holds so hidden tabs stay quiet.
fn gated_list<T, F, Fut>(
    scope: RequestScope,
    active: Memo<bool>,
    reload: RwSignal<u32>,
    fetch: F,
) -> ListResource<T>
where
    T: Clone + serde::Serialize + serde::de::DeserializeOwned + 'static,
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    create_resource(
        move || (active.get(), reload.get()),
        move |(active, _)| {
            let pending = active.then(&fetch);
            async move {
                match pending {
                    Some(fetching) => scope.run(fetching).await?,
                    None => Ok(Vec::new()),
                }
            }
        },
    )
}

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub tab: RwSignal<AdminTab>,
    pub toasts: Toasts,
    pub overview_resource: Resource<(bool, u32), Option<OverviewSnapshot>>,
    pub employees_resource: ListResource<Employee>,
    pub customers_resource: ListResource<Customer>,
    pub customer_hours_resource: ListResource<CustomerHours>,
    pub special_rules_resource: ListResource<SpecialRule>,
    pub categories_resource: ListResource<EmployeeWithCategory>,
    pub search: RwSignal<String>,
    pub category_filter: RwSignal<Option<TrackingMode>>,
    pub employee_form: EmployeeFormState,
    pub editing_employee: RwSignal<Option<i64>>,
    pub employee_dialog_open: RwSignal<bool>,
    pub customer_form: CustomerFormState,
    pub editing_customer: RwSignal<Option<i64>>,
    pub customer_dialog_open: RwSignal<bool>,
    pub rule_form: SpecialRuleFormState,
    pub pending_delete: RwSignal<Option<DeleteTarget>>,
    pub action: Action<AdminCommand, Result<&'static str, ApiError>>,
    reload: RwSignal<u32>,
}

impl AdminViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = AdminRepository::new_with_client(Rc::new(api));
        let toasts = use_toasts();
        let tab = create_rw_signal(AdminTab::default());
        let reload = create_rw_signal(0u32);
        let poll_tick = create_rw_signal(0u32);
        let scope = RequestScope::new();

        let showing = move |wanted: &'static [AdminTab]| {
            create_memo(move |_| wanted.contains(&tab.get()))
        };

        let overview_active = showing(&[AdminTab::Overview]);
        let overview_repo = repo.clone();
        let overview_resource = create_resource(
            move || (overview_active.get(), poll_tick.get()),
            move |(active, _)| {
                let repo = overview_repo.clone();
                async move {
                    if active {
                        scope.run(repo.load_overview()).await.ok()
                    } else {
                        None
                    }
                }
            },
        );

        let r = repo.clone();
        let employees_resource = gated_list(
            scope,
            showing(&[AdminTab::Employees, AdminTab::SpecialRules]),
            reload,
            move || {
                let r = r.clone();
                async move { r.list_employees().await }
            },
        );
        let r = repo.clone();
        let customers_resource = gated_list(
            scope,
            showing(&[AdminTab::Customers, AdminTab::SpecialRules]),
            reload,
            move || {
                let r = r.clone();
                async move { r.list_customers().await }
            },
        );
        let r = repo.clone();
        let customer_hours_resource = gated_list(scope, showing(&[AdminTab::CustomerHours]), reload, move || {
            let r = r.clone();
            async move { r.list_customer_hours().await }
        });
        let r = repo.clone();
        let special_rules_resource = gated_list(scope, showing(&[AdminTab::SpecialRules]), reload, move || {
            let r = r.clone();
            async move { r.list_special_rules().await }
        });
        let r = repo.clone();
        let categories_resource = gated_list(scope, showing(&[AdminTab::Categories]), reload, move || {
            let r = r.clone();
            async move { r.list_categories().await }
        });

        let action = create_action(move |command: &AdminCommand| {
            let repo = repo.clone();
            let command = command.clone();
            async move { scope.run(run_admin_command(&repo, &command)).await? }
        });

        let employee_dialog_open = create_rw_signal(false);
        let customer_dialog_open = create_rw_signal(false);
        let pending_delete = create_rw_signal(None::<DeleteTarget>);
        let rule_form = SpecialRuleFormState::new();

        create_effect(move |_| {
            let Some(result) = action.value().get() else {
                return;
            };
            match result {
                Ok(message) => {
                    employee_dialog_open.set(false);
                    customer_dialog_open.set(false);
                    pending_delete.set(None);
                    toasts.success(message);
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(err) => {
                    log::warn!("admin change failed: {}", err);
                    pending_delete.set(None);
                    toasts.error(err.error);
                }
            }
        });

        use_interval(config::admin_poll_ms(), move || {
            poll_tick.update(|tick| *tick = tick.wrapping_add(1))
        });

        Self {
            tab,
            toasts,
            overview_resource,
            employees_resource,
            customers_resource,
            customer_hours_resource,
            special_rules_resource,
            categories_resource,
            search: create_rw_signal(String::new()),
            category_filter: create_rw_signal(None),
            employee_form: EmployeeFormState::new(),
            editing_employee: create_rw_signal(None),
            employee_dialog_open,
            customer_form: CustomerFormState::new(),
            editing_customer: create_rw_signal(None),
            customer_dialog_open,
            rule_form,
            pending_delete,
            action,
            reload,
        }
    }

    pub fn select_tab(&self, tab: AdminTab) {
        self.tab.set(tab);
    }

    pub fn reload(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
        self.toasts.info("Daten werden aktualisiert.");
    }

    fn dispatch(&self, command: AdminCommand) {
        if self.action.pending().get_untracked() {
            return;
        }
        self.action.dispatch(command);
    }

    fn reject(&self, error: ApiError) {
        self.toasts.error(error.error);
    }

    pub fn open_new_employee(&self) {
        self.employee_form.reset();
        self.editing_employee.set(None);
        self.employee_dialog_open.set(true);
    }

    pub fn open_edit_employee(&self, employee: &Employee) {
        self.employee_form.fill(employee);
        self.editing_employee.set(Some(employee.id));
        self.employee_dialog_open.set(true);
    }

    pub fn save_employee(&self) {
        match self.employee_form.to_input() {
            Ok(input) => self.dispatch(AdminCommand::SaveEmployee {
                id: self.editing_employee.get_untracked(),
                input,
            }),
            Err(err) => self.reject(err),
        }
    }

    pub fn open_new_customer(&self) {
        self.customer_form.reset();
        self.editing_customer.set(None);
        self.customer_dialog_open.set(true);
    }

    pub fn open_edit_customer(&self, customer: &Customer) {
        self.customer_form.fill(customer);
        self.editing_customer.set(Some(customer.id));
        self.customer_dialog_open.set(true);
    }

    pub fn save_customer(&self) {
        match self.customer_form.to_input() {
            Ok(input) => self.dispatch(AdminCommand::SaveCustomer {
                id: self.editing_customer.get_untracked(),
                input,
            }),
            Err(err) => self.reject(err),
        }
    }

    pub fn save_customer_hours(&self, customer_id: i64, raw: &str) {
        match parse_default_hours(raw) {
            Ok(default_hours) => self.dispatch(AdminCommand::UpdateCustomerHours(
                CustomerHoursUpdate {
                    customer_id,
                    default_hours,
                },
            )),
            Err(err) => self.reject(err),
        }
    }

    pub fn save_special_rule(&self) {
        match self.rule_form.to_input() {
            Ok(input) => {
                self.rule_form.reset();
                self.dispatch(AdminCommand::CreateSpecialRule(input));
            }
            Err(err) => self.reject(err),
        }
    }

    pub fn change_category(&self, employee_id: i64, tracking_mode: TrackingMode, gps_required: bool) {
        self.dispatch(AdminCommand::UpdateCategory(UpdateCategoryRequest {
            employee_id,
            tracking_mode,
            gps_required,
        }));
    }

    pub fn request_delete(&self, target: DeleteTarget) {
        self.pending_delete.set(Some(target));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(target) = self.pending_delete.get_untracked() {
            self.dispatch(target.command());
        }
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    match use_context::<AdminViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
