use leptos::*;

use crate::api::{
    ApiError, Customer, CustomerInput, Employee, EmployeeInput, SpecialRuleInput, TrackingMode,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Employees,
    Customers,
    CustomerHours,
    SpecialRules,
    Categories,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        Self::Overview,
        Self::Employees,
        Self::Customers,
        Self::CustomerHours,
        Self::SpecialRules,
        Self::Categories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Übersicht",
            Self::Employees => "Mitarbeiter",
            Self::Customers => "Kunden",
            Self::CustomerHours => "Sollstunden",
            Self::SpecialRules => "Sonderregeln",
            Self::Categories => "Kategorien",
        }
    }
}

/// Decimal input that also accepts a German comma.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

fn optional(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn category_badge(mode: TrackingMode) -> (&'static str, &'static str) {
    match mode {
        TrackingMode::Automatic => ("bg-status-success-bg text-status-success-text", "✅ Auto"),
        TrackingMode::OneTap => ("bg-status-info-bg text-status-info-text", "🔘 Button"),
        TrackingMode::Manual => ("bg-status-warning-bg text-status-warning-text", "📍 Normal"),
    }
}

/// Name or personal number match, optionally narrowed to one category.
pub fn filter_employees(
    employees: &[Employee],
    search: &str,
    category: Option<TrackingMode>,
) -> Vec<Employee> {
    let needle = search.trim().to_lowercase();
    employees
        .iter()
        .filter(|employee| category.map_or(true, |mode| employee.tracking_mode == mode))
        .filter(|employee| {
            needle.is_empty()
                || employee.display_name().to_lowercase().contains(&needle)
                || employee
                    .personal_nr
                    .as_deref()
                    .is_some_and(|nr| nr.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn live_status_label(status: Option<&str>) -> (&'static str, &'static str) {
    match status.map(str::to_lowercase).as_deref() {
        Some("working") | Some("aktiv") | Some("active") => {
            ("bg-status-success-bg text-status-success-text", "Arbeitet")
        }
        Some("paused") | Some("pause") | Some("break") => {
            ("bg-status-warning-bg text-status-warning-text", "Pause")
        }
        _ => ("bg-surface-muted text-fg-muted", "Offline"),
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    pub personal_nr: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub hourly_rate: RwSignal<String>,
    pub tracking_mode: RwSignal<TrackingMode>,
    pub gps_required: RwSignal<bool>,
}

impl EmployeeFormState {
    pub fn new() -> Self {
        Self {
            personal_nr: create_rw_signal(String::new()),
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            hourly_rate: create_rw_signal(String::new()),
            tracking_mode: create_rw_signal(TrackingMode::Manual),
            gps_required: create_rw_signal(false),
        }
    }

    pub fn reset(&self) {
        self.personal_nr.set(String::new());
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.email.set(String::new());
        self.hourly_rate.set(String::new());
        self.tracking_mode.set(TrackingMode::Manual);
        self.gps_required.set(false);
    }

    pub fn fill(&self, employee: &Employee) {
        self.personal_nr
            .set(employee.personal_nr.clone().unwrap_or_default());
        self.first_name
            .set(employee.first_name.clone().unwrap_or_default());
        self.last_name
            .set(employee.last_name.clone().unwrap_or_default());
        self.email.set(employee.email.clone().unwrap_or_default());
        self.hourly_rate.set(
            employee
                .hourly_rate
                .map(|rate| rate.to_string())
                .unwrap_or_default(),
        );
        self.tracking_mode.set(employee.tracking_mode);
        self.gps_required
            .set(employee.gps_required.unwrap_or(false));
    }

    pub fn to_input(&self) -> Result<EmployeeInput, ApiError> {
        let personal_nr = self.personal_nr.get_untracked().trim().to_string();
        let first_name = self.first_name.get_untracked().trim().to_string();
        let last_name = self.last_name.get_untracked().trim().to_string();
        if personal_nr.is_empty() || first_name.is_empty() || last_name.is_empty() {
            return Err(ApiError::validation(
                "Bitte Vorname, Nachname und Personal-Nr ausfüllen",
            ));
        }
        let hourly_rate = parse_amount(&self.hourly_rate.get_untracked())
            .filter(|rate| *rate >= 0.0)
            .ok_or_else(|| ApiError::validation("Bitte einen gültigen Stundensatz eingeben"))?;
        Ok(EmployeeInput {
            personal_nr,
            first_name,
            last_name,
            email: optional(self.email.get_untracked()),
            hourly_rate,
            tracking_mode: self.tracking_mode.get_untracked(),
            gps_required: self.gps_required.get_untracked(),
        })
    }
}

pub const BILLING_TYPES: [(&str, &str); 2] = [("hourly", "Stundenbasis"), ("monthly", "Monatspauschale")];

#[derive(Clone, Copy)]
pub struct CustomerFormState {
    pub name: RwSignal<String>,
    pub address: RwSignal<String>,
    pub billing_type: RwSignal<String>,
    pub hourly_rate: RwSignal<String>,
    pub monthly_rate: RwSignal<String>,
    pub contact_person: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub is_active: RwSignal<bool>,
}

impl CustomerFormState {
    pub fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            address: create_rw_signal(String::new()),
            billing_type: create_rw_signal(BILLING_TYPES[0].0.to_string()),
            hourly_rate: create_rw_signal(String::new()),
            monthly_rate: create_rw_signal(String::new()),
            contact_person: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            is_active: create_rw_signal(true),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.address.set(String::new());
        self.billing_type.set(BILLING_TYPES[0].0.to_string());
        self.hourly_rate.set(String::new());
        self.monthly_rate.set(String::new());
        self.contact_person.set(String::new());
        self.phone.set(String::new());
        self.is_active.set(true);
    }

    pub fn fill(&self, customer: &Customer) {
        let amount = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        self.name.set(customer.name.clone());
        self.address
            .set(customer.address.clone().unwrap_or_default());
        self.billing_type.set(
            customer
                .billing_type
                .clone()
                .unwrap_or_else(|| BILLING_TYPES[0].0.to_string()),
        );
        self.hourly_rate.set(amount(customer.hourly_rate));
        self.monthly_rate.set(amount(customer.monthly_rate));
        self.contact_person
            .set(customer.contact_person.clone().unwrap_or_default());
        self.phone.set(customer.phone.clone().unwrap_or_default());
        self.is_active.set(customer.is_active);
    }

    /// Rates are optional but must be numbers when given.
    pub fn to_input(&self) -> Result<CustomerInput, ApiError> {
        let name = self.name.get_untracked().trim().to_string();
        let address = self.address.get_untracked().trim().to_string();
        if name.is_empty() || address.is_empty() {
            return Err(ApiError::validation("Bitte Name und Adresse ausfüllen"));
        }
        let rate = |raw: String| -> Result<Option<f64>, ApiError> {
            if raw.trim().is_empty() {
                return Ok(None);
            }
            parse_amount(&raw)
                .filter(|v| *v >= 0.0)
                .map(Some)
                .ok_or_else(|| ApiError::validation("Bitte gültige Beträge eingeben"))
        };
        Ok(CustomerInput {
            name,
            address,
            billing_type: self.billing_type.get_untracked(),
            monthly_rate: rate(self.monthly_rate.get_untracked())?,
            hourly_rate: rate(self.hourly_rate.get_untracked())?,
            contact_person: optional(self.contact_person.get_untracked()),
            phone: optional(self.phone.get_untracked()),
            is_active: self.is_active.get_untracked(),
        })
    }
}

#[derive(Clone, Copy)]
pub struct SpecialRuleFormState {
    pub employee_id: RwSignal<Option<i64>>,
    pub customer_id: RwSignal<Option<i64>>,
    pub special_hours: RwSignal<String>,
    pub note: RwSignal<String>,
}

impl SpecialRuleFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(None),
            customer_id: create_rw_signal(None),
            special_hours: create_rw_signal(String::new()),
            note: create_rw_signal(String::new()),
        }
    }

    pub fn reset(&self) {
        self.employee_id.set(None);
        self.customer_id.set(None);
        self.special_hours.set(String::new());
        self.note.set(String::new());
    }

    pub fn to_input(&self) -> Result<SpecialRuleInput, ApiError> {
        let (Some(employee_id), Some(customer_id)) = (
            self.employee_id.get_untracked(),
            self.customer_id.get_untracked(),
        ) else {
            return Err(ApiError::validation("Bitte Mitarbeiter und Kunde auswählen"));
        };
        let special_hours = parse_amount(&self.special_hours.get_untracked())
            .filter(|hours| *hours > 0.0)
            .ok_or_else(|| ApiError::validation("Sonderstunden müssen größer als 0 sein"))?;
        Ok(SpecialRuleInput {
            employee_id,
            customer_id,
            special_hours,
            note: optional(self.note.get_untracked()),
        })
    }
}

/// Validated new standard hours for one customer.
pub fn parse_default_hours(raw: &str) -> Result<f64, ApiError> {
    parse_amount(raw)
        .filter(|hours| (0.0..=24.0).contains(hours))
        .ok_or_else(|| ApiError::validation("Sollstunden müssen zwischen 0 und 24 liegen"))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn employee_form_requires_names_and_rate() {
        with_runtime(|| {
            let form = EmployeeFormState::new();
            form.first_name.set("Ruza".into());
            form.personal_nr.set("1004".into());
            let err = form.to_input().unwrap_err();
            assert_eq!(err.error, "Bitte Vorname, Nachname und Personal-Nr ausfüllen");

            form.last_name.set("Kovac".into());
            form.hourly_rate.set("x".into());
            assert!(form.to_input().is_err());

            form.hourly_rate.set("14,50".into());
            form.email.set("  ".into());
            let input = form.to_input().unwrap();
            assert_eq!(input.hourly_rate, 14.5);
            assert_eq!(input.email, None);
            assert_eq!(input.tracking_mode, TrackingMode::Manual);
        });
    }

    #[test]
    fn customer_form_validates_required_fields_and_rates() {
        with_runtime(|| {
            let form = CustomerFormState::new();
            form.name.set("Lidl Mitte".into());
            assert_eq!(
                form.to_input().unwrap_err().error,
                "Bitte Name und Adresse ausfüllen"
            );
            form.address.set("Hauptstr. 1".into());
            form.hourly_rate.set("abc".into());
            assert!(form.to_input().is_err());
            form.hourly_rate.set(String::new());
            let input = form.to_input().unwrap();
            assert_eq!(input.hourly_rate, None);
            assert_eq!(input.billing_type, "hourly");
            assert!(input.is_active);
        });
    }

    #[test]
    fn special_rule_form_requires_selection_and_positive_hours() {
        with_runtime(|| {
            let form = SpecialRuleFormState::new();
            form.special_hours.set("2".into());
            assert_eq!(
                form.to_input().unwrap_err().error,
                "Bitte Mitarbeiter und Kunde auswählen"
            );
            form.employee_id.set(Some(4));
            form.customer_id.set(Some(7));
            form.special_hours.set("0".into());
            assert!(form.to_input().is_err());
            form.special_hours.set("2,5".into());
            let input = form.to_input().unwrap();
            assert_eq!(input.special_hours, 2.5);
            assert_eq!(input.note, None);
        });
    }
}
