use chrono::{NaiveDate, NaiveDateTime};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::compat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user_name: String,
    #[serde(default)]
    pub personal_nr: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[default]
    #[serde(rename = "mitarbeiter", alias = "employee")]
    Employee,
}

/// How an employee records working time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum TrackingMode {
    /// Booked automatically by the backend from the schedule.
    #[serde(rename = "A", alias = "a")]
    Automatic,
    /// One tap on "Ich war anwesend" books the planned shift.
    #[serde(rename = "B", alias = "b")]
    OneTap,
    #[default]
    #[serde(rename = "C", alias = "c")]
    Manual,
}

impl TrackingMode {
    pub const ALL: [TrackingMode; 3] = [Self::Automatic, Self::OneTap, Self::Manual];

    pub fn code(self) -> &'static str {
        match self {
            Self::Automatic => "A",
            Self::OneTap => "B",
            Self::Manual => "C",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "A" | "a" => Some(Self::Automatic),
            "B" | "b" => Some(Self::OneTap),
            "C" | "c" => Some(Self::Manual),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Automatic => "Kategorie A (automatisch)",
            Self::OneTap => "Kategorie B (Anwesenheit bestätigen)",
            Self::Manual => "Kategorie C (Ein-/Ausstempeln)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyCategory {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub personal_nr: Option<String>,
    #[serde(default)]
    pub tracking_mode: TrackingMode,
    #[serde(default)]
    pub gps_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub object_id: i64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryResponse {
    pub id: i64,
    #[serde(default)]
    pub employee_id: Option<i64>,
    pub object_id: i64,
    #[serde(deserialize_with = "compat::deserialize_server_timestamp")]
    pub check_in: NaiveDateTime,
    #[serde(default, deserialize_with = "compat::deserialize_optional_server_timestamp")]
    pub check_out: Option<NaiveDateTime>,
}

/// `GET time-entries/current`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentEntryResponse {
    #[serde(default)]
    pub is_working: bool,
    #[serde(default, deserialize_with = "compat::deserialize_optional_server_timestamp")]
    pub check_in: Option<NaiveDateTime>,
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(default)]
    pub object_name: Option<String>,
    #[serde(default)]
    pub entry_id: Option<i64>,
    #[serde(default)]
    pub is_paused: bool,
    #[serde(default, deserialize_with = "compat::deserialize_optional_server_timestamp")]
    pub pause_start_time: Option<NaiveDateTime>,
    /// Seconds of already finished breaks.
    #[serde(default)]
    pub total_pause_duration: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    Unterhaltsreinigung,
    Fensterreinigung,
    Grundreinigung,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        Self::Unterhaltsreinigung,
        Self::Fensterreinigung,
        Self::Grundreinigung,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unterhaltsreinigung => "Unterhaltsreinigung",
            Self::Fensterreinigung => "Fensterreinigung",
            Self::Grundreinigung => "Grundreinigung",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasPresentRequest {
    pub object_id: i64,
    pub service_type: ServiceType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasPresentResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub scheduled_hours: f64,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectToday {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gps_lat: Option<f64>,
    #[serde(default)]
    pub gps_lng: Option<f64>,
    #[serde(default)]
    pub planned_hours: Option<f64>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_scheduled_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HasWorkTodayResponse {
    #[serde(default)]
    pub has_work: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub auto_checked_in: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakStartRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_entry_id: Option<i64>,
    pub is_paid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEndRequest {
    pub break_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakResponse {
    pub id: i64,
    #[serde(default)]
    pub time_entry_id: Option<i64>,
    #[serde(deserialize_with = "compat::deserialize_server_timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(default, deserialize_with = "compat::deserialize_optional_server_timestamp")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveBreak {
    pub id: i64,
    #[serde(deserialize_with = "compat::deserialize_server_timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentBreakResponse {
    #[serde(default)]
    pub active_break: Option<ActiveBreak>,
}

/// Totals of `reports/my/{today,week,month}`; only `total_hours` is read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoursReport {
    #[serde(default)]
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub object_name: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum ShiftStatus {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "urlaub", alias = "vacation")]
    Vacation,
    #[serde(rename = "krank", alias = "sick")]
    Sick,
    #[serde(rename = "vertretung", alias = "substitution")]
    Substitution,
}

impl ShiftStatus {
    pub const ALL: [ShiftStatus; 4] = [Self::Normal, Self::Vacation, Self::Sick, Self::Substitution];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Vacation => "urlaub",
            Self::Sick => "krank",
            Self::Substitution => "vertretung",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "normal" => Some(Self::Normal),
            "urlaub" | "vacation" => Some(Self::Vacation),
            "krank" | "sick" => Some(Self::Sick),
            "vertretung" | "substitution" => Some(Self::Substitution),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Vacation => "Urlaub",
            Self::Sick => "Krank",
            Self::Substitution => "Vertretung",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledShift {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: String,
    pub object_id: i64,
    #[serde(default)]
    pub object_name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub planned_hours: Option<f64>,
    #[serde(default)]
    pub status: ShiftStatus,
    #[serde(default)]
    pub replacement_for: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekDayPayload {
    pub date: NaiveDate,
    #[serde(default)]
    pub weekday: Option<String>,
    #[serde(default)]
    pub weekday_index: Option<u32>,
    #[serde(default)]
    pub schedules: Vec<ScheduledShift>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEmployee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub personal_nr: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleObject {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedulePayload {
    pub week_start: NaiveDate,
    #[serde(default)]
    pub week_number: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub days: Vec<WeekDayPayload>,
    #[serde(default)]
    pub employees: Vec<ScheduleEmployee>,
    #[serde(default)]
    pub objects: Vec<ScheduleObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictPayload {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub employee: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub weekday: Option<String>,
    #[serde(default)]
    pub shift1: Option<String>,
    #[serde(default)]
    pub shift2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConflictsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub conflict_count: usize,
    #[serde(default)]
    pub conflicts: Vec<ConflictPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAssignRequest {
    pub employee_id: i64,
    pub object_id: i64,
    pub weekday: u32,
    pub start_time: String,
    pub end_time: String,
    pub status: ShiftStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftUpdate {
    pub id: i64,
    pub employee_id: i64,
    pub object_id: i64,
    pub weekday: u32,
    pub start_time: String,
    pub end_time: String,
    /// Bulk-update stores this verbatim; it is not recomputed server-side.
    pub planned_hours: f64,
    pub status: ShiftStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyWeekRequest {
    pub source_week: NaiveDate,
    pub target_week: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub active_employees: u32,
    #[serde(default)]
    pub paused_employees: u32,
    #[serde(default)]
    pub offline_employees: u32,
    #[serde(default)]
    pub total_employees: u32,
    #[serde(default)]
    pub total_hours_today: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStatusEntry {
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default, alias = "employee_name")]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub object_name: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWithCategory {
    pub id: i64,
    #[serde(default)]
    pub personal_nr: Option<String>,
    pub name: String,
    #[serde(default)]
    pub tracking_mode: TrackingMode,
    #[serde(default)]
    pub gps_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub employee_id: i64,
    pub tracking_mode: TrackingMode,
    pub gps_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub personal_nr: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub tracking_mode: TrackingMode,
    #[serde(default)]
    pub gps_required: Option<bool>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Employee {
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if full.trim().is_empty() {
            self.personal_nr.clone().unwrap_or_else(|| format!("#{}", self.id))
        } else {
            full
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub personal_nr: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub hourly_rate: f64,
    pub tracking_mode: TrackingMode,
    pub gps_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub billing_type: Option<String>,
    #[serde(default)]
    pub monthly_rate: Option<f64>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub address: String,
    pub billing_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerHours {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerHoursUpdate {
    pub customer_id: i64,
    pub default_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialRule {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: String,
    pub customer_id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub standard_hours: Option<f64>,
    pub special_hours: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialRuleInput {
    pub employee_id: i64,
    pub customer_id: i64,
    pub special_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn default_true() -> bool {
    true
}

pub mod error_codes {
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const ALREADY_BOOKED: &str = "ALREADY_BOOKED";
    pub const CONFLICT: &str = "CONFLICT";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const ABORTED: &str = "ABORTED";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
    pub const UNKNOWN: &str = "UNKNOWN";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCredentials,
    SessionExpired,
    Validation,
    Conflict,
    Rejected,
    Transient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl From<futures::future::Aborted> for ApiError {
    fn from(_: futures::future::Aborted) -> Self {
        Self::aborted()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn new(code: &str, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(error_codes::VALIDATION_ERROR, msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new(error_codes::UNKNOWN, msg)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new(error_codes::REQUEST_FAILED, msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(error_codes::UNAUTHORIZED, msg)
    }

    pub fn timeout() -> Self {
        Self::new(
            error_codes::TIMEOUT,
            "Zeitüberschreitung: Der Server antwortet nicht.",
        )
    }

    /// The owning view went away before the response arrived.
    pub fn aborted() -> Self {
        Self::new(error_codes::ABORTED, "Anfrage abgebrochen.")
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code.as_str() {
            error_codes::INVALID_CREDENTIALS => ErrorKind::InvalidCredentials,
            error_codes::UNAUTHORIZED => ErrorKind::SessionExpired,
            error_codes::VALIDATION_ERROR => ErrorKind::Validation,
            error_codes::ALREADY_BOOKED | error_codes::CONFLICT => ErrorKind::Conflict,
            error_codes::FORBIDDEN | error_codes::NOT_FOUND => ErrorKind::Rejected,
            _ => ErrorKind::Transient,
        }
    }

    pub fn is_already_booked(&self) -> bool {
        self.code == error_codes::ALREADY_BOOKED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[test]
    fn api_error_helpers_set_codes_and_kinds() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.kind(), ErrorKind::Validation);
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("x").kind(), ErrorKind::Transient);
        assert_eq!(ApiError::request_failed("x").kind(), ErrorKind::Transient);
        assert_eq!(ApiError::timeout().kind(), ErrorKind::Transient);
        assert_eq!(ApiError::unauthorized("x").kind(), ErrorKind::SessionExpired);
        assert_eq!(
            ApiError::new(error_codes::ALREADY_BOOKED, "x").kind(),
            ErrorKind::Conflict
        );
        assert!(ApiError::new(error_codes::ALREADY_BOOKED, "x").is_already_booked());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn tracking_mode_uses_letter_codes() {
        let mode: TrackingMode = serde_json::from_value(json!("B")).unwrap();
        assert_eq!(mode, TrackingMode::OneTap);
        assert_eq!(serde_json::to_value(TrackingMode::Automatic).unwrap(), json!("A"));
        assert_eq!(TrackingMode::from_code(" c "), Some(TrackingMode::Manual));
        assert_eq!(TrackingMode::from_code("D"), None);
    }

    #[test]
    fn my_category_defaults_to_manual_mode() {
        let category: MyCategory = serde_json::from_value(json!({ "id": 4 })).unwrap();
        assert_eq!(category.tracking_mode, TrackingMode::Manual);
        assert!(!category.gps_required);
    }

    #[test]
    fn shift_status_reads_german_and_english_spellings() {
        let german: ShiftStatus = serde_json::from_value(json!("krank")).unwrap();
        let english: ShiftStatus = serde_json::from_value(json!("sick")).unwrap();
        assert_eq!(german, ShiftStatus::Sick);
        assert_eq!(english, ShiftStatus::Sick);
        assert_eq!(
            serde_json::to_value(ShiftStatus::Substitution).unwrap(),
            json!("vertretung")
        );
        assert_eq!(ShiftStatus::from_wire("urlaub"), Some(ShiftStatus::Vacation));
    }

    #[test]
    fn quick_assign_serializes_status_explicitly() {
        let request = QuickAssignRequest {
            employee_id: 3,
            object_id: 9,
            weekday: 2,
            start_time: "06:00".into(),
            end_time: "10:00".into(),
            status: ShiftStatus::Normal,
        };
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["status"], json!("normal"));
    }

    #[test]
    fn login_response_maps_role() {
        let response: LoginResponse = serde_json::from_value(json!({
            "access_token": "t",
            "token_type": "bearer",
            "user_name": "Ruza Sertic",
            "personal_nr": "D002",
            "role": "mitarbeiter"
        }))
        .unwrap();
        assert_eq!(response.role, Role::Employee);
        assert_eq!(response.personal_nr.as_deref(), Some("D002"));
    }

    #[test]
    fn current_entry_reads_naive_timestamps() {
        let current: CurrentEntryResponse = serde_json::from_value(json!({
            "is_working": true,
            "check_in": "2025-07-01T06:00:00.123456",
            "object_id": 7,
            "entry_id": 11
        }))
        .unwrap();
        assert!(current.is_working);
        assert_eq!(
            current.check_in.map(|ts| ts.format("%H:%M:%S").to_string()),
            Some("06:00:00".to_string())
        );
        assert!(!current.is_paused);
    }

    #[test]
    fn employee_display_name_falls_back_to_personal_number() {
        let employee: Employee =
            serde_json::from_value(json!({ "id": 1, "personal_nr": "D010" })).unwrap();
        assert_eq!(employee.display_name(), "D010");
        assert!(employee.is_active);
    }

    #[wasm_bindgen_test]
    fn service_type_serializes_german_names() {
        assert_eq!(
            serde_json::to_value(ServiceType::Fensterreinigung).unwrap(),
            json!("Fensterreinigung")
        );
        assert_eq!(ServiceType::parse("Grundreinigung"), Some(ServiceType::Grundreinigung));
    }
}
