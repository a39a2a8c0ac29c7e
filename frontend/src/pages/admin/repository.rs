use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, Customer, CustomerHours, CustomerHoursUpdate, CustomerInput,
    DashboardStats, Employee, EmployeeInput, EmployeeWithCategory, LiveStatusEntry, SpecialRule,
    SpecialRuleInput, UpdateCategoryRequest,
};

/// Stats and live list are fetched side by side; either may fail alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverviewSnapshot {
    pub stats: Result<DashboardStats, ApiError>,
    pub live: Result<Vec<LiveStatusEntry>, ApiError>,
}

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_overview(&self) -> OverviewSnapshot {
        let (stats, live) = futures::join!(
            self.client.get_dashboard_stats(),
            self.client.get_live_status(),
        );
        OverviewSnapshot { stats, live }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn save_employee(&self, id: Option<i64>, input: &EmployeeInput) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_employee(id, input).await.map(|_| ()),
            None => self.client.create_employee(input).await.map(|_| ()),
        }
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.client.list_customers().await
    }

    pub async fn save_customer(&self, id: Option<i64>, input: &CustomerInput) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_customer(id, input).await.map(|_| ()),
            None => self.client.create_customer(input).await.map(|_| ()),
        }
    }

    pub async fn delete_customer(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_customer(id).await
    }

    pub async fn list_customer_hours(&self) -> Result<Vec<CustomerHours>, ApiError> {
        self.client.list_customer_hours().await
    }

    pub async fn update_customer_hours(&self, update: &CustomerHoursUpdate) -> Result<(), ApiError> {
        self.client.update_customer_hours(update).await
    }

    pub async fn list_special_rules(&self) -> Result<Vec<SpecialRule>, ApiError> {
        self.client.list_special_rules().await
    }

    pub async fn create_special_rule(&self, input: &SpecialRuleInput) -> Result<(), ApiError> {
        self.client.create_special_rule(input).await
    }

    pub async fn delete_special_rule(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_special_rule(id).await
    }

    pub async fn list_categories(&self) -> Result<Vec<EmployeeWithCategory>, ApiError> {
        self.client.get_employees_with_categories().await
    }

    pub async fn update_category(&self, request: &UpdateCategoryRequest) -> Result<(), ApiError> {
        self.client.update_category(request).await
    }
}
