use super::{
    client::ApiClient,
    types::{
        ApiError, Customer, CustomerInput, DashboardStats, Employee, EmployeeInput,
        EmployeeWithCategory, LiveStatusEntry, UpdateCategoryRequest,
    },
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("admin/dashboard/stats").await
    }

    pub async fn get_live_status(&self) -> Result<Vec<LiveStatusEntry>, ApiError> {
        self.get_json("admin/live-status").await
    }

    pub async fn get_employees_with_categories(
        &self,
    ) -> Result<Vec<EmployeeWithCategory>, ApiError> {
        self.get_json("admin/employees-with-categories").await
    }

    pub async fn update_category(&self, request: &UpdateCategoryRequest) -> Result<(), ApiError> {
        self.put_empty("admin/update-category", request).await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("admin/employees").await
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, ApiError> {
        self.post_json("admin/employees", input).await
    }

    pub async fn update_employee(&self, id: i64, input: &EmployeeInput) -> Result<Employee, ApiError> {
        self.put_json(&format!("admin/employees/{}", id), input)
            .await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("admin/employees/{}", id)).await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get_json("admin/customers").await
    }

    pub async fn create_customer(&self, input: &CustomerInput) -> Result<Customer, ApiError> {
        self.post_json("admin/customers", input).await
    }

    pub async fn update_customer(&self, id: i64, input: &CustomerInput) -> Result<Customer, ApiError> {
        self.put_json(&format!("admin/customers/{}", id), input)
            .await
    }

    pub async fn delete_customer(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("admin/customers/{}", id)).await
    }
}
