use super::{
    client::ApiClient,
    types::{ApiError, CustomerHours, CustomerHoursUpdate, SpecialRule, SpecialRuleInput},
};

impl ApiClient {
    pub async fn list_customer_hours(&self) -> Result<Vec<CustomerHours>, ApiError> {
        self.get_json("hours-management/customer-hours").await
    }

    pub async fn update_customer_hours(&self, update: &CustomerHoursUpdate) -> Result<(), ApiError> {
        self.put_empty("hours-management/customer-hours", update)
            .await
    }

    pub async fn list_special_rules(&self) -> Result<Vec<SpecialRule>, ApiError> {
        self.get_json("hours-management/special-rules").await
    }

    pub async fn create_special_rule(&self, input: &SpecialRuleInput) -> Result<(), ApiError> {
        self.post_empty("hours-management/special-rules", input)
            .await
    }

    pub async fn delete_special_rule(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("hours-management/special-rules/{}", id))
            .await
    }
}
