//! Client side of the accounting service: expense records and the issues
//! raised against them.
//!
//! Pages talk to [`AccountingRepository`]; the `ApiClient` methods below map
//! one-to-one onto the service endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

use crate::api::{
    client::{encode_segment, ApiClient},
    types::ApiError,
};

pub const DEFAULT_PER_PAGE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Reimbursed,
}

impl ExpenseStatus {
    pub const ALL: [ExpenseStatus; 5] = [
        ExpenseStatus::Draft,
        ExpenseStatus::Submitted,
        ExpenseStatus::Approved,
        ExpenseStatus::Rejected,
        ExpenseStatus::Reimbursed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Draft => "draft",
            ExpenseStatus::Submitted => "submitted",
            ExpenseStatus::Approved => "approved",
            ExpenseStatus::Rejected => "rejected",
            ExpenseStatus::Reimbursed => "reimbursed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseStatus::Draft => "下書き",
            ExpenseStatus::Submitted => "申請中",
            ExpenseStatus::Approved => "承認済み",
            ExpenseStatus::Rejected => "却下",
            ExpenseStatus::Reimbursed => "精算済み",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    Resolved,
    Dismissed,
}

impl IssueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Open => "未対応",
            IssueStatus::Resolved => "解決済み",
            IssueStatus::Dismissed => "却下",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, IssueStatus::Open)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub submitted_by: String,
    pub description: String,
    pub category: String,
    pub amount_minor: i64,
    pub currency: String,
    pub incurred_on: NaiveDate,
    pub status: ExpenseStatus,
    #[serde(default)]
    pub open_issue_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub description: String,
    pub category: String,
    pub amount_minor: i64,
    pub currency: String,
    pub incurred_on: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_minor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incurred_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExpenseStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseListQuery {
    pub page: u32,
    pub per_page: u32,
    pub status: Option<ExpenseStatus>,
}

impl Default for ExpenseListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            status: None,
        }
    }
}

impl ExpenseListQuery {
    fn to_params(self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.max(1).to_string()),
            ("per_page", self.per_page.max(1).to_string()),
        ];
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<Expense>,
}

impl ExpenseListResponse {
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) * u64::from(self.per_page) < self.total
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseIssue {
    pub id: String,
    pub expense_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: IssueStatus,
    pub reported_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolution_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIssueStatusRequest {
    pub status: IssueStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_note: Option<String>,
}

impl UpdateIssueStatusRequest {
    /// Blank notes are dropped rather than sent as empty strings.
    pub fn new(status: IssueStatus, note: &str) -> Self {
        let note = note.trim();
        Self {
            status,
            resolution_note: (!note.is_empty()).then(|| note.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseInputError {
    #[error("説明を入力してください")]
    MissingDescription,
    #[error("カテゴリを入力してください")]
    MissingCategory,
    #[error("金額は 0 より大きい値を入力してください")]
    NonPositiveAmount,
    #[error("通貨コードが不正です: {0}")]
    InvalidCurrency(String),
}

impl From<ExpenseInputError> for ApiError {
    fn from(error: ExpenseInputError) -> Self {
        ApiError::validation(error.to_string())
    }
}

pub fn validate_expense_input(request: &CreateExpenseRequest) -> Result<(), ExpenseInputError> {
    if request.description.trim().is_empty() {
        return Err(ExpenseInputError::MissingDescription);
    }
    if request.category.trim().is_empty() {
        return Err(ExpenseInputError::MissingCategory);
    }
    if request.amount_minor <= 0 {
        return Err(ExpenseInputError::NonPositiveAmount);
    }
    let currency = request.currency.as_str();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ExpenseInputError::InvalidCurrency(currency.to_string()));
    }
    Ok(())
}

/// Formats an amount held in minor units, e.g. `123456, "USD"` as `USD 1,234.56`.
pub fn format_amount(amount_minor: i64, currency: &str) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    let major = (abs / 100).to_string();
    let minor = abs % 100;

    let mut grouped = String::with_capacity(major.len() + major.len() / 3);
    for (i, ch) in major.chars().enumerate() {
        if i > 0 && (major.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!(
        "{} {}{}.{:02}",
        currency.to_ascii_uppercase(),
        sign,
        grouped,
        minor
    )
}

impl ApiClient {
    pub async fn list_expenses(
        &self,
        query: &ExpenseListQuery,
    ) -> Result<ExpenseListResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/accounting/expenses", base_url))
                    .query(&query.to_params()),
            )
            .await?;
        Self::decode(response).await
    }

    pub async fn get_expense(&self, id: &str) -> Result<Expense, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/accounting/expenses/{}",
                base_url,
                encode_segment(id)
            )))
            .await?;
        Self::decode(response).await
    }

    pub async fn create_expense(
        &self,
        payload: &CreateExpenseRequest,
    ) -> Result<Expense, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/accounting/expenses", base_url))
                    .json(payload),
            )
            .await?;
        Self::decode(response).await
    }

    pub async fn update_expense(
        &self,
        id: &str,
        payload: &UpdateExpenseRequest,
    ) -> Result<Expense, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!(
                        "{}/accounting/expenses/{}",
                        base_url,
                        encode_segment(id)
                    ))
                    .json(payload),
            )
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!(
                "{}/accounting/expenses/{}",
                base_url,
                encode_segment(id)
            )))
            .await?;
        Self::expect_success(response).await
    }

    pub async fn list_expense_issues(
        &self,
        expense_id: &str,
    ) -> Result<Vec<ExpenseIssue>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/accounting/expenses/{}/issues",
                base_url,
                encode_segment(expense_id)
            )))
            .await?;
        Self::decode(response).await
    }

    pub async fn get_issue(&self, id: &str) -> Result<ExpenseIssue, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/admin/accounting/issues/{}",
                base_url,
                encode_segment(id)
            )))
            .await?;
        Self::decode(response).await
    }

    pub async fn update_issue_status(
        &self,
        id: &str,
        payload: &UpdateIssueStatusRequest,
    ) -> Result<ExpenseIssue, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .patch(format!(
                        "{}/admin/accounting/issues/{}",
                        base_url,
                        encode_segment(id)
                    ))
                    .json(payload),
            )
            .await?;
        Self::decode(response).await
    }
}

#[derive(Clone)]
pub struct AccountingRepository {
    client: Rc<ApiClient>,
}

impl Default for AccountingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountingRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_expenses(
        &self,
        query: ExpenseListQuery,
    ) -> Result<ExpenseListResponse, ApiError> {
        self.client.list_expenses(&query).await
    }

    pub async fn fetch_expense(&self, id: String) -> Result<Expense, ApiError> {
        self.client.get_expense(&id).await
    }

    pub async fn create_expense(&self, payload: CreateExpenseRequest) -> Result<Expense, ApiError> {
        validate_expense_input(&payload)?;
        self.client.create_expense(&payload).await
    }

    pub async fn update_expense(
        &self,
        id: String,
        payload: UpdateExpenseRequest,
    ) -> Result<Expense, ApiError> {
        if payload.amount_minor.is_some_and(|amount| amount <= 0) {
            return Err(ExpenseInputError::NonPositiveAmount.into());
        }
        self.client.update_expense(&id, &payload).await
    }

    pub async fn delete_expense(&self, id: String) -> Result<(), ApiError> {
        self.client.delete_expense(&id).await
    }

    pub async fn fetch_expense_issues(
        &self,
        expense_id: String,
    ) -> Result<Vec<ExpenseIssue>, ApiError> {
        self.client.list_expense_issues(&expense_id).await
    }

    /// An empty id never reaches the service; it is reported as not found.
    pub async fn fetch_issue(&self, id: String) -> Result<ExpenseIssue, ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::not_found("課題 ID が指定されていません"));
        }
        self.client.get_issue(&id).await
    }

    pub async fn update_issue_status(
        &self,
        id: String,
        payload: UpdateIssueStatusRequest,
    ) -> Result<ExpenseIssue, ApiError> {
        self.client.update_issue_status(&id, &payload).await
    }
}
