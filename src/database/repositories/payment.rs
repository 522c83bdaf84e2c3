//! Payment repository implementation

use chrono::Utc;
use crate::database::store::Collection;
use crate::models::payment::{Payment, PaymentStatus, CreatePaymentRequest};
use crate::utils::errors::YogaBookError;
use crate::utils::helpers::generate_id;

#[derive(Debug, Clone)]
pub struct PaymentRepository {
    payments: Collection<Payment>,
}

impl PaymentRepository {
    pub fn new(payments: Collection<Payment>) -> Self {
        Self { payments }
    }

    /// Create a new payment record
    pub async fn create(&self, request: CreatePaymentRequest) -> Result<Payment, YogaBookError> {
        if !request.amount.is_finite() || request.amount < 0.0 {
            return Err(YogaBookError::Validation("Payment amount cannot be negative".to_string()));
        }

        let now = Utc::now();
        let payment = Payment {
            id: generate_id(),
            student_id: request.student_id,
            amount: request.amount,
            status: request.status,
            due_date: request.due_date,
            paid_at: (request.status == PaymentStatus::Paid).then_some(now),
            method: request.method,
            created_at: now,
        };

        self.insert(payment).await
    }

    /// Insert a fully formed payment record
    pub async fn insert(&self, payment: Payment) -> Result<Payment, YogaBookError> {
        let mut payments = self.payments.write().await;
        if payments.iter().any(|p| p.id == payment.id) {
            return Err(YogaBookError::Validation(format!("Duplicate payment id {}", payment.id)));
        }
        payments.push(payment.clone());
        Ok(payment)
    }

    /// Find payment by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, YogaBookError> {
        let payments = self.payments.read().await;
        Ok(payments.iter().find(|p| p.id == id).cloned())
    }

    /// Get payments of a student
    pub async fn list_for_student(&self, student_id: &str) -> Result<Vec<Payment>, YogaBookError> {
        let payments = self.payments.read().await;
        Ok(payments.iter().filter(|p| p.student_id == student_id).cloned().collect())
    }

    /// Every payment in insertion order
    pub async fn all(&self) -> Result<Vec<Payment>, YogaBookError> {
        Ok(self.payments.read().await.clone())
    }

    /// Update payment status; marking as paid stamps `paid_at`
    pub async fn update_status(&self, id: &str, status: PaymentStatus, method: Option<String>) -> Result<Payment, YogaBookError> {
        let mut payments = self.payments.write().await;
        let payment = payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| YogaBookError::PaymentNotFound { payment_id: id.to_string() })?;

        payment.status = status;
        if status == PaymentStatus::Paid && payment.paid_at.is_none() {
            payment.paid_at = Some(Utc::now());
        }
        if method.is_some() {
            payment.method = method;
        }

        Ok(payment.clone())
    }
}
