//! In-memory tables behind the fake backend, plus the small subset of the
//! REST filter syntax (`column=eq.value`, `order=column.asc|desc`) that the
//! client uses.

use jiff::Timestamp;
use payloads::{
    Payment, Reservation, ReservationId, Review, Space, UserId, UserIdentity,
};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use super::BackendError;

/// Query keys that are not column filters.
const RESERVED_KEYS: &[&str] = &["select", "order", "grant_type"];

#[derive(Debug, Clone)]
pub struct StoredUser {
    pub identity: UserIdentity,
    pub password: String,
}

#[derive(Debug, Default)]
pub struct Tables {
    pub users: Vec<StoredUser>,
    /// access token -> user
    pub tokens: HashMap<String, UserId>,
    pub spaces: Vec<Space>,
    pub reservations: Vec<Reservation>,
    pub payments: Vec<Payment>,
    pub reviews: Vec<Review>,
}

impl Tables {
    pub fn owns_reservation(
        &self,
        user_id: &UserId,
        reservation_id: &ReservationId,
    ) -> bool {
        self.reservations
            .iter()
            .any(|r| r.id == *reservation_id && r.user_id == *user_id)
    }
}

/// Shared handle to the backend's data. Cloning shares the same tables, so
/// tests can seed and inspect rows while the server is running.
#[derive(Debug, Clone, Default)]
pub struct BackendState {
    tables: Arc<Mutex<Tables>>,
    unavailable: Arc<Mutex<HashSet<String>>>,
}

impl BackendState {
    pub fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("backend tables poisoned")
    }

    pub fn add_user(&self, email: &str, password: &str) -> UserIdentity {
        let identity = UserIdentity {
            id: UserId::new_v4(),
            email: email.to_string(),
        };
        self.tables().users.push(StoredUser {
            identity: identity.clone(),
            password: password.to_string(),
        });
        identity
    }

    pub fn insert_space(&self, space: Space) {
        self.tables().spaces.push(space);
    }

    pub fn insert_reservation(&self, reservation: Reservation) {
        self.tables().reservations.push(reservation);
    }

    pub fn insert_payment(&self, payment: Payment) {
        self.tables().payments.push(payment);
    }

    pub fn insert_review(&self, review: Review) {
        self.tables().reviews.push(review);
    }

    pub fn reservation(&self, id: &ReservationId) -> Option<Reservation> {
        self.tables()
            .reservations
            .iter()
            .find(|r| r.id == *id)
            .cloned()
    }

    pub fn payment_for(&self, id: &ReservationId) -> Option<Payment> {
        self.tables()
            .payments
            .iter()
            .find(|p| p.reservation_id == *id)
            .cloned()
    }

    /// Make every read of `table` answer 503 until restored.
    pub fn set_table_unavailable(&self, table: &str, unavailable: bool) {
        let mut tables = self
            .unavailable
            .lock()
            .expect("unavailable set poisoned");
        if unavailable {
            tables.insert(table.to_string());
        } else {
            tables.remove(table);
        }
    }

    pub fn is_unavailable(&self, table: &str) -> bool {
        self.unavailable
            .lock()
            .expect("unavailable set poisoned")
            .contains(table)
    }
}

/// Apply `column=eq.value` filters and an optional `order` to `rows`.
pub fn select_rows<T: Serialize>(
    rows: &[T],
    query: &HashMap<String, String>,
) -> Result<Vec<Value>, BackendError> {
    let mut filters = Vec::new();
    for (column, condition) in query {
        if RESERVED_KEYS.contains(&column.as_str()) {
            continue;
        }
        let expected = condition.strip_prefix("eq.").ok_or_else(|| {
            BackendError::BadRequest(format!(
                "unsupported filter on {column}: {condition}"
            ))
        })?;
        filters.push((column.as_str(), expected));
    }

    let mut selected = Vec::new();
    for row in rows {
        let value = serde_json::to_value(row)
            .map_err(|e| BackendError::BadRequest(e.to_string()))?;
        let matches = filters.iter().all(|(column, expected)| {
            value.get(column).map(as_text).as_deref() == Some(*expected)
        });
        if matches {
            selected.push(value);
        }
    }

    if let Some(order) = query.get("order") {
        let (column, direction) =
            order.rsplit_once('.').unwrap_or((order.as_str(), "asc"));
        selected.sort_by(|a, b| {
            let ordering = compare(a.get(column), b.get(column));
            if direction == "desc" {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    Ok(selected)
}

/// Text form of a JSON scalar, as it would appear in a filter.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => {
            // Timestamps serialize with a variable number of fractional
            // digits, so their text does not sort chronologically.
            match (a.parse::<Timestamp>(), b.parse::<Timestamp>()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            }
        }
        (Some(a), Some(b)) => as_text(a).cmp(&as_text(b)),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn filters_and_orders_rows() {
        let rows = vec![
            json!({"id": "a", "space_id": "s1", "rating": 3}),
            json!({"id": "b", "space_id": "s2", "rating": 5}),
            json!({"id": "c", "space_id": "s1", "rating": 4}),
        ];

        let selected = select_rows(
            &rows,
            &query(&[("space_id", "eq.s1"), ("order", "rating.desc")]),
        )
        .unwrap();
        let ids: Vec<_> = selected.iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!("c"), json!("a")]);
    }

    #[test]
    fn orders_timestamps_chronologically() {
        let rows = vec![
            json!({"id": "earlier", "created_at": "2025-01-01T00:00:00.12Z"}),
            json!({"id": "later", "created_at": "2025-01-01T00:00:00.123Z"}),
            json!({"id": "earliest", "created_at": "2025-01-01T00:00:00Z"}),
        ];

        let selected =
            select_rows(&rows, &query(&[("order", "created_at.desc")]))
                .unwrap();
        let ids: Vec<_> = selected.iter().map(|r| r["id"].clone()).collect();
        assert_eq!(
            ids,
            vec![json!("later"), json!("earlier"), json!("earliest")]
        );
    }

    #[test]
    fn rejects_unknown_operators() {
        let rows = vec![json!({"id": "a"})];
        let result = select_rows(&rows, &query(&[("id", "neq.a")]));
        assert!(matches!(result, Err(BackendError::BadRequest(_))));
    }
}
