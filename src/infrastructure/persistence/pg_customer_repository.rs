//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerId, EmailAddress};
use crate::domain::page::{Page, PageRequest};
use crate::domain::query::Predicate;
use crate::domain::repositories::{CustomerRepository, Repository};
use crate::error::AppError;
use crate::infrastructure::persistence::sql::push_predicate;

/// PostgreSQL repository for customer storage and retrieval.
///
/// Predicate trees are rendered into parameterized SQL and evaluated by the
/// database; nothing is filtered in-process.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    firstname: String,
    lastname: String,
    email_address: Option<String>,
}

impl CustomerRow {
    fn into_customer(self) -> Result<Customer, AppError> {
        let email_address = self
            .email_address
            .map(|raw| {
                EmailAddress::new(&raw).map_err(|e| {
                    AppError::internal(
                        "Stored email address failed validation",
                        json!({ "id": self.id, "source": e.to_string() }),
                    )
                })
            })
            .transpose()?;

        Ok(Customer::persisted(
            CustomerId::new(self.id),
            self.firstname,
            self.lastname,
            email_address,
        ))
    }
}

fn rows_into_customers(rows: Vec<CustomerRow>) -> Result<Vec<Customer>, AppError> {
    rows.into_iter().map(CustomerRow::into_customer).collect()
}

#[async_trait]
impl Repository<Customer, CustomerId> for PgCustomerRepository {
    async fn find_one(&self, id: CustomerId) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, firstname, lastname, email_address FROM customers WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(CustomerRow::into_customer).transpose()
    }

    async fn save(&self, entity: Customer) -> Result<Customer, AppError> {
        let email = entity.email_address.as_ref().map(EmailAddress::as_str);

        match entity.id() {
            None => {
                let row = sqlx::query_as::<_, CustomerRow>(
                    r#"
                    INSERT INTO customers (firstname, lastname, email_address)
                    VALUES ($1, $2, $3)
                    RETURNING id, firstname, lastname, email_address
                    "#,
                )
                .bind(&entity.firstname)
                .bind(&entity.lastname)
                .bind(email)
                .fetch_one(self.pool.as_ref())
                .await?;

                row.into_customer()
            }
            Some(id) => {
                let row = sqlx::query_as::<_, CustomerRow>(
                    r#"
                    UPDATE customers
                    SET firstname = $2, lastname = $3, email_address = $4
                    WHERE id = $1
                    RETURNING id, firstname, lastname, email_address
                    "#,
                )
                .bind(id.value())
                .bind(&entity.firstname)
                .bind(&entity.lastname)
                .bind(email)
                .fetch_optional(self.pool.as_ref())
                .await?;

                match row {
                    Some(row) => row.into_customer(),
                    None => Err(AppError::not_found(
                        "Customer does not exist",
                        json!({ "id": id.value() }),
                    )),
                }
            }
        }
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, firstname, lastname, email_address FROM customers ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows_into_customers(rows)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Customer>, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(self.pool.as_ref())
            .await?;

        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, firstname, lastname, email_address
            FROM customers
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(Page::new(
            rows_into_customers(rows)?,
            request,
            u64::try_from(total).unwrap_or(0),
        ))
    }

    async fn find_matching(&self, predicate: Predicate) -> Result<Vec<Customer>, AppError> {
        let mut builder = QueryBuilder::new(
            "SELECT id, firstname, lastname, email_address FROM customers WHERE ",
        );
        push_predicate(&mut builder, &predicate)?;
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<CustomerRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        rows_into_customers(rows)
    }

    async fn delete(&self, id: CustomerId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.value())
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id = id.value(), "delete of absent customer, nothing to do");
        }

        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_by_email_address(
        &self,
        email_address: &EmailAddress,
    ) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, firstname, lastname, email_address FROM customers WHERE email_address = $1",
        )
        .bind(email_address.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(CustomerRow::into_customer).transpose()
    }
}
