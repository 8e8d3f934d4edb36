//! Order repository.
//!
//! Orders and their line items are written in one transaction; the pricing
//! summary is stored as captured at checkout, not recomputed on read.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use kedai_core::{OrderId, OrderTotals, ProductId, ProductSelection, UserId};

use super::RepositoryError;
use crate::models::order::{Order, OrderItem, OrderStatus};

/// Repository for orders.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    user_id: Option<i32>,
    customer_name: String,
    phone: String,
    status: OrderStatus,
    subtotal: Decimal,
    discount: Decimal,
    shipping_cost: Decimal,
    total: Decimal,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    order_id: i32,
    product_id: i32,
    quantity: i32,
    price: Decimal,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            id: OrderId::new(self.id),
            user_id: self.user_id.map(UserId::new),
            customer_name: self.customer_name,
            phone: self.phone,
            status: self.status,
            subtotal: self.subtotal,
            discount: self.discount,
            shipping_cost: self.shipping_cost,
            total: self.total,
            items,
            created_at: self.created_at,
        }
    }
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = RepositoryError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(row.quantity).map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "negative quantity on order {}",
                row.order_id
            ))
        })?;
        Ok(Self {
            product_id: ProductId::new(row.product_id),
            quantity,
            price: row.price,
        })
    }
}

const ORDER_COLUMNS: &str = "id, user_id, customer_name, phone, status, subtotal, discount, \
                             shipping_cost, total, created_at";

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist an order and its lines atomically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction rolls back as a unit.
    pub async fn create(
        &self,
        user_id: Option<UserId>,
        customer_name: &str,
        phone: &str,
        selections: &[ProductSelection],
        totals: &OrderTotals,
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "INSERT INTO orders (user_id, customer_name, phone, status, subtotal, discount,
                                 shipping_cost, total)
             VALUES ($1, $2, $3, 'pending', $4, $5, $6, $7)
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(user_id.map(|id| id.as_i32()))
        .bind(customer_name)
        .bind(phone)
        .bind(totals.subtotal)
        .bind(totals.discount)
        .bind(totals.shipping_cost)
        .bind(totals.total)
        .fetch_one(&mut *tx)
        .await?;

        let mut items = Vec::with_capacity(selections.len());
        for selection in selections {
            let quantity = i32::try_from(selection.quantity).map_err(|_| {
                RepositoryError::DataCorruption("order line quantity overflow".to_string())
            })?;
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(row.id)
            .bind(selection.product_id.as_i32())
            .bind(quantity)
            .bind(selection.price)
            .execute(&mut *tx)
            .await?;

            items.push(OrderItem {
                product_id: selection.product_id,
                quantity: selection.quantity,
                price: selection.price,
            });
        }

        tx.commit().await?;
        Ok(row.into_order(items))
    }

    /// Get one order with its lines.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else { return Ok(None) };
        let items = self.items_for(&[row.id]).await?;
        Ok(Some(row.into_order(items)))
    }

    /// List a member's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        self.attach_items(rows).await
    }

    /// List every order, newest first (admin dashboard).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        self.attach_items(rows).await
    }

    /// Update an order's status. Returns whether the order existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = $2 WHERE id = $1")
            .bind(id.as_i32())
            .bind(status)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn items_for(&self, order_ids: &[i32]) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT order_id, product_id, quantity, price
             FROM order_items WHERE order_id = ANY($1) ORDER BY id",
        )
        .bind(order_ids)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderItem::try_from).collect()
    }

    async fn attach_items(&self, rows: Vec<OrderRow>) -> Result<Vec<Order>, RepositoryError> {
        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT order_id, product_id, quantity, price
             FROM order_items WHERE order_id = ANY($1) ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = item_rows
                .iter()
                .filter(|item| item.order_id == row.id)
                .map(|item| {
                    OrderItem::try_from(OrderItemRow {
                        order_id: item.order_id,
                        product_id: item.product_id,
                        quantity: item.quantity,
                        price: item.price,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            orders.push(row.into_order(items));
        }
        Ok(orders)
    }
}
