use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Rejections reported by commerce operations. Every rejected operation leaves
/// the domain exactly as it was, apart from the system log line it appends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommerceError {
    #[error("username '{0}' is already registered")]
    UsernameTaken(String),
    #[error("unknown user '{0}'")]
    UnknownUser(String),
    #[error("user '{0}' is deactivated")]
    InactiveUser(String),
    #[error("quantity for '{item}' must be positive")]
    InvalidQuantity { item: String },
    #[error("'{0}' is not in the cart")]
    NotInCart(String),
    #[error("cart is empty")]
    EmptyCart,
    #[error("insufficient stock for '{item}': requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: u32,
        available: i64,
    },
    #[error("stock for '{item}' cannot be set to {level}")]
    NegativeStock { item: String, level: i64 },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u64,
    pub email: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenRecord {
    pub username: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: u64,
    pub lines: IndexMap<String, u32>,
}

/// Users, stock levels, a shopping cart and the orders placed from it.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CommerceDomain {
    users: IndexMap<String, UserRecord>,
    tokens: Vec<TokenRecord>,
    system_log: Vec<String>,
    stock: IndexMap<String, i64>,
    cart: IndexMap<String, u32>,
    orders: Vec<OrderRecord>,
}

impl CommerceDomain {
    pub fn new(stock: &IndexMap<String, i64>) -> Self {
        Self {
            stock: stock.clone(),
            ..Self::default()
        }
    }

    pub fn register_user(
        &mut self,
        username: &str,
        email: impl Into<String>,
    ) -> Result<u64, CommerceError> {
        if self.users.contains_key(username) {
            self.log(format!("register rejected: '{username}' taken"));
            return Err(CommerceError::UsernameTaken(username.to_string()));
        }
        let id = self.users.len() as u64 + 1;
        self.users.insert(
            username.to_string(),
            UserRecord {
                id,
                email: email.into(),
                active: true,
            },
        );
        self.log(format!("user '{username}' registered with id {id}"));
        log::debug!("registered user {username} ({id})");
        Ok(id)
    }

    /// Issues a fresh session token for an active user.
    pub fn login(&mut self, username: &str) -> Result<String, CommerceError> {
        let user = self
            .users
            .get(username)
            .ok_or_else(|| CommerceError::UnknownUser(username.to_string()))?;
        if !user.active {
            return Err(CommerceError::InactiveUser(username.to_string()));
        }
        let token = Uuid::new_v4().to_string();
        self.tokens.push(TokenRecord {
            username: username.to_string(),
            token: token.clone(),
        });
        self.log(format!("user '{username}' logged in"));
        Ok(token)
    }

    pub fn deactivate_user(&mut self, username: &str) -> Result<(), CommerceError> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| CommerceError::UnknownUser(username.to_string()))?;
        user.active = false;
        self.log(format!("user '{username}' deactivated"));
        Ok(())
    }

    pub fn user(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn tokens(&self) -> &[TokenRecord] {
        &self.tokens
    }

    pub fn set_stock(&mut self, item: &str, level: i64) -> Result<(), CommerceError> {
        if level < 0 {
            return Err(CommerceError::NegativeStock {
                item: item.to_string(),
                level,
            });
        }
        self.stock.insert(item.to_string(), level);
        Ok(())
    }

    pub fn restock(&mut self, item: &str, quantity: u32) -> i64 {
        let level = self.stock.entry(item.to_string()).or_insert(0);
        *level += i64::from(quantity);
        *level
    }

    /// Stock level; unknown items have none.
    pub fn stock_of(&self, item: &str) -> i64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    pub fn stock(&self) -> &IndexMap<String, i64> {
        &self.stock
    }

    pub fn add_to_cart(&mut self, item: &str, quantity: u32) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity {
                item: item.to_string(),
            });
        }
        let line = self.cart.entry(item.to_string()).or_insert(0);
        *line = line.saturating_add(quantity);
        Ok(*line)
    }

    pub fn remove_from_cart(&mut self, item: &str) -> Result<u32, CommerceError> {
        self.cart
            .shift_remove(item)
            .ok_or_else(|| CommerceError::NotInCart(item.to_string()))
    }

    pub fn cart(&self) -> &IndexMap<String, u32> {
        &self.cart
    }

    /// Converts the cart into an order. All lines are checked before any stock
    /// moves; on failure stock, cart and orders are untouched.
    pub fn checkout(&mut self) -> Result<OrderRecord, CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if let Some(err) = self.first_shortage() {
            log::warn!("checkout rejected: {err}");
            self.log(format!("checkout rejected: {err}"));
            return Err(err);
        }
        for (item, quantity) in &self.cart {
            if let Some(level) = self.stock.get_mut(item) {
                *level -= i64::from(*quantity);
            }
        }
        let order = OrderRecord {
            id: self.orders.len() as u64 + 1,
            lines: std::mem::take(&mut self.cart),
        };
        self.orders.push(order.clone());
        self.log(format!("order {} placed ({} lines)", order.id, order.lines.len()));
        log::debug!("checkout produced order {}", order.id);
        Ok(order)
    }

    fn first_shortage(&self) -> Option<CommerceError> {
        self.cart.iter().find_map(|(item, quantity)| {
            let available = self.stock_of(item);
            (available < i64::from(*quantity)).then(|| CommerceError::InsufficientStock {
                item: item.clone(),
                requested: *quantity,
                available,
            })
        })
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn system_log(&self) -> &[String] {
        &self.system_log
    }

    fn log(&mut self, line: String) {
        self.system_log.push(line);
    }
}
