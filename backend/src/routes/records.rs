//! Paths for the raw record collections passed through from the repository.

/// Route path for work orders (list / create)
pub const WORK_ORDERS_PATH: &str = "/work-orders";
/// Route path for a single work order
pub const WORK_ORDER_PATH: &str = "/work-orders/{id}";
/// Route path for maintenance orders
pub const MAINTENANCE_ORDERS_PATH: &str = "/maintenance-orders";
/// Route path for technicians joined with their users
pub const TECHNICIANS_PATH: &str = "/technicians-with-users";
/// Route path for clients
pub const CLIENTS_PATH: &str = "/clients";
