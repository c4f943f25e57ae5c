pub mod billing;
pub mod dates;
pub mod macros;
pub mod maintenance_order;
pub mod people;
pub mod seed;
pub mod session;
pub mod work_order;

pub use billing::*;
pub use maintenance_order::*;
pub use people::*;
pub use seed::*;
pub use session::*;
pub use work_order::*;
