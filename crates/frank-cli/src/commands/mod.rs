pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod goal;
pub mod review;
pub mod shared;
pub mod todo;
pub mod value;
pub mod week;
