pub mod contact;
pub mod menu;
pub mod order;
pub mod reservation;
