pub mod cart;
pub mod category;
pub mod footwear;
pub mod home;
pub mod not_found;
