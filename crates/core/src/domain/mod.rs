pub mod interest;
pub mod question;
