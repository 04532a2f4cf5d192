pub mod about;
pub mod article;
pub mod articles;
pub mod contact;
pub mod home;
pub mod legal;
