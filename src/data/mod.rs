pub mod counsel;
pub mod money;
pub mod window;
