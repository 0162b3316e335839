pub mod links;
pub mod system;
