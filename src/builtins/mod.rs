pub mod cd;
pub mod echo;
pub mod exit;
pub mod help;
pub mod hystat;
pub mod registry;
