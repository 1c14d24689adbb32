pub mod cycler;
pub mod ease;
pub mod entrance;
