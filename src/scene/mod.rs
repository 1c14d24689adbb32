pub mod composer;
pub mod controller;
pub mod dsl;
pub mod model;
pub mod parallax;
pub mod scroll;
