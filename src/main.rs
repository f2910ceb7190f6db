#[macro_use]
extern crate rocket;
#[macro_use]
extern crate log;

use rocket::{Build, Rocket};

mod api;
pub mod controller;
mod dto;
mod lang;
pub mod store;

#[launch]
fn rocket() -> Rocket<Build> {
    api::launch()
}
