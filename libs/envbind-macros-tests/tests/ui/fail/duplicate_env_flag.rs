#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
pub struct Settings {
    #[env(skip, skip)]
    pub name: String,
}

fn main() {}
