#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
pub struct Settings {
    #[env(skp)]
    pub name: String,
}

fn main() {}
