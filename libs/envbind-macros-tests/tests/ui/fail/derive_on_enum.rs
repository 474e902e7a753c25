#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
pub enum Mode {
    Fast,
}

fn main() {}
