#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
pub struct Pair(pub String, pub String);

fn main() {}
