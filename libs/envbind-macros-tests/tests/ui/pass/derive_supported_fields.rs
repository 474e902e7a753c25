use envbind::{Bindable, EnvBind};

#[derive(Default, EnvBind)]
pub struct ServerEnv {
    pub listen: String,
    pub workers: i32,
    pub backlog: i64,
    pub retries: i8,
    pub window: i16,
    pub offset: isize,
    pub plugins: Vec<String>,
    cache: Vec<u8>,
    pub(crate) generation: u64,
}

fn assert_bindable<T: Bindable>(_: &T) {}

fn main() {
    let mut env = ServerEnv::default();
    assert_bindable(&env);

    let names: Vec<&str> = env.env_fields().iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        ["listen", "workers", "backlog", "retries", "window", "offset", "plugins"]
    );
    assert!(env.cache.is_empty());
    assert_eq!(env.generation, 0);
}
