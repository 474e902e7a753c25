use envbind_macros::EnvBind;

#[derive(Default, EnvBind)]
pub struct Labels<T: Default> {
    pub r#type: String,
    pub r#match: Vec<String>,
    extra: T,
}

#[derive(EnvBind)]
pub struct Empty {}

fn main() {
    use envbind::Bindable;

    let mut labels: Labels<u8> = Labels::default();
    let names: Vec<&str> = labels.env_fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["type", "match"]);
    assert_eq!(labels.extra, 0);

    let mut empty = Empty {};
    assert!(empty.env_fields().is_empty());
}
