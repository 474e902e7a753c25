use envbind::{Bindable, EnvBind, FieldSlot};

#[derive(Default, EnvBind)]
pub struct Tuning {
    pub name: String,
    pub ratio: f64,
    pub enabled: bool,
    #[env(skip)]
    pub started_at: u64,
}

fn main() {
    let mut tuning = Tuning::default();
    let fields = tuning.env_fields();

    assert_eq!(fields.len(), 3);
    assert!(matches!(fields[1].slot, FieldSlot::Unsupported("f64")));
    assert!(matches!(fields[2].slot, FieldSlot::Unsupported("bool")));
}
