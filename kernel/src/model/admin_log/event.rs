use derive_new::new;

#[derive(Debug, new)]
pub struct AppendAdminLog {
    #[new(into)]
    pub action: String,
    #[new(into)]
    pub details: String,
}
