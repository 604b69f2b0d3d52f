#[derive(Debug)]
pub struct StudentLogin {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
}
