#[derive(Debug)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub reg_no: String,
    pub room_no: String,
}

#[derive(Debug)]
pub struct DeleteUser {
    pub username: String,
}
