use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
pub enum Role {
    Student,
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_string() {
        assert_eq!(Role::from_str("Student").unwrap(), Role::Student);
        assert_eq!(Role::Admin.as_ref(), "Admin");
        assert!(Role::from_str("Superuser").is_err());
    }
}
