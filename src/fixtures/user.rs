use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u32,
    pub email: &'static str,
    pub display_name: &'static str,
    pub avatar: &'static str,
    pub request_count: u32,
    /// Permission bitmask
    pub permissions: u32,
}

pub static USER: UserRecord = UserRecord {
    id: 1,
    email: "admin@example.com",
    display_name: "Admin User",
    avatar: "/avatar/admin.jpg",
    request_count: 18,
    permissions: 2,
};
