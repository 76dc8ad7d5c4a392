use uuid::Uuid;

/// Profile defaults applied at registration when the field is omitted.
/// These exact values are observable through the API.
pub const DEFAULT_NAME: &str = "Жак-Ив Кусто";
pub const DEFAULT_ABOUT: &str = "Исследователь";
pub const DEFAULT_AVATAR: &str =
    "https://pictures.s3.yandex.net/resources/jacques-cousteau_1604399756.png";

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
