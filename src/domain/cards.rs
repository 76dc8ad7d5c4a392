use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner: Uuid,
    pub likes: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
