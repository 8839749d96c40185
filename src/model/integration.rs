use serenity::all::User;

/// The tuple identifying a Discord account for linking purposes.
///
/// Sent to the website when exchanging a verification token for an account
/// link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationData {
    /// Discord user id (snowflake).
    pub id: u64,
    /// Discord username.
    pub username: String,
}

impl From<&User> for IntegrationData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            username: user.name.clone(),
        }
    }
}
