//! Test factory for creating Serenity User objects.
//!
//! Serenity model structs are `#[non_exhaustive]` and cannot be built with
//! struct literals, so this factory deserializes JSON shaped like Discord's
//! API payload instead.

use serenity::all::User;

/// Creates a test Serenity User with the given id and username.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test
///   data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(200000000000000001, "aurora");
/// assert_eq!(user.name, "aurora");
/// ```
pub fn create_test_user(user_id: u64, name: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
        "system": false,
        "banner": null,
        "accent_color": null,
        "public_flags": null,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
