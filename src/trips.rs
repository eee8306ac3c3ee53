use crate::types::{Trip, UserRecord};

/// How many trips the board shows per load.
pub const TRIP_COUNT: usize = 5;

/// Fixed id → destination table acting as "travel destinations".
const CITY_BY_USER_ID: [(u32, &str); 5] = [
    (1, "Paris"),
    (2, "London"),
    (3, "New York"),
    (4, "Tokyo"),
    (5, "Andhra Pradesh"),
];

pub fn city_for(user_id: u32) -> Option<&'static str> {
    CITY_BY_USER_ID
        .iter()
        .find(|(id, _)| *id == user_id)
        .map(|(_, city)| *city)
}

/// Map the first five users into trip cards. Unknown ids get a generic city.
pub fn build_trips(users: &[UserRecord]) -> Vec<Trip> {
    users
        .iter()
        .take(TRIP_COUNT)
        .map(|user| {
            let city = city_for(user.id);
            Trip {
                id: user.id,
                city: city.unwrap_or("Unknown").to_string(),
                traveler: user.name.clone(),
                email: user.email.clone(),
                description: format!(
                    "Explore {} with {}.",
                    city.unwrap_or("this city"),
                    user.name
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, name: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn takes_at_most_five_users() {
        let users: Vec<_> = (1u32..=10).map(|i| user(i, "Traveler")).collect();
        assert_eq!(build_trips(&users).len(), 5);
    }

    #[test]
    fn short_lists_map_one_to_one() {
        let users = vec![user(1, "Ada"), user(2, "Brahim"), user(3, "Chidi")];
        let trips = build_trips(&users);
        assert_eq!(trips.len(), 3);
        assert_eq!(trips[0].city, "Paris");
        assert_eq!(trips[1].city, "London");
        assert_eq!(trips[2].city, "New York");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(build_trips(&[]).is_empty());
    }

    #[test]
    fn known_id_uses_lookup_city() {
        let trips = build_trips(&[user(4, "Dana")]);
        assert_eq!(trips[0].city, "Tokyo");
        assert_eq!(trips[0].description, "Explore Tokyo with Dana.");
    }

    #[test]
    fn unknown_id_falls_back() {
        let trips = build_trips(&[user(42, "Eli")]);
        assert_eq!(trips[0].city, "Unknown");
        assert_eq!(trips[0].description, "Explore this city with Eli.");
    }

    #[test]
    fn traveler_fields_carry_through() {
        let trips = build_trips(&[user(2, "Fatima")]);
        assert_eq!(trips[0].traveler, "Fatima");
        assert_eq!(trips[0].email, "fatima@example.com");
    }

    #[test]
    fn user_record_parses_placeholder_payload() {
        let json = r#"[
            {"id": 1, "name": "Leanne Graham", "username": "Bret",
             "email": "Sincere@april.biz", "phone": "1-770-736-8031"}
        ]"#;
        let users: Vec<UserRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].email, "Sincere@april.biz");
    }
}
