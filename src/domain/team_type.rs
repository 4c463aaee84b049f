use serde::{Deserialize, Serialize};

/// Lookup row describing what kind of group a team is (school, community, ...)
///
/// Serialises to exactly `{ "id": .., "team": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamType {
    pub id: i32,
    /// Human readable label
    pub team: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_only_id_and_label() {
        let team_type = TeamType {
            id: 3,
            team: "community".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&team_type).unwrap(),
            json!({ "id": 3, "team": "community" })
        );
    }
}
