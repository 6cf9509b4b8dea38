use criterion::Criterion;
use feer::{Error, Outcome};
use std::sync::OnceLock;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct UserData {
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub metadata: std::collections::HashMap<String, String>,
}

impl UserData {
    pub fn new(id: u64) -> Self {
        let mut metadata = std::collections::HashMap::new();
        metadata.insert("role".to_string(), "user".to_string());
        metadata.insert("department".to_string(), "engineering".to_string());
        metadata.insert("location".to_string(), "seoul".to_string());

        Self {
            user_id: id,
            username: format!("user_{id}"),
            email: format!("user{id}@company.com"),
            metadata,
        }
    }
}

pub fn realistic_user_data() -> &'static Vec<UserData> {
    static INSTANCE: OnceLock<Vec<UserData>> = OnceLock::new();
    INSTANCE.get_or_init(|| (0..1000).map(UserData::new).collect())
}

// ============================================================================
// Simulation Functions
// ============================================================================

pub fn simulate_db_query(user_id: u64) -> Outcome<UserData> {
    if user_id % 100 == 0 {
        return Outcome::err(Error::new("database: connection timeout"));
    }
    Outcome::<UserData>::ok(UserData::new(user_id))
}

pub fn simulate_validation(user: UserData) -> Outcome<UserData> {
    if user.user_id % 50 == 0 {
        return Outcome::err(Error::new("validation: invalid email format"));
    }
    Outcome::<UserData>::ok(user)
}

pub fn simulate_auth_check(user: UserData) -> Outcome<UserData> {
    if user.user_id % 25 == 0 {
        return Outcome::err(Error::new("authentication: token expired"));
    }
    Outcome::<UserData>::ok(user)
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
