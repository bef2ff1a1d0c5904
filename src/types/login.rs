use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Login {
    pub password: String,
}
