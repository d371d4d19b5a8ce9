use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User {0} is not authorized to perform admin operations")]
    Unauthorized(i64),
}
