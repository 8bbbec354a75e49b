//! Records fed to the trees by the driver, and the policy picking which of them to remove.

use crate::entry::{Key, Record};
use crate::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A user record read from a JSON array.
///
/// Only `userId` is interpreted. Every other field is kept verbatim and travels with the key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    #[serde(rename = "userId", alias = "UserId")]
    pub user_id: Key,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl User {
    pub fn new(user_id: Key) -> Self {
        User {
            user_id,
            attributes: Map::new(),
        }
    }
}

impl Record for User {
    fn key(&self) -> Key {
        self.user_id
    }
}

/// Decodes a JSON array of users.
///
/// # Examples
///
/// ```
/// use balanced_trees::source;
///
/// let users = source::parse_users(r#"[{"userId": 3, "name": "ada"}, {"userId": 5}]"#).unwrap();
/// assert_eq!(users.len(), 2);
/// assert_eq!(users[0].user_id, 3);
/// assert_eq!(users[0].attributes["name"], "ada");
/// ```
pub fn parse_users(json: &str) -> Result<Vec<User>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and decodes the JSON array of users stored at `path`.
pub fn load_users<P: AsRef<Path>>(path: P) -> Result<Vec<User>> {
    let path = path.as_ref();
    debug!("reading users from {}", path.display());
    let json = fs::read_to_string(path)?;
    let users = parse_users(&json)?;
    debug!("decoded {} users", users.len());
    Ok(users)
}

/// Returns `true` if `n` is a prime number. Zero, one and negative numbers are not prime.
///
/// # Examples
///
/// ```
/// use balanced_trees::source::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(n: Key) -> bool {
    if n <= 1 {
        return false;
    }
    let mut divisor: Key = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Returns the keys of `records` that are prime, in the order the records appear.
pub fn prime_keys<R: Record>(records: &[R]) -> Vec<Key> {
    records
        .iter()
        .map(Record::key)
        .filter(|key| is_prime(*key))
        .collect()
}
