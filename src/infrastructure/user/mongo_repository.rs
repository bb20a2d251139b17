//! MongoDB user repository implementation

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::ErrorKind;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

const COLLECTION_NAME: &str = "users";

/// BSON document layout for the users collection. The id is stored as
/// an ObjectId hex string under `_id`; the name fields are stored as
/// `firstname`/`lastname`, distinct from the camelCase wire format.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    firstname: String,
    lastname: String,
    email: String,
    age: i32,
}

impl UserDocument {
    fn from_user(id: String, user: &User) -> Self {
        Self {
            id,
            firstname: user.first_name().to_string(),
            lastname: user.last_name().to_string(),
            email: user.email().to_string(),
            age: user.age(),
        }
    }

    fn into_user(self) -> User {
        User::with_id(self.id, self.firstname, self.lastname, self.email, self.age)
    }
}

/// MongoDB implementation of the persistence gateway
#[derive(Debug, Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<UserDocument>(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| map_driver_error("failed to find user", e))?;

        Ok(document.map(UserDocument::into_user))
    }

    #[instrument(skip(self, user), fields(first_name = %user.first_name(), last_name = %user.last_name()))]
    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let id = ObjectId::new().to_hex();
        let document = UserDocument::from_user(id, &user);

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| map_driver_error("failed to insert user", e))?;

        tracing::info!(user_id = %document.id, "user created");
        Ok(document.into_user())
    }

    #[instrument(skip(self, user))]
    async fn update(&self, user: &User) -> Result<Option<User>, DomainError> {
        let id = match user.id() {
            Some(id) => id.to_string(),
            None => return Ok(None),
        };
        let document = UserDocument::from_user(id.clone(), user);

        let result = self
            .collection
            .replace_one(doc! { "_id": id.as_str() }, &document)
            .await
            .map_err(|e| map_driver_error("failed to update user", e))?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        tracing::info!(user_id = %id, "user updated");
        Ok(Some(document.into_user()))
    }

    #[instrument(skip(self))]
    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, DomainError> {
        let mut filter = doc! { "firstname": first_name, "lastname": last_name };
        if let Some(id) = exclude_id {
            filter.insert("_id", doc! { "$ne": id });
        }

        let count = self
            .collection
            .count_documents(filter)
            .await
            .map_err(|e| map_driver_error("failed to check name uniqueness", e))?;

        Ok(count > 0)
    }
}

/// Translate a driver error into the domain taxonomy. Interrupted or
/// timed-out I/O means the caller withdrew interest mid-operation and
/// surfaces as `Cancelled`; everything else is a storage failure with
/// the cause kept for internal logging.
fn map_driver_error(context: &str, err: mongodb::error::Error) -> DomainError {
    if let ErrorKind::Io(ref io) = *err.kind {
        if matches!(
            io.kind(),
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
        ) {
            return DomainError::Cancelled;
        }
    }

    DomainError::storage(format!("{context}: {err}"))
}
