//! MongoDB repositories.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::{FindOneOptions, FindOptions},
    Collection,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use common::{AppError, AppResult};
use domain::{Booking, BookingStatus, NewBooking, NewService, Service, ServiceSummary, UpdateService};

use super::{BookingRepository, ServiceRepository, UpdateOutcome};
use crate::infra::Database;

/// Persistence shape of an entity.
trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> E;
}

fn parse_oid(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::bad_request("Invalid document ID."))
}

fn id_filter(oid: &ObjectId) -> Document {
    doc! { "_id": *oid }
}

fn to_persistence<T: Serialize>(raw: &T) -> AppResult<Document> {
    bson::to_document(raw).map_err(|e| AppError::internal(format!("bson encode: {}", e)))
}

fn from_persistence<T: DeserializeOwned>(doc: Document) -> AppResult<T> {
    bson::from_document(doc).map_err(|e| AppError::internal(format!("bson decode: {}", e)))
}

async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
    options: Option<FindOptions>,
) -> AppResult<Vec<E>> {
    let cursor = collection.find(filter, options).await?;
    let documents: Vec<Document> = cursor.try_collect().await?;

    Ok(decode_all::<E, D>(collection.name(), documents))
}

/// Decode a batch, skipping documents that do not fit the typed shape.
fn decode_all<E, D: MongoDocument<E>>(collection: &str, documents: Vec<Document>) -> Vec<E> {
    documents
        .into_iter()
        .filter_map(|doc| {
            let id = doc.get("_id").map(ToString::to_string).unwrap_or_default();
            match bson::from_document::<D>(doc) {
                Ok(raw) => Some(raw.to_domain()),
                Err(e) => {
                    tracing::warn!(
                        collection,
                        document_id = %id,
                        error = %e,
                        "Skipping undecodable document"
                    );
                    None
                }
            }
        })
        .collect()
}

async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> AppResult<Option<E>> {
    match collection.find_one(filter, None).await? {
        Some(doc) => Ok(Some(from_persistence::<D>(doc)?.to_domain())),
        None => Ok(None),
    }
}

// =============================================================================
// Services
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct ServiceMongo {
    _id: ObjectId,
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    area: Option<String>,
}

impl ServiceMongo {
    fn from_new(oid: ObjectId, new: NewService) -> Self {
        Self {
            _id: oid,
            email: new.email,
            name: new.name,
            url: new.url,
            price: new.price,
            description: new.description,
            area: new.area,
        }
    }
}

impl MongoDocument<Service> for ServiceMongo {
    fn to_domain(self) -> Service {
        Service {
            id: self._id.to_hex(),
            email: self.email,
            name: self.name,
            url: self.url,
            price: self.price,
            description: self.description,
            area: self.area,
        }
    }
}

fn update_document(changes: &UpdateService) -> Document {
    let mut set = Document::new();
    if let Some(email) = &changes.email {
        set.insert("email", email.as_str());
    }
    if let Some(name) = &changes.name {
        set.insert("name", name.as_str());
    }
    if let Some(url) = &changes.url {
        set.insert("url", url.as_str());
    }
    if let Some(price) = changes.price {
        set.insert("price", price);
    }
    if let Some(description) = &changes.description {
        set.insert("description", description.as_str());
    }
    if let Some(area) = &changes.area {
        set.insert("area", area.as_str());
    }
    set
}

pub struct MongoServiceRepo {
    collection: Collection<Document>,
}

impl MongoServiceRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.services(),
        }
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepo {
    async fn list(&self, limit: Option<i64>) -> AppResult<Vec<Service>> {
        let options = limit.map(|limit| {
            let mut options = FindOptions::default();
            options.limit = Some(limit);
            options
        });
        find_many_by::<_, ServiceMongo>(&self.collection, doc! {}, options).await
    }

    async fn list_by_owner(&self, email: &str) -> AppResult<Vec<Service>> {
        find_many_by::<_, ServiceMongo>(&self.collection, doc! { "email": email }, None).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Service>> {
        let oid = parse_oid(id)?;
        find_one_by::<_, ServiceMongo>(&self.collection, id_filter(&oid)).await
    }

    async fn find_summary(&self, id: &str) -> AppResult<Option<ServiceSummary>> {
        let oid = parse_oid(id)?;
        let mut options = FindOneOptions::default();
        options.projection = Some(doc! { "name": 1, "url": 1 });

        match self.collection.find_one(id_filter(&oid), options).await? {
            Some(doc) => Ok(Some(from_persistence::<ServiceSummary>(doc)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, service: NewService) -> AppResult<String> {
        let oid = ObjectId::new();
        let doc = to_persistence(&ServiceMongo::from_new(oid, service))?;
        self.collection.insert_one(doc, None).await?;
        Ok(oid.to_hex())
    }

    async fn update(&self, id: &str, changes: UpdateService) -> AppResult<UpdateOutcome> {
        let oid = parse_oid(id)?;
        let update = doc! { "$set": update_document(&changes) };
        let result = self
            .collection
            .update_one(id_filter(&oid), update, None)
            .await?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: &str) -> AppResult<u64> {
        let oid = parse_oid(id)?;
        let result = self.collection.delete_one(id_filter(&oid), None).await?;
        Ok(result.deleted_count)
    }
}

// =============================================================================
// Bookings
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingMongo {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    service_id: String,
    #[serde(default)]
    user_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
    #[serde(default)]
    provider_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(default)]
    status: BookingStatus,
}

impl BookingMongo {
    fn from_new(oid: ObjectId, new: NewBooking) -> Self {
        Self {
            id: oid,
            service_id: new.service_id,
            user_email: new.user_email,
            user_name: new.user_name,
            provider_email: new.provider_email,
            service_date: new.service_date,
            instructions: new.instructions,
            price: new.price,
            status: new.status,
        }
    }
}

impl MongoDocument<Booking> for BookingMongo {
    fn to_domain(self) -> Booking {
        Booking {
            id: self.id.to_hex(),
            service_id: self.service_id,
            user_email: self.user_email,
            user_name: self.user_name,
            provider_email: self.provider_email,
            service_date: self.service_date,
            instructions: self.instructions,
            price: self.price,
            status: self.status,
        }
    }
}

pub struct MongoBookingRepo {
    collection: Collection<Document>,
}

impl MongoBookingRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.bookings(),
        }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepo {
    async fn create(&self, booking: NewBooking) -> AppResult<String> {
        let oid = ObjectId::new();
        let doc = to_persistence(&BookingMongo::from_new(oid, booking))?;
        self.collection.insert_one(doc, None).await?;
        Ok(oid.to_hex())
    }

    async fn list_by_customer(&self, email: &str) -> AppResult<Vec<Booking>> {
        find_many_by::<_, BookingMongo>(&self.collection, doc! { "userEmail": email }, None).await
    }

    async fn list_by_provider(&self, email: &str) -> AppResult<Vec<Booking>> {
        find_many_by::<_, BookingMongo>(&self.collection, doc! { "providerEmail": email }, None)
            .await
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> AppResult<UpdateOutcome> {
        let oid = parse_oid(id)?;
        let update = doc! { "$set": { "status": status.as_str() } };
        let result = self
            .collection
            .update_one(id_filter(&oid), update, None)
            .await?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }
}
