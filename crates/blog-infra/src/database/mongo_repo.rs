//! MongoDB repository implementations.

use async_trait::async_trait;

use blog_core::domain::{
    Comment, CommentFields, Post, PostFields, User, UserFields, WishlistFields, WishlistItem,
};
use blog_core::error::RepoError;
use blog_core::ports::{
    CommentRepository, DeleteOutcome, InsertOutcome, PostRepository, UpdateOutcome,
    UserRepository, WishlistRepository,
};

use super::document::{
    CommentDocument, PostDocument, UserDocument, WishlistDocument, bson_id_to_string,
};
use super::filters;
use super::mongo_base::{MongoRepository, map_driver_error};

/// MongoDB post repository (`blog` collection).
pub type MongoPostRepository = MongoRepository<PostDocument>;

/// MongoDB comment repository (`comments` collection).
pub type MongoCommentRepository = MongoRepository<CommentDocument>;

/// MongoDB wishlist repository (`wishlist` collection).
pub type MongoWishlistRepository = MongoRepository<WishlistDocument>;

/// MongoDB user repository (`users` collection).
pub type MongoUserRepository = MongoRepository<UserDocument>;

fn into_domain<D, T: From<D>>(documents: Vec<D>) -> Vec<T> {
    documents.into_iter().map(Into::into).collect()
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn insert(&self, fields: PostFields) -> Result<InsertOutcome, RepoError> {
        self.insert_document(fields.into()).await
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(into_domain(self.find_documents(filters::all()).await?))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let filter = filters::by_id(id)?;
        Ok(self.find_one_document(filter).await?.map(Into::into))
    }

    async fn upsert(&self, id: &str, fields: PostFields) -> Result<UpdateOutcome, RepoError> {
        let filter = filters::by_id(id)?;
        let update = filters::replace_post_fields(fields)?;

        let result = self
            .collection
            .update_one(filter, update)
            .upsert(true)
            .await
            .map_err(map_driver_error)?;

        let upserted_id = result.upserted_id.as_ref().map(bson_id_to_string);

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        })
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<Post>, RepoError> {
        let documents = self
            .find_sorted(filters::all(), filters::newest_first(), limit)
            .await?;
        Ok(into_domain(documents))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, RepoError> {
        let values = self
            .collection
            .distinct("category", filters::all())
            .await
            .map_err(map_driver_error)?;

        Ok(values
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_owned))
            .collect())
    }

    async fn search_by_title(&self, pattern: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let documents = self
            .find_documents(filters::title_matches(pattern))
            .await?;
        Ok(into_domain(documents))
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn insert(&self, fields: CommentFields) -> Result<InsertOutcome, RepoError> {
        self.insert_document(fields.into()).await
    }

    async fn find_by_blog_id(&self, blog_id: &str) -> Result<Vec<Comment>, RepoError> {
        let documents = self.find_documents(filters::by_blog_id(blog_id)).await?;
        Ok(into_domain(documents))
    }
}

#[async_trait]
impl WishlistRepository for MongoWishlistRepository {
    async fn insert(&self, fields: WishlistFields) -> Result<InsertOutcome, RepoError> {
        self.insert_document(fields.into()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<WishlistItem>, RepoError> {
        let documents = self.find_documents(filters::by_email(email)).await?;
        Ok(into_domain(documents))
    }

    async fn delete(&self, id: &str) -> Result<DeleteOutcome, RepoError> {
        let filter = filters::by_id(id)?;
        self.delete_one_document(filter).await
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, fields: UserFields) -> Result<InsertOutcome, RepoError> {
        self.insert_document(fields.into()).await
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(into_domain(self.find_documents(filters::all()).await?))
    }
}
