use sea_orm::{DbErr, EntityTrait};
use std::future::Future;

/// Converts a service-level input into a SeaORM active model ready to be saved.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(
        self,
    ) -> impl Future<Output = Result<<E as EntityTrait>::ActiveModel, DbErr>> + Send;
}
