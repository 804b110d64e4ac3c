//! Boilerplate generators for the typed clients.

/// `new()` constructor wrapping a generic `ResourceClient`.
#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

/// `find_<entity>` and `remove_<entity>` methods on top of the client's
/// [`ActorClient`](crate::framework::ActorClient) impl.
#[macro_export]
macro_rules! impl_lookup_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                /// Snapshot of one entry, or `None` when the id is unknown.
                pub async fn [<find_ $entity_name_snake>](
                    &self,
                    id: <$entity as $crate::framework::ActorEntity>::Id,
                ) -> Result<Option<$entity>, $error> {
                    <Self as $crate::framework::ActorClient<$entity>>::get(self, id).await
                }

                /// `true` if the entry was removed; `false` if unknown or still lending.
                pub async fn [<remove_ $entity_name_snake>](
                    &self,
                    id: <$entity as $crate::framework::ActorEntity>::Id,
                ) -> Result<bool, $error> {
                    <Self as $crate::framework::ActorClient<$entity>>::remove(self, id).await
                }
            }
        }
    };
}

/// Both of the above.
#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        impl_client_new!($client_name, $entity);
        impl_lookup_methods!($client_name, $entity, $error, $entity_name_snake);
    };
}
