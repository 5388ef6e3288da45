//! Entity trait implementation for the Bee model.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Bee`] to be managed by the generic [`crate::framework::ResourceActor`].

use crate::framework::ActorEntity;
use crate::model::{Bee, BeeCreate, BeeUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Bee {
    type Id = i32;
    type CreateParams = BeeCreate;
    type UpdateParams = BeeUpdate;
    type Context = ();

    /// Creates a new Bee with the store-assigned ID.
    ///
    /// Names are stored as given; empty and duplicate names are accepted.
    fn from_create_params(id: i32, params: BeeCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.name))
    }

    /// Replaces the name. The ID never changes.
    async fn on_update(&mut self, update: BeeUpdate, _ctx: &Self::Context) -> Result<(), String> {
        self.name = update.name;
        Ok(())
    }
}
